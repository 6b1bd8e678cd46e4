use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the directory cannot be created or is read-only
pub fn check_cache_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if let Err(e) = fs::create_dir_all(&path) {
        return Err(format!("The cache directory '{dir}' cannot be created: {e}"));
    }
    match fs::metadata(&path) {
        Ok(meta) if !meta.is_dir() => Err(format!("The cache path '{dir}' is not a directory.")),
        Ok(meta) if meta.permissions().readonly() => {
            Err(format!("The cache directory '{dir}' is not writeable."))
        }
        Ok(_) => Ok(path),
        Err(e) => Err(format!("The cache directory '{dir}' is not readable: {e}")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not an http(s) origin
pub fn check_origin(origin: &str) -> Result<String, String> {
    let origin = origin.trim().trim_end_matches('/');
    if origin.starts_with("http://") || origin.starts_with("https://") {
        Ok(origin.to_string())
    } else {
        Err(format!("The origin '{origin}' must start with http:// or https://"))
    }
}
