use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two schedule views that are cached and served independently.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Future,
    Past,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Future, Category::Past];

    #[must_use]
    pub fn cache_file_name(self) -> &'static str {
        match self {
            Self::Future => "future_games_cache.json",
            Self::Past => "past_games_cache.json",
        }
    }

    /// Maximum age of cached data before a refetch.
    #[must_use]
    pub fn freshness_window(self) -> Duration {
        match self {
            Self::Future => Duration::hours(1),
            Self::Past => Duration::minutes(15),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Future => 0,
            Self::Past => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Future => write!(f, "future"),
            Self::Past => write!(f, "past"),
        }
    }
}
