pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod fetcher;
    pub mod http_handlers;
    pub mod parser;
    pub mod schedule;
    pub mod time;
}

pub use controller::schedule::AppState;
pub use error::AppError;
