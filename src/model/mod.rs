pub mod category;
pub mod game;

pub use category::*;
pub use game::*;
