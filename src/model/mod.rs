pub mod card;
pub mod config;

pub use card::*;
pub use config::*;
