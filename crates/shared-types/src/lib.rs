pub mod category;
pub mod config;
pub mod error;

pub use category::*;
pub use config::*;
pub use error::*;
