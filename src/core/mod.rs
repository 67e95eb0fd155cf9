pub mod constants;
pub mod error;

pub use error::{GameError, Result};
