pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod ui;

pub use error::{AppError, Result};
