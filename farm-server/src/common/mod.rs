//! Common infrastructure - error envelope, result alias, logging

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, AppResponse};
pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
