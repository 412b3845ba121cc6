//! Utility modules for errors and logging.

pub mod error;
pub mod logger;
