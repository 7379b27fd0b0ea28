//! 에러 타입 모듈

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
