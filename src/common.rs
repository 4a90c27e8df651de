pub mod error;
pub use error::AppError;
pub mod masks;
