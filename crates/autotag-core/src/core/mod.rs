pub mod error;
pub mod error_help;

pub use error::{AutotagError, AutotagResult};
pub use error_help::format_error_with_help;
