#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod parser;
pub mod sanitize;

pub use error::Error;
pub use grading::grade;
pub use parser::parse_quiz;
pub use sanitize::sanitize;
