pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod report;

pub use error::{FloorlayError, Result};
