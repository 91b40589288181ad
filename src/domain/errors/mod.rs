mod cast_errors;
mod validation_errors;

pub use cast_errors::*;
pub use validation_errors::*;
