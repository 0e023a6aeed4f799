// Utility module exports
pub mod calculations;
pub mod validation;

pub use calculations::*;
pub use validation::*;
