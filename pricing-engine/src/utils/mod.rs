//! Utilities: logging and boundary validation

pub mod logger;
pub mod validation;
