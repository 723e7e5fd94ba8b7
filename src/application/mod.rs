pub mod actions;
pub mod classifier;
pub mod error;
pub mod faults;
pub mod ports;
pub mod transformer;

pub use error::{ResponderError, ResponderResult};
