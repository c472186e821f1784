// Debug Demos Core - Demonstration Programs & Ports
// NO terminal, subscriber or CLI dependencies

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
