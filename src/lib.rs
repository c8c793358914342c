pub mod app;
pub mod codec;
pub mod error;
pub mod player;
pub mod snapshot;
pub mod workflow;

pub use error::{Error, Result, ValidationError, Warning};
