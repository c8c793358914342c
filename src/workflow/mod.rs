pub mod artifact;
pub mod pipeline;
pub mod restore;
pub mod store;

pub use pipeline::{Pipeline, Requirement};
pub use restore::{restore, RestoreReport, RestoreStep};
pub use store::{store, StoreReport, StoreStep};
