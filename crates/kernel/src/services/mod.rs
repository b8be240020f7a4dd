//! Kernel services.

pub mod submissions;

pub use submissions::{SqlSubmissionStore, StoreError, SubmissionStore};
