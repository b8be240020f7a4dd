//! Proofline site kernel library.
//!
//! This library exposes the kernel for the `proofline` binary and for
//! integration testing.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod theme;

pub use config::Config;
pub use state::AppState;
