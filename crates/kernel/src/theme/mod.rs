//! Theme engine and template rendering.
//!
//! Provides Tera-based template rendering for site pages, with a
//! `format_date` filter for stored Unix timestamps.

mod engine;

pub use engine::ThemeEngine;
