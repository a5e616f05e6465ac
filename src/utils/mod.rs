//! Shared utility functions.
//!
//! This module contains reusable utilities used across the codebase:
//! - `html`: entity normalization for attribute values scraped from the portal
//! - `filename`: filesystem-safe names for downloaded media

mod filename;
mod html;

pub use filename::sanitize_filename;
pub use html::unescape_amp;
