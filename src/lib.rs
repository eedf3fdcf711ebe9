//! bin2art - binary files as pixel art
//!
//! Command-line plumbing around the `byte-canvas` renderer: configuration,
//! input discovery, memory-mapped loading, enhancements, encoding and batch
//! runs. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
