//! # Config Crate
//!
//! Centralized configuration constants for the CST → AST adaptation pipeline.
//! All parameter defaults and recovery sentinels are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SIZE, DEFAULT_CENTER};
//!
//! // Defaults applied when an optional argument is omitted
//! let size = DEFAULT_SIZE;
//! assert_eq!(size, 1.0);
//! assert!(!DEFAULT_CENTER);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Language Compatible**: Defaults match the modeling language's behavior
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
