//! # Config Crate
//!
//! Centralized configuration constants for the py2rust pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::MAX_LITERAL_DEPTH;
//!
//! // Guard recursive lowering against pathological nesting
//! let depth = 3;
//! assert!(depth < MAX_LITERAL_DEPTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, safe from any crate
//! - **Python Compatible**: Defaults match CPython behavior where one exists

pub mod constants;
