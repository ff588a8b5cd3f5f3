//! # Config Crate
//!
//! Centralized configuration for the polygon tessellation pipeline.
//! Vertex layout sizes, the fixed roof normal and numeric tolerances are
//! defined here so the tessellator never carries bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TessellatorConfig, FLOAT_SIZE_BYTES, POSITION_COMPONENTS};
//!
//! let cfg = TessellatorConfig::new(1000.0, 2000.0, false).unwrap();
//! assert_eq!(cfg.stride(), POSITION_COMPONENTS * FLOAT_SIZE_BYTES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Configuration values are checked once at construction
//! - **Dependency Free**: Nothing but `std`

pub mod constants;

#[cfg(test)]
mod tests;
