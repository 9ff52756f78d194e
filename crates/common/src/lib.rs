//! Shared types for the trinket viewer.
//!
//! # Invariants
//! - Material parameters stay inside their panel ranges after every set.
//! - Tween settings are always usable: blend in (0, 1], threshold positive.

pub mod config;
pub mod material;

pub use config::{ConfigError, TweenSettings, ViewerConfig};
pub use material::{METALNESS_MAX, MaterialParams, parse_hex_color};
