//! Pointer input handling and curve smoothing.
//!
//! This module translates host pointer notifications into surface-local
//! samples and smooths the raw pointer path into renderable curve segments.

pub mod events;
pub mod smooth;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerPosition, PointerSource};
pub use smooth::{SmoothedSample, Smoother};
