//! Library exports for reusing inkpad subsystems.
//!
//! Exposes the drawing surface controller alongside the supporting modules it
//! relies on so that host frontends can wire pointer input, collaborator
//! fields, and image loading without going through the replay binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod payload;
pub mod stroke;
pub mod surface;
pub mod util;

pub use config::Config;
pub use surface::{Surface, SurfaceInit};
