//! Application module - the canvas hosts drive and its lifecycle.
//!
//! This module is organized into several submodules:
//! - `state` - The AnnotationCanvas struct, accessors and the debug snapshot
//! - `lifecycle` - Image switching, surface/background attachment, settings
//!
//! Pointer handlers live in [`crate::input`] and drawing in [`crate::render`],
//! both as further `impl AnnotationCanvas` blocks.

mod lifecycle;
mod state;

pub use state::{AnnotationCanvas, InteractionSnapshot};
