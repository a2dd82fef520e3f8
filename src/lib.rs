//! Annoboard - draw and resize rectangle annotations on top of a raster image.
//!
//! The crate is the interaction core of an annotation tool: it consumes raw
//! pointer events, decides whether the user is creating a rectangle, grabbing
//! a corner to resize one, or just hovering, and redraws a headless surface
//! after every change. Which image is shown and where its rectangles live
//! between switches is up to the host, which listens for replace-style
//! notifications through [`store::CollectionObserver`].
//!
//! ## Modules
//!
//! - `types` - Coordinates, rectangles, corners and image identifiers
//! - `geometry` - Corner derivation, proximity and containment tests
//! - `spatial_index` - R-tree over corner points for the hover scan
//! - `input` - Pointer state machine (down / move / up / leave)
//! - `render` - Surface, background and the full-redraw pipeline
//! - `store` - Active rectangle collection and its observers
//! - `collections` - In-memory multi-image store for hosts and tests
//! - `app` - [`AnnotationCanvas`], the type hosts drive

pub mod app;
pub mod collections;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use app::{AnnotationCanvas, InteractionSnapshot};
pub use input::{InputState, PointerEvent};
pub use types::{Coordinate, Corner, CornerRef, ImageId, Rectangle};
