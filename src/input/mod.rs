//! Pointer input handling for the annotation canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Hover tracking runs alongside it only while idle.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `pointer` - The four raw pointer events and their dispatch
//! - `mouse_down` - Gesture start (create or resize)
//! - `drag` - Pointer move (hover scan, create preview, resize)
//! - `mouse_up` - Gesture end (commit, discard, final resize), also on leave
//! - `resize` - Corner → coordinate mutation table

mod drag;
mod mouse_down;
mod mouse_up;
mod pointer;
pub mod resize;
mod state;

pub use pointer::PointerEvent;
pub use state::InputState;
