//! Rendering - the headless drawing surface and the full-redraw pipeline.
//!
//! - `surface` - The pixmap the canvas draws into
//! - `background` - The image under the annotations, pre-converted for drawing
//! - `canvas` - Frame composition: background, rectangles, preview, marker

mod background;
mod canvas;
mod surface;

pub use background::Background;
pub use canvas::{Frame, FrameStats, draw_frame};
pub use surface::Surface;
