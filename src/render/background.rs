//! Background image, converted once into a premultiplied pixmap.

use image::RgbaImage;
use tiny_skia::{ColorU8, FilterQuality, Pixmap, PixmapPaint, Transform};

/// The image drawn under the annotations, at a host-chosen size.
#[derive(Clone)]
pub struct Background {
    pixmap: Option<Pixmap>,
    width: f32,
    height: f32,
}

impl Background {
    /// `width`/`height` are the draw size on the surface. Negative or
    /// non-finite sizes are treated as zero, which suppresses the draw.
    pub fn new(image: &RgbaImage, width: f32, height: f32) -> Self {
        let pixmap = to_pixmap(image);
        if pixmap.is_none() {
            tracing::warn!(
                width = image.width(),
                height = image.height(),
                "Background image is empty, nothing will be drawn"
            );
        }
        Self {
            pixmap,
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Draw at the image's natural size.
    pub fn from_image(image: &RgbaImage) -> Self {
        Self::new(image, image.width() as f32, image.height() as f32)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_visible(&self) -> bool {
        self.pixmap.is_some() && self.width > 0.0 && self.height > 0.0
    }

    /// Draw at the origin, scaled to the target size.
    pub(crate) fn draw(&self, target: &mut Pixmap) {
        if !self.is_visible() {
            return;
        }
        let Some(pixmap) = &self.pixmap else {
            return;
        };

        let sx = self.width / pixmap.width() as f32;
        let sy = self.height / pixmap.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(0, 0, pixmap.as_ref(), &paint, Transform::from_scale(sx, sy), None);
    }
}

fn sanitize(size: f32) -> f32 {
    if size.is_finite() { size.max(0.0) } else { 0.0 }
}

fn to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

impl std::fmt::Debug for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Background")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("visible", &self.is_visible())
            .finish()
    }
}
