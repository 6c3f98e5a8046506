//! Image centering loader.
//!
//! Places an externally supplied raster payload onto the surface, centered.
//! Loading is independent of gesture capture: it changes no flags and
//! records no tokens, and a concurrent gesture simply interleaves with it
//! on the raster (last write wins).

use super::Surface;
use crate::payload;
use cairo::ImageSurface;

/// Computes the top-left offset that centers an image on a surface.
///
/// If the image overflows the surface on either axis, both components reset
/// to zero and the image is drawn top-left anchored; the axes are not
/// clamped independently.
pub fn centered_offset(
    surface_width: i32,
    surface_height: i32,
    image_width: i32,
    image_height: i32,
) -> (i32, i32) {
    let x = (surface_width - image_width) / 2;
    let y = (surface_height - image_height) / 2;
    if x < 0 || y < 0 { (0, 0) } else { (x, y) }
}

impl Surface {
    /// Decodes an encoded raster payload and draws it centered on the surface.
    ///
    /// The payload is accepted with or without the canonical
    /// `data:image/png;base64,` prefix. Lock state, modified state, and the
    /// stroke history are untouched. Payloads that fail to decode are
    /// skipped outright.
    pub fn load_payload(&mut self, encoded: &str) {
        let Ok(png) = payload::decode(encoded) else {
            return;
        };
        let Ok(image) = ImageSurface::create_from_png(&mut png.as_slice()) else {
            return;
        };

        let (x, y) = centered_offset(
            self.canvas.width(),
            self.canvas.height(),
            image.width(),
            image.height(),
        );
        self.canvas.draw_image_at(&image, f64::from(x), f64::from(y));
    }
}
