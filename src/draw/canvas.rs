//! Cairo-backed raster target for stroke rendering.

use super::color::Color;
use crate::util::Point;
use cairo::{Context, Format, ImageSurface};

/// Fixed-size raster target that strokes are rendered onto.
///
/// Owns the Cairo image surface and context plus the render cursor: the point
/// the next smoothing segment continues from. Each segment is stroked as soon
/// as it arrives, so an interrupted gesture still leaves everything drawn so
/// far on the raster.
pub struct Canvas {
    surface: ImageSurface,
    ctx: Context,
    width: i32,
    height: i32,
    cursor: Option<Point>,
}

impl Canvas {
    /// Creates a transparent ARGB raster with the given pen settings.
    ///
    /// The pen uses round caps and joins so consecutive smoothing segments
    /// blend into one continuous stroke.
    ///
    /// # Errors
    /// Returns the underlying Cairo error when the surface or context cannot
    /// be acquired.
    pub fn new(
        width: i32,
        height: i32,
        pen_color: Color,
        pen_width: f64,
    ) -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        let ctx = Context::new(&surface)?;

        ctx.set_source_rgba(pen_color.r, pen_color.g, pen_color.b, pen_color.a);
        ctx.set_line_width(pen_width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        Ok(Self {
            surface,
            ctx,
            width,
            height,
            cursor: None,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Begins a new stroke path anchored at `p`.
    pub fn begin_path(&mut self, p: Point) {
        self.ctx.new_path();
        self.ctx.move_to(p.x, p.y);
        self.cursor = Some(p);
    }

    /// Strokes one smoothing segment from the cursor to `end`, bending toward
    /// `control`, and advances the cursor to `end`.
    ///
    /// Cairo only exposes cubic curves, so the quadratic control point is
    /// elevated to the equivalent cubic pair. Ignored when no path has been
    /// begun.
    pub fn quad_segment_to(&mut self, control: Point, end: Point) {
        let Some(from) = self.cursor else { return };

        let c1 = Point::new(
            from.x + 2.0 / 3.0 * (control.x - from.x),
            from.y + 2.0 / 3.0 * (control.y - from.y),
        );
        let c2 = Point::new(
            end.x + 2.0 / 3.0 * (control.x - end.x),
            end.y + 2.0 / 3.0 * (control.y - end.y),
        );

        self.ctx.move_to(from.x, from.y);
        self.ctx.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
        let _ = self.ctx.stroke();
        self.cursor = Some(end);
    }

    /// Strokes a straight segment from the cursor to `end` and advances the
    /// cursor. Used when replaying recorded strokes, which keep only the
    /// averaged coordinates.
    pub fn line_segment_to(&mut self, end: Point) {
        let Some(from) = self.cursor else { return };

        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(end.x, end.y);
        let _ = self.ctx.stroke();
        self.cursor = Some(end);
    }

    /// Queues the degenerate single-point mark for a gesture that never moved.
    ///
    /// The 1x1 rectangle is stroked with the full pen width by
    /// [`Canvas::finish_path`], which leaves a visible dot.
    pub fn mark_dot(&mut self, p: Point) {
        self.ctx.rectangle(p.x, p.y, 1.0, 1.0);
    }

    /// Commits any pending path to the raster and forgets the cursor.
    pub fn finish_path(&mut self) {
        let _ = self.ctx.stroke();
        self.cursor = None;
    }

    /// Erases the raster back to full transparency. Pen settings survive.
    pub fn erase(&mut self) {
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        let _ = self.ctx.paint();
        self.ctx.restore().ok();
    }

    /// Paints a decoded image onto the raster with its top-left corner at
    /// `(x, y)`. Existing strokes underneath are painted over.
    pub fn draw_image_at(&mut self, image: &ImageSurface, x: f64, y: f64) {
        self.ctx.save().ok();
        let _ = self.ctx.set_source_surface(image, x, y);
        let _ = self.ctx.paint();
        self.ctx.restore().ok();
    }

    /// Encodes the current raster as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, cairo::IoError> {
        self.surface.flush();
        let mut png = Vec::new();
        self.surface.write_to_png(&mut png)?;
        Ok(png)
    }
}
