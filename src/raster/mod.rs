//! Software painter for neumorphic shapes.
//!
//! Shapes are evaluated as signed distance fields per pixel center, the same
//! way a fragment shader would: edges get a one-pixel smoothstep, drop
//! shadows fade from `-blur` to `2 * blur` outside the offset shape, and inner
//! shadows fade in where the shape is no longer covered by its offset copy.

mod controls;

pub use controls::paint_control;

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::color::{clamp, Color};
use crate::error::Result;
use crate::geometry::{Outline, Rect};
use crate::metrics::Metrics;
use crate::shadow::{DualShadow, ShadowLayer};

/// Half-width of the anti-aliased edge, in pixels.
const EDGE_AA: f64 = 0.5;

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp(0.0, 1.0, (x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// An RGBA pixel buffer, premultiplied internally.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[f64; 4]>,
}

impl Canvas {
    /// Transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        log::debug!("canvas {}x{}", width, height);
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// Canvas large enough for a control laid out with `metrics`.
    pub fn for_metrics(metrics: &Metrics) -> Self {
        Self::new(metrics.width.ceil() as u32, metrics.height.ceil() as u32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        let premultiplied = [color.r * color.a, color.g * color.a, color.b * color.a, color.a];
        self.pixels.fill(premultiplied);
    }

    /// Straight-alpha color at a pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[self.index(x, y)];
        if a <= 0.0 {
            return Some(Color::TRANSPARENT);
        }
        Some(Color::rgba(r / a, g / a, b / a, a))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Source-over `color`, with its alpha scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        let alpha = clamp(0.0, 1.0, color.a * coverage);
        if alpha <= 0.0 {
            return;
        }
        let index = self.index(x, y);
        let dst = &mut self.pixels[index];
        let keep = 1.0 - alpha;
        dst[0] = color.r * alpha + dst[0] * keep;
        dst[1] = color.g * alpha + dst[1] * keep;
        dst[2] = color.b * alpha + dst[2] * keep;
        dst[3] = alpha + dst[3] * keep;
    }

    /// Visit every pixel center inside `area` (clipped to the canvas).
    fn for_each_pixel(&mut self, area: Rect, mut f: impl FnMut(&mut Self, u32, u32, f64, f64)) {
        if area.is_empty() {
            return;
        }
        let x0 = area.x.floor().max(0.0) as u32;
        let y0 = area.y.floor().max(0.0) as u32;
        let x1 = ((area.x + area.width).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((area.y + area.height).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                f(self, x, y, x as f64 + 0.5, y as f64 + 0.5);
            }
        }
    }

    pub fn fill(&mut self, outline: &Outline, color: Color) {
        let area = outline.bounds().inset(-1.0);
        self.for_each_pixel(area, |canvas, x, y, px, py| {
            let d = outline.distance(px, py);
            let coverage = 1.0 - smoothstep(-EDGE_AA, EDGE_AA, d);
            canvas.blend(x, y, color, coverage);
        });
    }

    /// Blurred copy of `outline`, shifted by the layer offset, painted under
    /// whatever is drawn next.
    pub fn drop_shadow(&mut self, outline: &Outline, layer: &ShadowLayer) {
        if !layer.is_visible() {
            return;
        }
        let (dx, dy) = layer.offset;
        let blur = layer.radius;
        let area = outline.bounds().offset(dx, dy).inset(-(2.0 * blur + 1.0));
        self.for_each_pixel(area, |canvas, x, y, px, py| {
            let d = outline.distance(px - dx, py - dy);
            let coverage = 1.0 - smoothstep(-blur, blur * 2.0, d);
            canvas.blend(x, y, layer.color, coverage);
        });
    }

    /// Shadow cast inside `outline` along the edges its offset copy uncovers.
    pub fn inner_shadow(&mut self, outline: &Outline, layer: &ShadowLayer) {
        if !layer.is_visible() {
            return;
        }
        let (dx, dy) = layer.offset;
        let blur = layer.radius;
        let area = outline.bounds().inset(-1.0);
        self.for_each_pixel(area, |canvas, x, y, px, py| {
            let inside = 1.0 - smoothstep(-EDGE_AA, EDGE_AA, outline.distance(px, py));
            if inside <= 0.0 {
                return;
            }
            let shifted = outline.distance(px - dx, py - dy);
            let shade = smoothstep(-blur, blur, shifted);
            canvas.blend(x, y, layer.color, inside * shade);
        });
    }

    /// Both layers of a dual shadow: outside the shape when raised, inside
    /// when inset. Raised shadows must be painted before the fill, inset ones
    /// after it.
    pub fn dual_shadow(&mut self, outline: &Outline, shadow: &DualShadow) {
        for layer in shadow.layers() {
            if shadow.inset {
                self.inner_shadow(outline, &layer);
            } else {
                self.drop_shadow(outline, &layer);
            }
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.pixel(x, y).unwrap_or(Color::TRANSPARENT);
            Rgba(color.to_rgba8())
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
