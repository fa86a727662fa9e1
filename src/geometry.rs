//! Shapes as signed distance fields: negative inside, zero on the edge,
//! positive outside.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A closed outline that can report its signed distance.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Rectangle with circular corners. The radius is clamped to half the
    /// smaller side, so a square with a huge radius is a circle.
    RoundedRect { rect: Rect, radius: f64 },
    /// Simple polygon; the last point connects back to the first.
    Polygon(Vec<(f64, f64)>),
}

impl Outline {
    pub fn rounded_rect(rect: Rect, radius: f64) -> Self {
        Outline::RoundedRect { rect, radius }
    }

    /// Circle inscribed in `rect`'s smaller side, centered in `rect`.
    pub fn circle(rect: Rect) -> Self {
        let side = rect.width.min(rect.height);
        let (cx, cy) = rect.center();
        Outline::RoundedRect {
            rect: Rect::new(cx - side * 0.5, cy - side * 0.5, side, side),
            radius: side * 0.5,
        }
    }

    pub fn distance(&self, x: f64, y: f64) -> f64 {
        match self {
            Outline::RoundedRect { rect, radius } => rounded_rect_sdf(x, y, rect, *radius),
            Outline::Polygon(points) => polygon_sdf(x, y, points),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Outline::RoundedRect { rect, .. } => *rect,
            Outline::Polygon(points) => {
                let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
                let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
                for &(x, y) in points {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
                if points.is_empty() {
                    Rect::default()
                } else {
                    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
                }
            }
        }
    }
}

pub fn rounded_rect_sdf(x: f64, y: f64, rect: &Rect, radius: f64) -> f64 {
    let half_w = rect.width * 0.5;
    let half_h = rect.height * 0.5;
    let (cx, cy) = rect.center();
    let r = radius.min(half_w.min(half_h)).max(0.0);

    let qx = (x - cx).abs() - half_w + r;
    let qy = (y - cy).abs() - half_h + r;
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    qx.max(qy).min(0.0) + outside - r
}

/// Exact distance to a simple polygon, signed by the even-odd rule.
pub fn polygon_sdf(x: f64, y: f64, points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    if n < 3 {
        return f64::MAX;
    }
    let mut best = f64::MAX;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];

        let (ex, ey) = (xj - xi, yj - yi);
        let (wx, wy) = (x - xi, y - yi);
        let len2 = ex * ex + ey * ey;
        let t = if len2 > 0.0 {
            ((wx * ex + wy * ey) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (dx, dy) = (wx - ex * t, wy - ey * t);
        best = best.min(dx * dx + dy * dy);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    let d = best.sqrt();
    if inside {
        -d
    } else {
        d
    }
}

/// Checkmark glyph filling a `size` square whose top-left is at `(x, y)`.
pub fn checkmark(x: f64, y: f64, size: f64) -> Outline {
    const POINTS: [(f64, f64); 6] = [
        (0.0, 0.5125),
        (0.154_166_666_6, 0.358_333_3),
        (0.375, 0.566_666_66),
        (0.845_833_333, 0.083_333_333_3),
        (1.0, 0.2375),
        (0.375, 0.875),
    ];
    Outline::Polygon(
        POINTS
            .iter()
            .map(|(px, py)| (x + px * size, y + py * size))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rect_inset_and_offset() {
        let r = Rect::new(0.0, 0.0, 10.0, 6.0);
        assert_eq!(r.inset(2.0), Rect::new(2.0, 2.0, 6.0, 2.0));
        assert_eq!(r.inset(5.0).height, 0.0);
        assert!(r.inset(5.0).is_empty());
        assert_eq!(r.offset(1.0, -1.0), Rect::new(1.0, -1.0, 10.0, 6.0));
    }

    #[test]
    fn test_square_sdf() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(approx_eq(rounded_rect_sdf(5.0, 5.0, &r, 0.0), -5.0));
        assert!(approx_eq(rounded_rect_sdf(12.0, 5.0, &r, 0.0), 2.0));
        assert!(approx_eq(rounded_rect_sdf(10.0, 5.0, &r, 0.0), 0.0));
    }

    #[test]
    fn test_rounded_corner_sdf() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // The sharp corner lies outside once rounded.
        assert!(rounded_rect_sdf(0.0, 0.0, &r, 3.0) > 0.0);
        assert!(rounded_rect_sdf(0.0, 0.0, &r, 0.0) <= 0.0);
        // Corner circle center is 3 from the corner on both axes.
        let d = rounded_rect_sdf(0.0, 0.0, &r, 3.0);
        assert!(approx_eq(d, (18.0f64).sqrt() - 3.0));
    }

    #[test]
    fn test_circle() {
        let c = Outline::circle(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert!(approx_eq(c.distance(10.0, 5.0), -5.0));
        assert!(approx_eq(c.distance(10.0, 0.0), 0.0));
        assert!(approx_eq(c.distance(18.0, 5.0), 3.0));
    }

    #[test]
    fn test_polygon_sdf() {
        let square = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        assert!(approx_eq(polygon_sdf(2.0, 2.0, &square), -2.0));
        assert!(approx_eq(polygon_sdf(6.0, 2.0, &square), 2.0));
        assert_eq!(polygon_sdf(0.0, 0.0, &square[..2]), f64::MAX);
    }

    #[test]
    fn test_checkmark_bounds() {
        let mark = checkmark(10.0, 10.0, 20.0);
        let bounds = mark.bounds();
        assert!(approx_eq(bounds.x, 10.0));
        assert!(approx_eq(bounds.width, 20.0));
        // Elbow of the check is inside the glyph.
        assert!(mark.distance(10.0 + 0.375 * 20.0, 10.0 + 0.7 * 20.0) < 0.0);
    }
}
