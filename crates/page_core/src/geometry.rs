//! Screen-space rectangles used by the intersection observer.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_min_size(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self::from_min_max(min_x, min_y, min_x + width, min_y + height)
    }

    pub fn width(&self) -> f32 {
        (self.max_x - self.min_x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max_y - self.min_y).max(0.0)
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Overlap of two rectangles, edges inclusive.
    ///
    /// Touching rectangles yield a zero-area intersection rather than `None`,
    /// which lets a collapsed detection band still report a hit.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Rect::from_min_max(min_x, min_y, max_x, max_y))
    }

    /// Grows the rectangle by the given per-edge amounts. Negative values shrink it.
    pub fn expand(&self, top: f32, right: f32, bottom: f32, left: f32) -> Rect {
        let mut out = Rect::from_min_max(
            self.min_x - left,
            self.min_y - top,
            self.max_x + right,
            self.max_y + bottom,
        );
        // Opposing insets that overlap collapse to a line at their meeting point.
        if out.min_x > out.max_x {
            let mid = (out.min_x + out.max_x) / 2.0;
            out.min_x = mid;
            out.max_x = mid;
        }
        if out.min_y > out.max_y {
            let mid = (out.min_y + out.max_y) / 2.0;
            out.min_y = mid;
            out.max_y = mid;
        }
        out
    }
}
