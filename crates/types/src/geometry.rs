#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// An empty rect positioned so that any union replaces it.
    pub fn empty() -> Self {
        Self {
            x: f32::INFINITY,
            y: f32::INFINITY,
            width: f32::NEG_INFINITY,
            height: f32::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width.max(0.0), self.height.max(0.0))
    }

    /// Smallest rect covering both `self` and `other`. Empty rects are
    /// absorbed rather than inflating the result.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Rect of the given size centered on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, size: Size) -> Rect {
        Rect::new(
            cx - size.width / 2.0,
            cy - size.height / 2.0,
            size.width,
            size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_mirror_the_fields() {
        let rect = Rect::centered(0.0, 0.0, Size::new(4.0, 2.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.right(), 2.0);
        assert_eq!(rect.bottom(), 1.0);
    }

    #[test]
    fn union_absorbs_empty_rects() {
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let merged = Rect::empty().union(&rect);
        assert_eq!(merged.width(), 2.0);
        assert_eq!(merged.height(), 2.0);

        let grown = rect.union(&Rect::new(1.0, 0.0, 2.0, 1.0));
        assert_eq!(grown.width(), 4.0);
        assert_eq!(grown.height(), 2.0);
    }
}
