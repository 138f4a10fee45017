use glam::IVec2;

/// Axis-aligned rectangle in arena pixels, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(IVec2::new(x, y), IVec2::new(width, height))
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point, rounded toward the top-left for odd sizes
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Overlap test. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x <= other.right()
            && other.pos.x <= self.right()
            && self.pos.y <= other.bottom()
            && other.pos.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::from_xywh(0, 0, 20, 20);
        let b = Rect::from_xywh(10, 10, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a), "Intersection should be symmetric");
    }

    #[test]
    fn test_touching_edges_intersect() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);
        let ball = Rect::from_xywh(30, 290, 20, 20);
        assert!(paddle.intersects(&ball), "Shared vertical edge counts");

        let below = Rect::from_xywh(10, 350, 20, 20);
        assert!(paddle.intersects(&below), "Shared horizontal edge counts");
    }

    #[test]
    fn test_separated_rects_do_not_intersect() {
        let a = Rect::from_xywh(0, 0, 20, 20);
        assert!(!a.intersects(&Rect::from_xywh(21, 0, 20, 20)));
        assert!(!a.intersects(&Rect::from_xywh(0, 21, 20, 20)));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::from_xywh(0, 0, 20, 20);
        let b = Rect::from_xywh(5, 100, 20, 20);
        assert!(!a.intersects(&b), "Both axes must overlap");
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::from_xywh(10, 250, 20, 100);
        assert_eq!(r.right(), 30);
        assert_eq!(r.bottom(), 350);
        assert_eq!(r.center(), IVec2::new(20, 300));
    }
}
