use glam::IVec2;

/// Axis-aligned rectangle in integer screen pixels, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub pos: IVec2, // Top-left corner
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_center_x(&mut self, center_x: i32) {
        self.pos.x = center_x - self.size.x / 2;
    }

    pub fn set_center_y(&mut self, center_y: i32) {
        self.pos.y = center_y - self.size.y / 2;
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::from_xywh(50, 240, 15, 50);
        assert_eq!(rect.left(), 50);
        assert_eq!(rect.right(), 65);
        assert_eq!(rect.top(), 240);
        assert_eq!(rect.bottom(), 290);
        assert_eq!(rect.center_x(), 57, "Center uses integer division");
        assert_eq!(rect.center_y(), 265);
    }

    #[test]
    fn test_rect_setters_keep_size() {
        let mut rect = Rect::from_xywh(0, 0, 12, 12);
        rect.set_right(100);
        assert_eq!(rect.left(), 88);
        rect.set_bottom(480);
        assert_eq!(rect.top(), 468);
        rect.set_center_y(240);
        assert_eq!(rect.top(), 234);
        rect.set_center_x(320);
        assert_eq!(rect.left(), 314);
        assert_eq!(rect.size, IVec2::new(12, 12));
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let right = Rect::from_xywh(10, 0, 10, 10);
        let below = Rect::from_xywh(0, 10, 10, 10);
        assert!(!a.intersects(&right), "Shared vertical edge is not a hit");
        assert!(!a.intersects(&below), "Shared horizontal edge is not a hit");
    }
}
