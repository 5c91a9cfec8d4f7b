//! 几何图形模块 - 整数像素坐标

use std::ops::{Add, Sub};

/// 2D 点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point::new(0, 0);
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// 矩形
///
/// 命中测试采用半开区间：`right()` 和 `bottom()` 所在的像素不属于矩形。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn top(&self) -> i32 { self.y }
    pub fn right(&self) -> i32 { self.x + self.width }
    pub fn bottom(&self) -> i32 { self.y + self.height }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() &&
        point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x &&
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// 两个矩形的交集，不相交时返回 None
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2 * dx).max(0),
            height: (self.height - 2 * dy).max(0),
        }
    }

    /// 以 `center` 为中心放置同尺寸的矩形
    pub fn centered_at(&self, center: Point) -> Rect {
        Rect::new(center.x - self.width / 2, center.y - self.height / 2, self.width, self.height)
    }

    /// 移动矩形使其完全位于 `bounds` 内。
    /// 某一轴上比 `bounds` 还大时，在该轴上居中。
    pub fn clamped(&self, bounds: &Rect) -> Rect {
        let x = clamp_axis(self.x, self.width, bounds.x, bounds.width);
        let y = clamp_axis(self.y, self.height, bounds.y, bounds.height);
        Rect::new(x, y, self.width, self.height)
    }
}

fn clamp_axis(pos: i32, len: i32, min: i32, span: i32) -> i32 {
    if len >= span {
        min + span / 2 - len / 2
    } else if pos < min {
        min
    } else if pos + len > min + span {
        min + span - len
    } else {
        pos
    }
}
