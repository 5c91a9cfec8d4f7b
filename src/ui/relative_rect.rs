//! RelativeRect - 相对父矩形定位的矩形层级
//!
//! 子控件的坐标总是相对父矩形给出，命中测试时沿父链向上累加得到
//! 显示表面上的绝对坐标。绘制则应当用局部坐标画到父控件的图像上。

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Point, Rect};

/// 矩形的父级
#[derive(Clone)]
pub enum Parent {
    /// 父级是显示表面本身
    RootDisplay,
    /// 父级是另一个相对矩形
    Ancestor(RelativeRect),
}

struct Node {
    rect: Rect,
    parent: Parent,
}

/// 相对矩形的共享句柄
///
/// clone 得到的是同一个矩形：窗口拖动时，所有以它为父级的子矩形
/// 都能立即看到新的位置。父级只能在创建时指定，因此父链不会成环。
#[derive(Clone)]
pub struct RelativeRect(Rc<RefCell<Node>>);

impl RelativeRect {
    /// 直接挂在显示表面上的矩形
    pub fn root(rect: Rect) -> Self {
        Self::with_parent(rect, Parent::RootDisplay)
    }

    /// 相对 `parent` 定位的子矩形
    pub fn child_of(rect: Rect, parent: &RelativeRect) -> Self {
        Self::with_parent(rect, Parent::Ancestor(parent.clone()))
    }

    pub fn with_parent(rect: Rect, parent: Parent) -> Self {
        Self(Rc::new(RefCell::new(Node { rect, parent })))
    }

    /// 相对父级的局部矩形
    pub fn local(&self) -> Rect {
        self.0.borrow().rect
    }

    pub fn parent(&self) -> Parent {
        self.0.borrow().parent.clone()
    }

    pub fn x(&self) -> i32 { self.local().x }
    pub fn y(&self) -> i32 { self.local().y }
    pub fn width(&self) -> i32 { self.local().width }
    pub fn height(&self) -> i32 { self.local().height }

    /// 同尺寸、原点在 (0, 0) 的矩形，即自身图像的范围
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.local().size())
    }

    /// 沿父链累加偏移，得到显示表面上的绝对矩形
    pub fn resolve_absolute(&self) -> Rect {
        let mut rect = self.local();
        let mut parent = self.parent();
        while let Parent::Ancestor(ancestor) = parent {
            let node = ancestor.0.borrow();
            rect.x += node.rect.x;
            rect.y += node.rect.y;
            parent = node.parent.clone();
        }
        rect
    }

    /// 相对上一级（父级所在坐标系）的矩形
    pub fn rel_to_parent(&self) -> Rect {
        let rect = self.local();
        match self.parent() {
            Parent::RootDisplay => rect,
            Parent::Ancestor(ancestor) => {
                let origin = ancestor.local();
                rect.offset(origin.x, origin.y)
            }
        }
    }

    /// 显示坐标转换为本矩形的局部坐标
    pub fn to_local(&self, point: Point) -> Point {
        point - self.resolve_absolute().origin()
    }

    /// 本矩形局部坐标转换为显示坐标
    pub fn to_absolute(&self, point: Point) -> Point {
        point + self.resolve_absolute().origin()
    }

    pub fn collide_point(&self, point: Point) -> bool {
        self.resolve_absolute().contains(point)
    }

    pub fn translate(&self, dx: i32, dy: i32) {
        let mut node = self.0.borrow_mut();
        node.rect.x += dx;
        node.rect.y += dy;
    }

    pub fn set_local(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    pub fn set_position(&self, x: i32, y: i32) {
        let mut node = self.0.borrow_mut();
        node.rect.x = x;
        node.rect.y = y;
    }

    /// 移动矩形使其完全位于 `bounds`（父级坐标系）内
    pub fn clamp_within(&self, bounds: Rect) {
        let mut node = self.0.borrow_mut();
        node.rect = node.rect.clamped(&bounds);
    }

    /// 子矩形应被限制的范围（父级坐标系下），父级是显示表面时为 None
    pub fn parent_bounds(&self) -> Option<Rect> {
        match self.parent() {
            Parent::RootDisplay => None,
            Parent::Ancestor(ancestor) => Some(ancestor.bounds()),
        }
    }

    /// 父链深度，直接挂在显示表面上时为 0
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut parent = self.parent();
        while let Parent::Ancestor(ancestor) = parent {
            depth += 1;
            parent = ancestor.parent();
        }
        depth
    }

    /// 两个句柄是否指向同一个矩形
    pub fn ptr_eq(&self, other: &RelativeRect) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RelativeRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeRect")
            .field("rect", &self.local())
            .field("depth", &self.depth())
            .finish()
    }
}
