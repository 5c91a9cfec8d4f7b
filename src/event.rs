//! 事件系统 - 宿主传入的指针输入

use crate::Point;

/// 鼠标按键，编号沿用常见约定：1 左键，2 中键，3 右键，4/5 滚轮上/下
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    Other(u8),
}

impl MouseButton {
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::WheelUp,
            5 => Self::WheelDown,
            other => Self::Other(other),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
            Self::WheelUp => 4,
            Self::WheelDown => 5,
            Self::Other(id) => *id,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// 输入事件，坐标均为显示表面的绝对坐标
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerDown { button: MouseButton, pos: Point },
    PointerUp { button: MouseButton, pos: Point },
    PointerMotion { pos: Point },
    Quit,
}

impl Event {
    pub fn pointer_down(button: u8, x: i32, y: i32) -> Self {
        Self::PointerDown { button: MouseButton::from_id(button), pos: Point::new(x, y) }
    }

    pub fn pointer_up(button: u8, x: i32, y: i32) -> Self {
        Self::PointerUp { button: MouseButton::from_id(button), pos: Point::new(x, y) }
    }

    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { pos, .. } | Self::PointerUp { pos, .. } | Self::PointerMotion { pos } => Some(*pos),
            Self::Quit => None,
        }
    }
}

/// 当前指针状态，由宿主在每个事件上更新，控件在 update 时查询
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    position: Point,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: i32, y: i32) -> Self {
        Self { position: Point::new(x, y) }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn move_to(&mut self, pos: Point) {
        self.position = pos;
    }

    /// 根据事件更新指针位置
    pub fn track(&mut self, event: &Event) {
        if let Some(pos) = event.position() {
            self.position = pos;
        }
    }
}
