//! 单元测试模块
//! 覆盖相对坐标、滚动条、列表窗口、可拖动窗口、表面与配置

pub mod relative_rect_tests;
pub mod surface_tests;

use crate::event::{Event, Pointer};
use crate::text::TextRenderer;
use crate::ui::{RelativeRect, Widget, WidgetEvent};
use crate::{Color, Rect, Surface};
use std::cell::Cell;
use std::rc::Rc;

/// 测试用字体：每个字符画成一个实心方块，不需要字体文件
pub struct BlockFont {
    pub glyph_width: i32,
    pub height: i32,
}

impl BlockFont {
    pub fn new() -> Self {
        Self { glyph_width: 8, height: 20 }
    }
}

impl TextRenderer for BlockFont {
    fn render(&self, text: &str, color: Color) -> Surface {
        let width = (text.chars().count() as i32 * self.glyph_width).max(1);
        let mut surface = Surface::new_alpha(width as u32, self.height as u32);
        if !text.is_empty() {
            surface.fill_rect(Rect::new(0, 0, width, self.height), color);
        }
        surface
    }

    fn line_height(&self) -> i32 {
        self.height
    }
}

/// 生成 "item 0" .. "item n-1"
pub fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

/// 记录收到多少事件的测试控件
pub struct Recorder {
    pub rect: RelativeRect,
    pub reply: Option<WidgetEvent>,
    pub dispatched: Rc<Cell<usize>>,
    pub updated: Rc<Cell<usize>>,
}

impl Recorder {
    pub fn new(rect: RelativeRect, reply: Option<WidgetEvent>) -> Self {
        Self {
            rect,
            reply,
            dispatched: Rc::new(Cell::new(0)),
            updated: Rc::new(Cell::new(0)),
        }
    }
}

impl Widget for Recorder {
    fn rect(&self) -> &RelativeRect {
        &self.rect
    }

    fn update(&mut self, _target: &mut Surface, _pointer: &Pointer) {
        self.updated.set(self.updated.get() + 1);
    }

    fn dispatch_event(&mut self, _event: &Event) -> Option<WidgetEvent> {
        self.dispatched.set(self.dispatched.get() + 1);
        self.reply.clone()
    }
}
