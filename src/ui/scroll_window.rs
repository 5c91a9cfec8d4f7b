//! ScrollWindow - 带滚动条的文本列表
//!
//! 内容在构造时预渲染。每帧根据指针位置计算高亮行，只绘制
//! `content[index .. index + items_per_page]` 这一段。

use crate::assets::AssetBundle;
use crate::config::ScrollWindowConfig;
use crate::event::{Event, MouseButton, Pointer};
use crate::text::TextRenderer;
use crate::{Point, Rect, Result, Size, Surface};
use super::relative_rect::RelativeRect;
use super::scroll_bar::{ScrollBar, ScrollBarSkin};
use super::widget::{Widget, WidgetEvent};

/// 文本左侧留白
const TEXT_PADDING: i32 = 5;

pub struct ScrollWindow {
    rect: RelativeRect,
    content: Vec<String>,
    rendered: Vec<Surface>,
    rendered_highlight: Vec<Surface>,
    config: ScrollWindowConfig,
    background: Surface,
    image: Surface,
    row_height: i32,
    items_per_page: usize,
    index: usize,
    highlight_index: Option<usize>,
    bar: ScrollBar,
}

impl ScrollWindow {
    pub fn new(
        rect: RelativeRect,
        content: Vec<String>,
        font: &dyn TextRenderer,
        assets: &AssetBundle,
        config: ScrollWindowConfig,
    ) -> Result<Self> {
        let rendered = content
            .iter()
            .map(|item| font.render(item, config.text_color))
            .collect();
        let rendered_highlight = content
            .iter()
            .map(|item| font.render(item, config.highlight_text_color))
            .collect();

        let size = rect.local().size();
        let background = match assets.resolve(config.background.as_deref())? {
            Some(bg) => bg.clone(),
            None => {
                let mut bg = Surface::with_size(size, false);
                bg.fill(config.bg_color);
                if let Some(gradient) = assets.get("alph_grad") {
                    bg.blit(&gradient.smooth_scale(size), Point::ORIGIN);
                }
                bg
            }
        };

        let row_height = font.line_height().max(1);
        let items_per_page = (size.height / row_height).max(0) as usize;

        let (button_size, buttons) = match assets.resolve(config.bar_button_image.as_deref())? {
            Some(sheet) => {
                let half = Size::new(sheet.size().width, sheet.size().height / 2);
                let up = sheet.subsurface(Rect::new(0, 0, half.width, half.height)).to_surface();
                let down = sheet.subsurface(Rect::new(0, half.height, half.width, half.height)).to_surface();
                (half, Some([up, down]))
            }
            None => (Size::new(row_height, row_height), None),
        };
        let skin = ScrollBarSkin {
            background: assets.resolve(config.bar_bg_image.as_deref())?.cloned(),
            buttons,
            slider: assets.resolve(config.bar_slider_image.as_deref())?.cloned(),
        };
        let bar_rect = RelativeRect::child_of(
            Rect::new(size.width - button_size.width, 0, button_size.width, size.height),
            &rect,
        );
        let bar = ScrollBar::new(bar_rect, button_size, content.len(), items_per_page, skin);

        Ok(Self {
            image: Surface::with_size(size, false),
            rect,
            content,
            rendered,
            rendered_highlight,
            config,
            background,
            row_height,
            items_per_page,
            index: 0,
            highlight_index: None,
            bar,
        })
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 设置首个可见项，超出范围时截断
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    /// 按行滚动，结果截断到有效范围
    pub fn scroll_by(&mut self, delta: i64) {
        let next = (self.index as i64).saturating_add(delta);
        self.index = next.clamp(0, self.max_index() as i64) as usize;
    }

    pub fn max_index(&self) -> usize {
        self.content.len().saturating_sub(self.items_per_page)
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn row_height(&self) -> i32 {
        self.row_height
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight_index
    }

    pub fn bar(&self) -> &ScrollBar {
        &self.bar
    }

    fn scrollable(&self) -> bool {
        self.content.len() > self.items_per_page
    }

    /// 指针在内容区（不含滚动条）时记录其下方的行。
    /// 底部放不下整行的空白区域不对应任何行。
    fn activate_highlight(&mut self, mouse: Point) {
        if !self.config.highlight || self.bar.is_dragging() {
            return;
        }
        self.highlight_index = None;
        if self.rect.collide_point(mouse) && !self.bar.track_rect().contains(mouse) {
            let row = (self.rect.to_local(mouse).y / self.row_height) as usize;
            if row < self.items_per_page {
                self.highlight_index = Some(self.index + row);
            }
        }
    }

    fn update_bar(&mut self, mouse_y: i32) {
        if let Some(next) = self.bar.drag_to(mouse_y) {
            self.index = next;
        }
        self.bar.position_thumb(self.index);
    }

    fn draw_content(&mut self) {
        let end = (self.index + self.items_per_page).min(self.rendered.len());
        let width = self.rect.width();
        for (row, item_index) in (self.index..end).enumerate() {
            let y = row as i32 * self.row_height;
            if Some(item_index) == self.highlight_index {
                self.image.blend_rect(
                    Rect::new(0, y, width, self.row_height),
                    self.config.highlight_color,
                );
                self.image.blit(&self.rendered_highlight[item_index], Point::new(TEXT_PADDING, y));
            } else {
                self.image.blit(&self.rendered[item_index], Point::new(TEXT_PADDING, y));
            }
        }
    }

    fn on_scroll_wheel(&mut self, button: MouseButton) {
        match button {
            MouseButton::WheelUp => self.scroll_by(-1),
            MouseButton::WheelDown => self.scroll_by(1),
            _ => {}
        }
    }

    /// 上下箭头，命中时返回 true
    fn on_arrow_click(&mut self, pos: Point) -> bool {
        if self.bar.up_button_rect().contains(pos) {
            self.scroll_by(-1);
            true
        } else if self.bar.down_button_rect().contains(pos) {
            self.scroll_by(1);
            true
        } else {
            false
        }
    }

    fn on_bar_click(&mut self, pos: Point) {
        let thumb = self.bar.thumb_rect();
        let page = self.items_per_page as i64;
        if thumb.contains(pos) {
            self.bar.begin_drag(pos.y, self.index);
        } else if pos.y < thumb.top() {
            self.scroll_by(-page);
        } else if pos.y >= thumb.bottom() {
            self.scroll_by(page);
        }
    }
}

impl Widget for ScrollWindow {
    fn rect(&self) -> &RelativeRect {
        &self.rect
    }

    fn update(&mut self, target: &mut Surface, pointer: &Pointer) {
        let mouse = pointer.position();
        self.activate_highlight(mouse);
        self.update_bar(mouse.y);
        self.image.blit(&self.background, Point::ORIGIN);
        self.draw_content();
        self.bar.draw(&mut self.image);
        target.blit(&self.image, self.rect.local().origin());
    }

    fn dispatch_event(&mut self, event: &Event) -> Option<WidgetEvent> {
        match event {
            Event::PointerDown { button, pos } if button.is_primary() => {
                if let Some(highlighted) = self.highlight_index {
                    match self.content.get(highlighted) {
                        Some(item) => return Some(WidgetEvent::Selected(item.clone())),
                        None => log::debug!("stale highlight index {} ignored", highlighted),
                    }
                } else if self.scrollable() && self.bar.track_rect().contains(*pos) {
                    if !self.on_arrow_click(*pos) {
                        self.on_bar_click(*pos);
                    }
                }
            }
            Event::PointerDown { button, pos } => {
                if self.rect.collide_point(*pos) {
                    self.on_scroll_wheel(*button);
                }
            }
            Event::PointerUp { .. } => self.bar.end_drag(),
            _ => {}
        }
        None
    }

    fn type_name(&self) -> &'static str {
        "ScrollWindow"
    }
}
