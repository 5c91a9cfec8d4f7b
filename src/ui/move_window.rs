//! MoveWindow - 可通过标题栏拖动的窗口容器

use crate::assets::AssetBundle;
use crate::config::MoveWindowConfig;
use crate::event::{Event, Pointer};
use crate::text::TextRenderer;
use crate::{Color, Error, Point, Rect, Result, Size, Surface};
use super::relative_rect::RelativeRect;
use super::widget::{Widget, WidgetEvent};

/// 标题栏图片两端保持原样的宽度
const HANDLE_CAP: i32 = 6;

pub struct MoveWindow {
    rect: RelativeRect,
    config: MoveWindowConfig,
    background: Surface,
    handle: Surface,
    handle_rect: RelativeRect,
    image: Surface,
    /// 拖动中上一次使用的指针位置
    drag_anchor: Option<Point>,
    children: Vec<Box<dyn Widget>>,
}

impl MoveWindow {
    /// `font` 仅在配置了标题文字时需要
    pub fn new(
        rect: RelativeRect,
        font: Option<&dyn TextRenderer>,
        assets: &AssetBundle,
        config: MoveWindowConfig,
    ) -> Result<Self> {
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

        let mut handle = stretch_handle(assets.require(&config.handle_image)?, size.width);
        if let Some(text) = &config.text {
            let font = font.ok_or_else(|| Error::Font(format!("window label {text:?} needs a font")))?;
            let label = font.render(text, config.text_color);
            let label_rect = label.rect().centered_at(handle.rect().center());
            handle.blit(&label, label_rect.origin());
        }
        let handle_rect = RelativeRect::child_of(handle.rect(), &rect);

        Ok(Self {
            image: Surface::with_size(size, true),
            rect,
            config,
            background,
            handle,
            handle_rect,
            drag_anchor: None,
            children: Vec::new(),
        })
    }

    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Box<dyn Widget>) -> Self {
        self.add_child(child);
        self
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// 标题栏的绝对矩形
    pub fn handle_rect(&self) -> Rect {
        self.handle_rect.resolve_absolute()
    }

    /// 最近一次合成的窗口图像
    pub fn image(&self) -> &Surface {
        &self.image
    }

    fn drag(&mut self, pointer: &Pointer, display: Rect) {
        let Some(anchor) = self.drag_anchor else { return };
        let now = pointer.position();
        let delta = now - anchor;
        self.rect.translate(delta.x, delta.y);
        self.drag_anchor = Some(now);

        if self.config.clamp {
            let bounds = self.rect.parent_bounds().unwrap_or(display);
            self.rect.clamp_within(bounds);
        }
    }

    /// 依次绘制背景、标题栏和子控件
    fn compose(&mut self, pointer: &Pointer) {
        self.image.fill(Color::TRANSPARENT);
        self.image.blit(&self.background, Point::new(0, self.handle.size().height));
        self.image.blit(&self.handle, self.handle_rect.local().origin());
        for child in &mut self.children {
            child.update(&mut self.image, pointer);
        }
    }
}

impl Widget for MoveWindow {
    fn rect(&self) -> &RelativeRect {
        &self.rect
    }

    fn update(&mut self, target: &mut Surface, pointer: &Pointer) {
        self.drag(pointer, target.rect());
        self.compose(pointer);
        target.blit(&self.image, self.rect.local().origin());
    }

    fn dispatch_event(&mut self, event: &Event) -> Option<WidgetEvent> {
        match event {
            Event::PointerDown { button, pos } if button.is_primary() => {
                if self.handle_rect.collide_point(*pos) {
                    log::debug!("window drag start at {:?}", pos);
                    self.drag_anchor = Some(*pos);
                }
            }
            Event::PointerUp { .. } => self.drag_anchor = None,
            _ => {}
        }
        self.children
            .iter_mut()
            .find_map(|child| child.dispatch_event(event))
    }

    fn type_name(&self) -> &'static str {
        "MoveWindow"
    }
}

/// 把标题栏图片横向拉伸到 `width`：两端各保留 6 像素，中间平滑缩放
fn stretch_handle(raw: &Surface, width: i32) -> Surface {
    let raw_size = raw.size();
    let target = Size::new(width, raw_size.height);
    if raw_size.width <= 2 * HANDLE_CAP || width <= 2 * HANDLE_CAP {
        return raw.smooth_scale(target);
    }

    let mut handle = Surface::with_size(target, true);
    handle.blit_area(raw, Point::ORIGIN, Rect::new(0, 0, HANDLE_CAP, raw_size.height));
    handle.blit_area(
        raw,
        Point::new(width - HANDLE_CAP, 0),
        Rect::new(raw_size.width - HANDLE_CAP, 0, HANDLE_CAP, raw_size.height),
    );
    let middle = raw
        .subsurface(Rect::new(HANDLE_CAP, 0, raw_size.width - 2 * HANDLE_CAP, raw_size.height))
        .smooth_scale(Size::new(width - 2 * HANDLE_CAP, raw_size.height));
    handle.blit(&middle, Point::new(HANDLE_CAP, 0));
    handle
}
