//! ScrollBar - 列表滚动条的几何与拖动状态

use crate::{Color, Point, Rect, Size, Surface};
use super::relative_rect::RelativeRect;

/// 滑块的最小高度
pub const MIN_THUMB_HEIGHT: i32 = 10;

/// 内容不足一页时使用的每项像素数
const NO_SCROLL_PER_INDEX: f32 = 10.0;

/// 滑块拖动状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// 从 `anchor_y`（显示坐标）开始拖动，开始时的索引为 `start_index`
    Dragging { anchor_y: i32, start_index: usize },
}

/// 滚动条皮肤，None 的部分用纯色绘制
#[derive(Clone, Default)]
pub struct ScrollBarSkin {
    pub background: Option<Surface>,
    pub buttons: Option<[Surface; 2]>,
    pub slider: Option<Surface>,
}

pub struct ScrollBar {
    /// 轨道，父级是所属的 ScrollWindow
    rect: RelativeRect,
    button_size: Size,
    barsize: i32,
    perindex: f32,
    total_items: usize,
    items_per_page: usize,
    up_button: RelativeRect,
    down_button: RelativeRect,
    slider: RelativeRect,
    drag: DragState,
    skin: ScrollBarSkin,
    background: Option<Surface>,
    slider_image: Option<Surface>,
}

impl ScrollBar {
    pub fn new(
        rect: RelativeRect,
        button_size: Size,
        total_items: usize,
        items_per_page: usize,
        skin: ScrollBarSkin,
    ) -> Self {
        let track = rect.local();
        let up_button = RelativeRect::child_of(
            Rect::new(0, 0, button_size.width, button_size.height),
            &rect,
        );
        let down_button = RelativeRect::child_of(
            Rect::new(0, track.height - button_size.height, button_size.width, button_size.height),
            &rect,
        );
        let slider = RelativeRect::child_of(
            Rect::new(0, button_size.height, button_size.width, 0),
            &rect,
        );
        let background = skin
            .background
            .as_ref()
            .map(|bg| bg.smooth_scale(track.size()));

        let mut bar = Self {
            rect,
            button_size,
            barsize: 0,
            perindex: NO_SCROLL_PER_INDEX,
            total_items,
            items_per_page,
            up_button,
            down_button,
            slider,
            drag: DragState::Idle,
            skin,
            background,
            slider_image: None,
        };
        bar.recompute_geometry(total_items, items_per_page);
        bar.position_thumb(0);
        bar
    }

    /// 按照总项数和每页项数计算滑块高度和每项像素数
    pub fn recompute_geometry(&mut self, total_items: usize, items_per_page: usize) {
        self.total_items = total_items;
        self.items_per_page = items_per_page;

        let usable = (self.rect.height() - 2 * self.button_size.height).max(0);
        if total_items > items_per_page {
            let proportional = usable as f32 * (items_per_page as f32 / total_items as f32);
            self.barsize = (proportional as i32).max(MIN_THUMB_HEIGHT);
            self.perindex = usable as f32 / total_items as f32;
        } else {
            self.barsize = usable.max(MIN_THUMB_HEIGHT);
            self.perindex = NO_SCROLL_PER_INDEX;
        }

        let mut thumb = self.slider.local();
        thumb.height = self.barsize;
        self.slider.set_local(thumb);
        self.slider_image = self.skin.slider.as_ref().map(|raw| slice_slider(raw, thumb.size()));
    }

    /// 按当前索引放置滑块，返回滑块的局部矩形
    pub fn position_thumb(&mut self, index: usize) -> Rect {
        let mut thumb = self.slider.local();
        thumb.y = if self.total_items >= self.items_per_page
            && index == self.total_items - self.items_per_page
        {
            // 滚到底时贴住下按钮，避免线性公式的舍入误差
            self.rect.height() - self.button_size.height - self.barsize
        } else {
            self.button_size.height + (index as f32 * self.perindex) as i32
        };
        self.slider.set_local(thumb);
        thumb
    }

    pub fn begin_drag(&mut self, pointer_y: i32, current_index: usize) {
        log::debug!("scrollbar drag start at y={} index={}", pointer_y, current_index);
        self.drag = DragState::Dragging { anchor_y: pointer_y, start_index: current_index };
    }

    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            log::debug!("scrollbar drag end");
        }
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// 拖动中指针移动到 `pointer_y` 时对应的索引，未拖动时为 None
    pub fn drag_to(&self, pointer_y: i32) -> Option<usize> {
        let DragState::Dragging { anchor_y, start_index } = self.drag else {
            return None;
        };
        if self.perindex <= 0.0 {
            return Some(start_index.min(self.max_index()));
        }
        let steps = ((pointer_y - anchor_y) as f32 / self.perindex).floor() as i64;
        let next = (start_index as i64).saturating_add(steps);
        Some(next.clamp(0, self.max_index() as i64) as usize)
    }

    /// 最大可用索引
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_per_page)
    }

    pub fn thumb_height(&self) -> i32 {
        self.barsize
    }

    pub fn per_index(&self) -> f32 {
        self.perindex
    }

    pub fn button_size(&self) -> Size {
        self.button_size
    }

    pub fn rect(&self) -> &RelativeRect {
        &self.rect
    }

    pub fn track_rect(&self) -> Rect {
        self.rect.resolve_absolute()
    }

    pub fn up_button_rect(&self) -> Rect {
        self.up_button.resolve_absolute()
    }

    pub fn down_button_rect(&self) -> Rect {
        self.down_button.resolve_absolute()
    }

    pub fn thumb_rect(&self) -> Rect {
        self.slider.resolve_absolute()
    }

    /// 绘制到所属窗口的图像上
    pub fn draw(&self, target: &mut Surface) {
        let mut image = Surface::with_size(self.rect.local().size(), false);

        match &self.background {
            Some(bg) => image.blit(bg, Point::ORIGIN),
            None => image.fill(Color::BLACK),
        }

        let buttons = [&self.up_button, &self.down_button];
        match &self.skin.buttons {
            Some(images) => {
                for (img, rect) in images.iter().zip(buttons) {
                    image.blit(img, rect.local().origin());
                }
            }
            None => {
                for rect in buttons {
                    image.fill_rect(rect.local(), Color::RED);
                }
            }
        }

        let thumb = self.slider.local();
        match &self.slider_image {
            Some(slider) => image.blit(slider, thumb.origin()),
            None => {
                image.fill_rect(thumb, Color::BLUE);
                image.fill_rect(thumb.inset(1, 1), Color::WHITE);
            }
        }

        target.blit(&image, self.rect.local().origin());
    }
}

/// 用滑块原图拼出指定尺寸的滑块：
/// 先用第 4 行铺满，再居中画中间部分，最后画上下各 2 像素的边。
fn slice_slider(raw: &Surface, size: Size) -> Surface {
    let raw_rect = raw.rect();
    if raw_rect.height < 8 {
        return raw.smooth_scale(size);
    }

    let mut out = Surface::with_size(size, false);
    let filler = raw.subsurface(Rect::new(0, 4, raw_rect.width, 1));
    for y in 0..size.height {
        out.blit_view(&filler, Point::new(0, y));
    }

    let center = raw.subsurface(Rect::new(0, 4, raw_rect.width, raw_rect.height - 8));
    let center_rect = Rect::from_size(center.size()).centered_at(Rect::from_size(size).center());
    out.blit_view(&center, center_rect.origin());

    out.blit_view(&raw.subsurface(Rect::new(0, 0, raw_rect.width, 2)), Point::ORIGIN);
    out.blit_view(
        &raw.subsurface(Rect::new(0, raw_rect.height - 2, raw_rect.width, 2)),
        Point::new(0, size.height - 2),
    );
    out
}
