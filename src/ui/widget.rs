//! 控件基础定义

use crate::event::{Event, Pointer};
use crate::Surface;
use super::relative_rect::RelativeRect;

/// 控件向上返回的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// 列表中某一项被点击选中
    Selected(String),
}

/// 控件 trait
///
/// 宿主每帧对每个事件调用一次 `dispatch_event`，然后调用一次 `update`。
/// 容器先更新子控件，再把自身合成到目标表面。
pub trait Widget {
    /// 控件的相对矩形
    fn rect(&self) -> &RelativeRect;

    /// 更新状态并绘制到 `target`（父控件的图像或显示表面）
    fn update(&mut self, target: &mut Surface, pointer: &Pointer);

    /// 处理事件，产生结果时返回 Some
    fn dispatch_event(&mut self, event: &Event) -> Option<WidgetEvent>;

    /// 控件类型名
    fn type_name(&self) -> &'static str {
        "Widget"
    }
}
