//! UI 控件系统

mod move_window;
mod relative_rect;
mod scroll_bar;
mod scroll_window;
mod widget;

pub use move_window::MoveWindow;
pub use relative_rect::{Parent, RelativeRect};
pub use scroll_bar::{DragState, ScrollBar, ScrollBarSkin, MIN_THUMB_HEIGHT};
pub use scroll_window::ScrollWindow;
pub use widget::{Widget, WidgetEvent};
