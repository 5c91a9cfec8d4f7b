//! Mini Widgets - 基于像素表面的小型窗口控件库
//! 支持相对坐标层级、可拖动窗口和带滚动条的列表

mod color;
mod error;
mod geometry;
mod surface;
pub mod text;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use surface::{Surface, SurfaceView};
pub use text::{FontRenderer, TextRenderer};

// 资源与配置
pub mod assets;
pub mod config;

// 事件系统
pub mod event;

// UI 控件
pub mod ui;

// 单元测试
#[cfg(test)]
mod tests;
