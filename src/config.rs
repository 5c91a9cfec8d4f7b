//! 控件配置
//!
//! 每个控件一个配置结构体，列出所有可识别的选项及默认值。
//! 从 JSON 加载时拒绝未知字段，在构造阶段就报错。

use std::path::Path;

use serde::Deserialize;

use crate::{Color, Result};

/// MoveWindow 配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MoveWindowConfig {
    /// 背景图资源名；为空时用 `bg_color` 加渐变生成
    pub background: Option<String>,
    pub bg_color: Color,
    /// 标题栏图片资源名
    pub handle_image: String,
    /// 标题栏文字
    pub text: Option<String>,
    pub text_color: Color,
    /// 拖动时把窗口限制在父级范围内
    pub clamp: bool,
}

impl Default for MoveWindowConfig {
    fn default() -> Self {
        Self {
            background: None,
            bg_color: Color::rgb(50, 50, 200),
            handle_image: "handle".to_string(),
            text: None,
            text_color: Color::BLACK,
            clamp: true,
        }
    }
}

/// ScrollWindow 配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollWindowConfig {
    pub background: Option<String>,
    pub bg_color: Color,
    pub text_color: Color,
    /// 是否高亮指针下的行
    pub highlight: bool,
    pub highlight_color: Color,
    pub highlight_text_color: Color,
    /// 滚动条背景图，None 时用纯色
    pub bar_bg_image: Option<String>,
    /// 上下按钮图集（上半部分为上箭头，下半部分为下箭头），None 时用纯色方块
    pub bar_button_image: Option<String>,
    /// 滑块图，None 时用纯色
    pub bar_slider_image: Option<String>,
}

impl Default for ScrollWindowConfig {
    fn default() -> Self {
        Self {
            background: None,
            bg_color: Color::WHITE,
            text_color: Color::BLACK,
            highlight: true,
            highlight_color: Color::new(0, 0, 0, 100),
            highlight_text_color: Color::rgb(255, 255, 0),
            bar_bg_image: Some("bar_bg".to_string()),
            bar_button_image: Some("button".to_string()),
            bar_slider_image: Some("bar".to_string()),
        }
    }
}

/// 演示程序的窗口配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fps: u32,
    pub clear_color: Color,
    pub font_size: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GUI Example".to_string(),
            width: 700,
            height: 600,
            resizable: false,
            fps: 60,
            clear_color: Color::rgb(25, 155, 255),
            font_size: 15.0,
        }
    }
}

/// 演示程序的完整配置
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub move_window: MoveWindowConfig,
    pub scroll_window: ScrollWindowConfig,
}

macro_rules! impl_json_loading {
    ($($ty:ty),*) => {$(
        impl $ty {
            pub fn from_json(json: &str) -> Result<Self> {
                Ok(serde_json::from_str(json)?)
            }

            pub fn from_file(path: &Path) -> Result<Self> {
                let json = std::fs::read_to_string(path)?;
                Self::from_json(&json)
            }
        }
    )*};
}

impl_json_loading!(MoveWindowConfig, ScrollWindowConfig, WindowConfig, DemoConfig);
