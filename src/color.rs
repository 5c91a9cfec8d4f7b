//! 颜色模块

use serde::Deserialize;

/// RGBA 颜色
///
/// 配置文件中写作 `[r, g, b]` 或 `[r, g, b, a]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<u8>")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// 打包为 softbuffer 使用的 0RGB 格式
    #[inline]
    pub fn to_rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Alpha 混合 (使用整数运算优化)
    #[inline]
    pub fn blend(&self, dst: &Color) -> Color {
        // 如果源完全透明，返回目标色
        if self.a == 0 { return *dst; }

        // 目标不透明是最常见的情况（窗口背景）
        if dst.a == 255 {
            if self.a == 255 { return *self; }

            let alpha = self.a as u32;
            let inv_alpha = 255 - alpha;

            return Color {
                r: ((self.r as u32 * alpha + dst.r as u32 * inv_alpha) / 255) as u8,
                g: ((self.g as u32 * alpha + dst.g as u32 * inv_alpha) / 255) as u8,
                b: ((self.b as u32 * alpha + dst.b as u32 * inv_alpha) / 255) as u8,
                a: 255,
            };
        }

        // 半透明目标: out_a = src_a + dst_a * (1 - src_a)
        let src_a = self.a as u32;
        let dst_factor = (dst.a as u32 * (255 - src_a)) / 255;
        let out_a = src_a + dst_factor;

        if out_a == 0 { return Color::TRANSPARENT; }

        Color {
            r: ((self.r as u32 * src_a + dst.r as u32 * dst_factor) / out_a) as u8,
            g: ((self.g as u32 * src_a + dst.g as u32 * dst_factor) / out_a) as u8,
            b: ((self.b as u32 * src_a + dst.b as u32 * dst_factor) / out_a) as u8,
            a: out_a.min(255) as u8,
        }
    }

    // 预定义颜色
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<Vec<u8>> for Color {
    type Error = String;

    fn try_from(channels: Vec<u8>) -> Result<Self, Self::Error> {
        match channels.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::new(*r, *g, *b, *a)),
            other => Err(format!("expected 3 or 4 color channels, got {}", other.len())),
        }
    }
}
