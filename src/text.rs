//! 文本渲染模块 - 把字符串渲染成 Surface

use crate::{Color, Error, Result, Surface};
use fontdue::{Font, FontSettings, Metrics};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// 文本渲染能力：控件只依赖这个 trait，由宿主提供具体字体
pub trait TextRenderer {
    /// 渲染一行文本，返回带 alpha 通道的表面
    fn render(&self, text: &str, color: Color) -> Surface;

    /// 行高（像素），列表控件的行高由此决定
    fn line_height(&self) -> i32;
}

/// 基于 fontdue 的字体渲染器
pub struct FontRenderer {
    font: Font,
    size: f32,
    /// 字形缓存 char -> (Metrics, Bitmap)
    cache: RefCell<HashMap<char, (Metrics, Vec<u8>)>>,
}

impl FontRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8], size: f32) -> Result<Self> {
        let settings = FontSettings {
            scale: size,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings).map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self {
            font,
            size,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &Path, size: f32) -> Result<Self> {
        let font_data = std::fs::read(path)?;
        Self::from_bytes(&font_data, size)
    }

    /// 按常见路径查找系统字体
    pub fn load_system_font(size: f32) -> Result<Self> {
        let candidates = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
            "/Library/Fonts/Arial Unicode.ttf",
            "C:\\Windows\\Fonts\\times.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in candidates.iter().map(Path::new) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(path, size) {
                Ok(renderer) => {
                    log::info!("using system font {}", path.display());
                    return Ok(renderer);
                }
                Err(e) => log::warn!("skipping font {}: {}", path.display(), e),
            }
        }
        Err(Error::Font("no usable system font found".into()))
    }

    fn glyph(&self, ch: char) -> (Metrics, Vec<u8>) {
        if let Some(cached) = self.cache.borrow().get(&ch) {
            return cached.clone();
        }
        let rasterized = self.font.rasterize(ch, self.size);
        self.cache.borrow_mut().insert(ch, rasterized.clone());
        rasterized
    }

    fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(self.size, |m| m.ascent)
    }

    /// 测量文本宽度
    pub fn measure_text(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum()
    }
}

impl TextRenderer for FontRenderer {
    fn render(&self, text: &str, color: Color) -> Surface {
        let width = self.measure_text(text).ceil().max(1.0) as u32;
        let mut surface = Surface::new_alpha(width, self.line_height().max(1) as u32);
        let baseline = self.ascent();
        let mut cursor_x = 0.0;

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch);

            if metrics.width > 0 && metrics.height > 0 {
                let glyph_x = cursor_x + metrics.xmin as f32;
                let glyph_y = baseline - metrics.height as f32 - metrics.ymin as f32;

                for gy in 0..metrics.height {
                    for gx in 0..metrics.width {
                        let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                        let alpha = (color.a as f32 * coverage) as u8;
                        if alpha == 0 {
                            continue;
                        }
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;
                        surface.set_pixel(px, py, color.with_alpha(alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
        surface
    }

    fn line_height(&self) -> i32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(self.size, |m| m.new_line_size)
            .ceil() as i32
    }
}
