//! 资源包 - 控件皮肤图片
//!
//! 宿主创建一次资源包，以引用方式传给控件构造函数。

use std::collections::HashMap;
use std::path::Path;

use crate::{Color, Error, Rect, Result, Surface};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// 按名称索引的图片集合
#[derive(Clone, Default)]
pub struct AssetBundle {
    images: HashMap<String, Surface>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置默认皮肤：handle、bar_bg、button、bar、alph_grad
    pub fn builtin() -> Self {
        let mut bundle = Self::new();
        bundle.insert("handle", draw_handle());
        bundle.insert("bar_bg", draw_bar_background());
        bundle.insert("button", draw_button_sheet());
        bundle.insert("bar", draw_slider());
        bundle.insert("alph_grad", draw_alpha_gradient());
        bundle
    }

    /// 从目录加载所有图片，以文件名（不含扩展名）为键
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut bundle = Self::new();
        bundle.extend_from_dir(dir)?;
        Ok(bundle)
    }

    /// 从目录加载图片并覆盖同名资源，返回加载的数量
    pub fn extend_from_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_image = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            if !is_image {
                log::debug!("skipping non-image asset {}", path.display());
                continue;
            }
            let surface = Surface::load(&path)?;
            log::debug!("loaded asset `{}` ({}x{})", stem, surface.width(), surface.height());
            self.images.insert(stem.to_string(), surface);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn insert(&mut self, name: &str, image: Surface) {
        self.images.insert(name.to_string(), image);
    }

    pub fn get(&self, name: &str) -> Option<&Surface> {
        self.images.get(name)
    }

    /// 查找配置引用的资源，不存在时报错
    pub fn require(&self, name: &str) -> Result<&Surface> {
        self.get(name).ok_or_else(|| Error::MissingAsset(name.to_string()))
    }

    /// 可选资源：None 表示未配置
    pub fn resolve(&self, name: Option<&str>) -> Result<Option<&Surface>> {
        name.map(|n| self.require(n)).transpose()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn draw_handle() -> Surface {
    let (w, h) = (60, 20);
    let mut img = Surface::new_alpha(w, h);
    for y in 0..h as i32 {
        let shade = 150 - (y * 60 / h as i32) as u8;
        img.fill_rect(Rect::new(0, y, w as i32, 1), Color::rgb(shade, shade, shade + 30));
    }
    let border = Color::rgb(40, 40, 60);
    img.fill_rect(Rect::new(0, 0, w as i32, 1), border);
    img.fill_rect(Rect::new(0, h as i32 - 1, w as i32, 1), border);
    img.fill_rect(Rect::new(0, 0, 1, h as i32), border);
    img.fill_rect(Rect::new(w as i32 - 1, 0, 1, h as i32), border);
    img
}

fn draw_bar_background() -> Surface {
    let mut img = Surface::new(24, 64);
    img.fill(Color::rgb(215, 215, 220));
    let edge = Color::rgb(150, 150, 160);
    img.fill_rect(Rect::new(0, 0, 1, 64), edge);
    img.fill_rect(Rect::new(23, 0, 1, 64), edge);
    img
}

/// 24x50 的按钮图集：上半为上箭头，下半为下箭头
fn draw_button_sheet() -> Surface {
    let mut img = Surface::new(24, 50);
    let face = Color::rgb(185, 185, 195);
    let border = Color::rgb(90, 90, 100);
    let arrow = Color::rgb(40, 40, 50);
    for cell in 0..2 {
        let top = cell * 25;
        img.fill_rect(Rect::new(0, top, 24, 25), border);
        img.fill_rect(Rect::new(1, top + 1, 22, 23), face);
        for row in 0..6 {
            let y = if cell == 0 { top + 9 + row } else { top + 15 - row };
            img.fill_rect(Rect::new(12 - row, y, row * 2 + 1, 1), arrow);
        }
    }
    img
}

fn draw_slider() -> Surface {
    let mut img = Surface::new(24, 30);
    img.fill(Color::rgb(120, 120, 150));
    let edge = Color::rgb(60, 60, 80);
    img.fill_rect(Rect::new(0, 0, 24, 2), edge);
    img.fill_rect(Rect::new(0, 28, 24, 2), edge);
    for y in [12, 15, 18] {
        img.fill_rect(Rect::new(6, y, 12, 1), Color::rgb(200, 200, 220));
    }
    img
}

fn draw_alpha_gradient() -> Surface {
    let (w, h) = (16, 64);
    let mut img = Surface::new_alpha(w, h);
    for y in 0..h as i32 {
        let alpha = (110 - y * 110 / h as i32) as u8;
        img.fill_rect(Rect::new(0, y, w as i32, 1), Color::WHITE.with_alpha(alpha));
    }
    img
}
