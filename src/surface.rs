//! Surface 绘制表面 - 控件合成所用的像素缓冲

use std::path::Path;

use crate::{Color, Error, Point, Rect, Result, Size};

/// 像素表面
///
/// 不透明表面（`new`）始终保持 alpha = 255；带 alpha 通道的表面
/// （`new_alpha`）初始为全透明。
#[derive(Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    alpha: bool,
}

impl Surface {
    /// 不透明表面，初始为黑色
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
            alpha: false,
        }
    }

    /// 带 alpha 通道的表面，初始为全透明
    pub fn new_alpha(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            alpha: true,
        }
    }

    /// 按 `Size` 创建，负尺寸视为 0
    pub fn with_size(size: Size, alpha: bool) -> Self {
        let w = size.width.max(0) as u32;
        let h = size.height.max(0) as u32;
        if alpha { Self::new_alpha(w, h) } else { Self::new(w, h) }
    }

    /// 从 RGBA 数据创建（数据不足时多出的像素保持透明）
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Self {
        let mut surface = Self::new_alpha(width, height);
        for (dst, chunk) in surface.pixels.iter_mut().zip(data.chunks_exact(4)) {
            *dst = Color::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        surface
    }

    pub fn from_image(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        Self::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
    }

    /// 从图片文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(&img))
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn has_alpha(&self) -> bool { self.alpha }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_size(self.size())
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    /// 获取像素，越界返回透明色
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.index(x, y).map_or(Color::TRANSPARENT, |idx| self.pixels[idx])
    }

    /// 直接写入像素（不混合）
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let opaque = !self.alpha;
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = if opaque { color.with_alpha(255) } else { color };
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 用纯色填充整个表面
    pub fn fill(&mut self, color: Color) {
        let color = if self.alpha { color } else { color.with_alpha(255) };
        self.pixels.fill(color);
    }

    /// 用纯色填充区域（不混合，自动裁剪）
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.rect()) else { return };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.put_pixel(x, y, color);
            }
        }
    }

    /// 在区域上混合一层半透明颜色
    pub fn blend_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.rect()) else { return };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// 整个表面的只读视图
    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView { surface: self, area: self.rect() }
    }

    /// 子区域视图，不复制像素。区域会被裁剪到表面范围内。
    pub fn subsurface(&self, area: Rect) -> SurfaceView<'_> {
        let area = area
            .intersection(&self.rect())
            .unwrap_or(Rect::new(0, 0, 0, 0));
        SurfaceView { surface: self, area }
    }

    /// 把另一个表面绘制到 `at` 位置
    pub fn blit(&mut self, src: &Surface, at: Point) {
        self.blit_view(&src.view(), at);
    }

    /// 把另一个表面的 `area` 区域绘制到 `at` 位置
    pub fn blit_area(&mut self, src: &Surface, at: Point, area: Rect) {
        self.blit_view(&src.subsurface(area), at);
    }

    pub fn blit_view(&mut self, src: &SurfaceView<'_>, at: Point) {
        let dest = Rect::new(at.x, at.y, src.area.width, src.area.height);
        let Some(visible) = dest.intersection(&self.rect()) else { return };
        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                let color = src.get_pixel(x - at.x, y - at.y);
                self.set_pixel(x, y, color);
            }
        }
    }

    /// 平滑缩放（双线性插值），返回新表面
    pub fn smooth_scale(&self, size: Size) -> Surface {
        self.view().smooth_scale(size)
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &Path) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba())
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "pixel buffer does not match surface size",
                    )
                })?;

        img.save(path).map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 写入窗口缓冲区（0RGB），超出部分裁剪
    pub fn present_to_buffer(&self, buffer: &mut [u32], buffer_width: u32, buffer_height: u32) {
        for y in 0..buffer_height.min(self.height) {
            for x in 0..buffer_width.min(self.width) {
                let dst_idx = (y * buffer_width + x) as usize;
                if let Some(dst) = buffer.get_mut(dst_idx) {
                    *dst = self.pixels[(y * self.width + x) as usize].to_rgb_u32();
                }
            }
        }
    }
}

/// 表面的矩形只读视图
#[derive(Clone, Copy)]
pub struct SurfaceView<'a> {
    surface: &'a Surface,
    area: Rect,
}

impl<'a> SurfaceView<'a> {
    pub fn width(&self) -> i32 { self.area.width }
    pub fn height(&self) -> i32 { self.area.height }

    pub fn size(&self) -> Size {
        self.area.size()
    }

    /// 视图局部坐标取像素
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x >= self.area.width || y >= self.area.height {
            return Color::TRANSPARENT;
        }
        self.surface.get_pixel(self.area.x + x, self.area.y + y)
    }

    /// 复制为独立表面
    pub fn to_surface(&self) -> Surface {
        let mut out = Surface::with_size(self.size(), self.surface.alpha);
        for y in 0..self.area.height {
            for x in 0..self.area.width {
                out.put_pixel(x, y, self.get_pixel(x, y));
            }
        }
        out
    }

    pub fn smooth_scale(&self, size: Size) -> Surface {
        let mut out = Surface::with_size(size, self.surface.alpha);
        let (src_w, src_h) = (self.area.width, self.area.height);
        if src_w == 0 || src_h == 0 || size.width <= 0 || size.height <= 0 {
            return out;
        }

        let scale_x = src_w as f32 / size.width as f32;
        let scale_y = src_h as f32 / size.height as f32;

        let sample = |sx: i32, sy: i32| -> [f32; 4] {
            let c = self.get_pixel(sx.clamp(0, src_w - 1), sy.clamp(0, src_h - 1));
            [c.r as f32, c.g as f32, c.b as f32, c.a as f32]
        };
        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        for dest_y in 0..size.height {
            for dest_x in 0..size.width {
                // 像素中心对齐采样
                let local_x = ((dest_x as f32 + 0.5) * scale_x - 0.5).max(0.0);
                let local_y = ((dest_y as f32 + 0.5) * scale_y - 0.5).max(0.0);
                let src_x = local_x.floor() as i32;
                let src_y = local_y.floor() as i32;
                let fx = local_x - src_x as f32;
                let fy = local_y - src_y as f32;

                let c00 = sample(src_x, src_y);
                let c10 = sample(src_x + 1, src_y);
                let c01 = sample(src_x, src_y + 1);
                let c11 = sample(src_x + 1, src_y + 1);

                let mut channels = [0u8; 4];
                for (i, channel) in channels.iter_mut().enumerate() {
                    let top = lerp(c00[i], c10[i], fx);
                    let bottom = lerp(c01[i], c11[i], fx);
                    *channel = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
                }
                let [r, g, b, a] = channels;
                out.put_pixel(dest_x, dest_y, Color::new(r, g, b, a));
            }
        }
        out
    }
}
