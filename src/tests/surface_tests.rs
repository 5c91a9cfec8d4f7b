//! 绘制表面与资源包测试

use crate::assets::AssetBundle;
use crate::{Color, Error, Point, Rect, Size, Surface};
use tempfile::TempDir;

/// 每个测试使用独立的临时目录，离开作用域时自动删除
fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch dir")
}

/// 不透明表面忽略填充色的 alpha
#[test]
fn test_opaque_surface_keeps_full_alpha() {
    let mut surface = Surface::new(4, 4);
    assert_eq!(surface.get_pixel(0, 0), Color::BLACK);
    surface.fill(Color::new(10, 20, 30, 0));
    assert_eq!(surface.get_pixel(3, 3), Color::rgb(10, 20, 30));
    surface.fill_rect(Rect::new(0, 0, 1, 1), Color::new(1, 2, 3, 7));
    assert_eq!(surface.get_pixel(0, 0), Color::rgb(1, 2, 3));
}

/// 带 alpha 的表面初始透明
#[test]
fn test_alpha_surface_starts_transparent() {
    let mut surface = Surface::new_alpha(3, 3);
    assert!(surface.has_alpha());
    assert_eq!(surface.get_pixel(1, 1), Color::TRANSPARENT);
    surface.fill_rect(Rect::new(1, 1, 1, 1), Color::new(1, 2, 3, 7));
    assert_eq!(surface.get_pixel(1, 1), Color::new(1, 2, 3, 7));
}

/// 半透明像素与不透明背景混合
#[test]
fn test_blend_rect_over_opaque() {
    let mut surface = Surface::new(2, 2);
    surface.fill(Color::WHITE);
    surface.blend_rect(Rect::new(0, 0, 1, 2), Color::new(0, 0, 0, 100));
    assert_eq!(surface.get_pixel(0, 1), Color::rgb(155, 155, 155));
    assert_eq!(surface.get_pixel(1, 1), Color::WHITE);
}

/// 越界绘制被裁剪，越界读取返回透明
#[test]
fn test_drawing_is_clipped() {
    let mut surface = Surface::new(4, 4);
    surface.fill_rect(Rect::new(-2, -2, 4, 4), Color::RED);
    assert_eq!(surface.get_pixel(1, 1), Color::RED);
    assert_eq!(surface.get_pixel(2, 2), Color::BLACK);

    let mut stamp = Surface::new(4, 4);
    stamp.fill(Color::BLUE);
    surface.blit(&stamp, Point::new(3, 3));
    surface.blit(&stamp, Point::new(100, -100));
    assert_eq!(surface.get_pixel(3, 3), Color::BLUE);
    assert_eq!(surface.get_pixel(2, 3), Color::BLACK);
    assert_eq!(surface.get_pixel(4, 4), Color::TRANSPARENT);
    assert_eq!(surface.get_pixel(-1, 0), Color::TRANSPARENT);
}

/// 子区域视图按局部坐标读取，并被裁剪到表面范围
#[test]
fn test_subsurface_view() {
    let mut surface = Surface::new(10, 10);
    surface.put_pixel(8, 9, Color::RED);

    let view = surface.subsurface(Rect::new(8, 8, 5, 5));
    assert_eq!(view.size(), Size::new(2, 2));
    assert_eq!(view.get_pixel(0, 1), Color::RED);
    assert_eq!(view.get_pixel(2, 0), Color::TRANSPARENT);

    let copy = view.to_surface();
    assert_eq!(copy.size(), Size::new(2, 2));
    assert_eq!(copy.get_pixel(0, 1), Color::RED);

    assert_eq!(surface.subsurface(Rect::new(20, 20, 5, 5)).size(), Size::new(0, 0));
}

/// 从另一个表面的区域绘制
#[test]
fn test_blit_area() {
    let mut src = Surface::new(4, 1);
    for x in 0..4 {
        src.put_pixel(x, 0, Color::rgb(x as u8 * 10, 0, 0));
    }
    let mut dst = Surface::new(4, 1);
    dst.blit_area(&src, Point::ORIGIN, Rect::new(2, 0, 2, 1));
    assert_eq!(dst.get_pixel(0, 0), Color::rgb(20, 0, 0));
    assert_eq!(dst.get_pixel(1, 0), Color::rgb(30, 0, 0));
    assert_eq!(dst.get_pixel(2, 0), Color::BLACK);
}

/// 双线性缩放：纯色不变，两色之间插值
#[test]
fn test_smooth_scale() {
    let mut solid = Surface::new(3, 3);
    solid.fill(Color::rgb(40, 80, 120));
    let scaled = solid.smooth_scale(Size::new(7, 5));
    assert_eq!(scaled.size(), Size::new(7, 5));
    assert!(scaled.pixels().iter().all(|&c| c == Color::rgb(40, 80, 120)));

    let mut ramp = Surface::new(2, 1);
    ramp.put_pixel(1, 0, Color::WHITE);
    let wide = ramp.smooth_scale(Size::new(4, 1));
    let reds: Vec<u8> = (0..4).map(|x| wide.get_pixel(x, 0).r).collect();
    assert_eq!(reds, vec![0, 64, 191, 255]);

    assert_eq!(ramp.smooth_scale(Size::new(0, 5)).size(), Size::new(0, 5));
}

/// 写入窗口缓冲区时按 0RGB 打包并裁剪
#[test]
fn test_present_to_buffer() {
    let mut surface = Surface::new(2, 2);
    surface.fill(Color::rgb(1, 2, 3));
    let mut buffer = vec![0u32; 3];
    surface.present_to_buffer(&mut buffer, 3, 1);
    assert_eq!(buffer, vec![0x010203, 0x010203, 0]);
    assert_eq!(surface.to_rgba().len(), 16);
}

/// 测试矩形的半开区间和交集
#[test]
fn test_rect_helpers() {
    let rect = Rect::new(10, 10, 20, 10);
    assert!(rect.contains(Point::new(10, 10)));
    assert!(rect.contains(Point::new(29, 19)));
    assert!(!rect.contains(Point::new(30, 15)));
    assert!(!rect.contains(Point::new(15, 20)));

    assert_eq!(rect.intersection(&Rect::new(25, 0, 100, 15)), Some(Rect::new(25, 10, 5, 5)));
    assert_eq!(rect.intersection(&Rect::new(30, 10, 5, 5)), None);
    assert!(!rect.intersects(&Rect::new(30, 10, 5, 5)));

    assert_eq!(rect.center(), Point::new(20, 15));
    assert_eq!(Rect::new(0, 0, 4, 2).centered_at(Point::new(20, 15)), Rect::new(18, 14, 4, 2));
    assert_eq!(rect.inset(1, 1), Rect::new(11, 11, 18, 8));
    assert_eq!(rect.inset(20, 20).size(), Size::new(0, 0));
}

/// 内置皮肤包含所有默认资源
#[test]
fn test_builtin_assets() {
    let assets = AssetBundle::builtin();
    assert_eq!(assets.len(), 5);
    for name in ["handle", "bar_bg", "button", "bar", "alph_grad"] {
        assert!(assets.get(name).is_some(), "missing {name}");
    }
    assert_eq!(assets.require("button").map(|s| s.size()).ok(), Some(Size::new(24, 50)));
    assert!(matches!(assets.require("nope"), Err(Error::MissingAsset(name)) if name == "nope"));
    assert!(matches!(assets.resolve(None), Ok(None)));
    assert!(AssetBundle::new().is_empty());
}

/// 从目录加载图片，以文件名为键，跳过非图片文件
#[test]
fn test_load_dir() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let mut skin = Surface::new(3, 2);
    skin.fill(Color::rgb(9, 8, 7));
    skin.save_png(&dir.join("handle.png")).expect("save png");
    std::fs::write(dir.join("notes.txt"), "not an image").expect("write notes");

    let assets = AssetBundle::load_dir(dir).expect("load dir");
    assert_eq!(assets.len(), 1);
    let handle = assets.get("handle").expect("handle loaded");
    assert_eq!(handle.size(), Size::new(3, 2));
    assert_eq!(handle.get_pixel(2, 1), Color::rgb(9, 8, 7));

    // 覆盖内置资源
    let mut bundle = AssetBundle::builtin();
    assert_eq!(bundle.extend_from_dir(dir).expect("extend"), 1);
    assert_eq!(bundle.len(), 5);
    assert_eq!(bundle.get("handle").map(|s| s.size()), Some(Size::new(3, 2)));
}

/// 目录不存在时返回 IO 错误
#[test]
fn test_load_dir_missing() {
    let scratch = scratch_dir();
    let dir = scratch.path().join("missing");
    assert!(matches!(AssetBundle::load_dir(&dir), Err(Error::Io(_))));
}

/// 损坏的图片文件报告路径
#[test]
fn test_load_dir_bad_image() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    std::fs::write(dir.join("broken.png"), b"definitely not png").expect("write");
    match AssetBundle::load_dir(dir) {
        Err(Error::Image { path, .. }) => assert!(path.ends_with("broken.png")),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("broken image should not load"),
    }
}
