//! 相对矩形测试
//! 父链解析、坐标换算、拖动与限制范围

use crate::ui::{Parent, RelativeRect};
use crate::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机生成一条深度为 `depth` 的父链，返回最末端的矩形和所有原点之和
fn random_chain(rng: &mut StdRng, depth: usize) -> (RelativeRect, Point) {
    let mut rect = Rect::new(rng.gen_range(-200..200), rng.gen_range(-200..200), 50, 40);
    let mut current = RelativeRect::root(rect);
    let mut sum = rect.origin();
    for _ in 0..depth {
        rect = Rect::new(
            rng.gen_range(-200..200),
            rng.gen_range(-200..200),
            rng.gen_range(1..300),
            rng.gen_range(1..300),
        );
        current = RelativeRect::child_of(rect, &current);
        sum = sum + rect.origin();
    }
    (current, sum)
}

/// 测试挂在显示表面上的矩形解析为自身
#[test]
fn test_root_rect_resolves_to_itself() {
    let rect = RelativeRect::root(Rect::new(50, 50, 200, 300));
    assert_eq!(rect.resolve_absolute(), Rect::new(50, 50, 200, 300));
    assert_eq!(rect.depth(), 0);
    assert!(matches!(rect.parent(), Parent::RootDisplay));
}

/// 测试三层嵌套的偏移累加
#[test]
fn test_nested_rect_accumulates_offsets() {
    let window = RelativeRect::root(Rect::new(50, 50, 200, 300));
    let list = RelativeRect::child_of(Rect::new(25, 45, 150, 230), &window);
    let bar = RelativeRect::child_of(Rect::new(126, 0, 24, 230), &list);

    assert_eq!(list.resolve_absolute(), Rect::new(75, 95, 150, 230));
    assert_eq!(bar.resolve_absolute(), Rect::new(201, 95, 24, 230));
    assert_eq!(bar.depth(), 2);
    assert_eq!(bar.rel_to_parent(), Rect::new(151, 45, 24, 230));
}

/// 随机父链：绝对位置等于所有祖先原点加自身偏移
#[test]
fn test_resolve_absolute_matches_sum_of_origins() {
    let mut rng = StdRng::seed_from_u64(7);
    for depth in 0..=5 {
        for _ in 0..50 {
            let (rect, sum) = random_chain(&mut rng, depth);
            let resolved = rect.resolve_absolute();
            assert_eq!(resolved.origin(), sum);
            assert_eq!(resolved.size(), rect.local().size());
            assert_eq!(rect.depth(), depth);
        }
    }
}

/// 随机矩形和点：to_local 能还原局部坐标
#[test]
fn test_to_local_round_trip() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let depth = rng.gen_range(0..=5);
        let (rect, _) = random_chain(&mut rng, depth);
        let local = Point::new(rng.gen_range(-500..500), rng.gen_range(-500..500));
        let absolute = rect.to_absolute(local);
        assert_eq!(rect.to_local(absolute), local);
    }
}

/// 测试移动父矩形时子矩形跟着移动
#[test]
fn test_translate_moves_descendants() {
    let window = RelativeRect::root(Rect::new(50, 50, 200, 300));
    let handle = RelativeRect::child_of(Rect::new(0, 0, 200, 20), &window);

    window.translate(10, -5);

    assert_eq!(window.local(), Rect::new(60, 45, 200, 300));
    assert_eq!(handle.local(), Rect::new(0, 0, 200, 20));
    assert_eq!(handle.resolve_absolute(), Rect::new(60, 45, 200, 20));
    assert!(handle.collide_point(Point::new(60, 45)));
    assert!(!handle.collide_point(Point::new(59, 45)));
}

/// 测试 clone 出的句柄共享同一个矩形
#[test]
fn test_clone_shares_geometry() {
    let rect = RelativeRect::root(Rect::new(0, 0, 10, 10));
    let alias = rect.clone();
    alias.set_position(5, 6);
    assert_eq!(rect.local().origin(), Point::new(5, 6));
    assert!(rect.ptr_eq(&alias));
}

/// 拖出显示范围后被限制回 (0, 0)
#[test]
fn test_clamp_within_pulls_rect_inside() {
    let rect = RelativeRect::root(Rect::new(-50, -20, 200, 300));
    rect.clamp_within(Rect::new(0, 0, 700, 600));
    assert_eq!(rect.local(), Rect::new(0, 0, 200, 300));

    rect.set_position(650, 500);
    rect.clamp_within(Rect::new(0, 0, 700, 600));
    assert_eq!(rect.local(), Rect::new(500, 300, 200, 300));

    rect.set_position(100, 100);
    rect.clamp_within(Rect::new(0, 0, 700, 600));
    assert_eq!(rect.local(), Rect::new(100, 100, 200, 300));
}

/// 比限制范围更大时居中
#[test]
fn test_clamp_within_centers_oversized_rect() {
    let rect = RelativeRect::root(Rect::new(30, 30, 120, 20));
    rect.clamp_within(Rect::new(0, 0, 100, 100));
    assert_eq!(rect.local(), Rect::new(-10, 30, 120, 20));
}

/// 测试子矩形的限制范围来自父矩形尺寸
#[test]
fn test_parent_bounds_dispatches_on_parent_kind() {
    let window = RelativeRect::root(Rect::new(50, 50, 200, 300));
    let child = RelativeRect::child_of(Rect::new(10, 10, 20, 20), &window);

    assert_eq!(window.parent_bounds(), None);
    assert_eq!(child.parent_bounds(), Some(Rect::new(0, 0, 200, 300)));
}
