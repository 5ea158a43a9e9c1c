// Host-side tests for the resize synchronizer.

mod common;

use common::{Call, MockGl, MockSurface};
use glam::Vec2;
use shader_canvas::constants::RESOLUTION_UNIFORM;
use shader_canvas::resize::*;
use shader_canvas::uniforms::{UniformRegistry, UniformValue};

fn registry() -> UniformRegistry {
    UniformRegistry::with_base(std::iter::empty())
}

#[test]
fn logical_pixels_are_used_when_ratio_is_disabled() {
    let gl = MockGl::new();
    let surface = MockSurface::with_ratio(1280.0, 720.0, 2.0);
    let mut reg = registry();
    let mut sync = ResizeSynchronizer::new(false, ViewportSize::default());

    let update = sync.synchronize(Some(&surface), Some(&gl), &mut reg).expect("ready");
    let expected = ViewportSize {
        width: 1280,
        height: 720,
    };
    assert_eq!(update.size, expected);
    assert_eq!(update.pixel_ratio, 1.0);
    assert_eq!(sync.size(), expected);
    assert_eq!(surface.backing.get(), Some(expected));
    assert_eq!(
        reg.value(RESOLUTION_UNIFORM),
        Some(UniformValue::Vec2(Vec2::new(1280.0, 720.0)))
    );
    assert_eq!(gl.calls(), vec![Call::Viewport(0, 0, 1280, 720)]);
}

#[test]
fn device_pixel_ratio_scales_and_truncates() {
    let gl = MockGl::new();
    let surface = MockSurface::with_ratio(100.5, 50.25, 1.5);
    let mut reg = registry();
    let mut sync = ResizeSynchronizer::new(true, ViewportSize::default());

    let update = sync.synchronize(Some(&surface), Some(&gl), &mut reg).unwrap();
    assert_eq!(update.pixel_ratio, 1.5);
    assert_eq!(
        update.size,
        ViewportSize {
            width: 150,
            height: 75,
        }
    );
    assert_eq!(gl.calls(), vec![Call::Viewport(0, 0, 150, 75)]);
}

#[test]
fn synchronizing_twice_is_idempotent() {
    let gl = MockGl::new();
    let surface = MockSurface::new(800.0, 600.0);
    let mut reg = registry();
    let mut sync = ResizeSynchronizer::new(false, ViewportSize::default());

    let first = sync.synchronize(Some(&surface), Some(&gl), &mut reg);
    let res_after_first = reg.value(RESOLUTION_UNIFORM);
    let second = sync.synchronize(Some(&surface), Some(&gl), &mut reg);

    assert_eq!(first, second);
    assert_eq!(reg.value(RESOLUTION_UNIFORM), res_after_first);
    assert_eq!(
        gl.calls(),
        vec![Call::Viewport(0, 0, 800, 600), Call::Viewport(0, 0, 800, 600)]
    );
}

#[test]
fn follows_layout_changes() {
    let gl = MockGl::new();
    let surface = MockSurface::new(800.0, 600.0);
    let mut reg = registry();
    let mut sync = ResizeSynchronizer::new(false, ViewportSize::default());
    sync.synchronize(Some(&surface), Some(&gl), &mut reg);

    surface.bounds.set(LayoutBounds {
        width: 1024.0,
        height: 768.0,
    });
    let update = sync.synchronize(Some(&surface), Some(&gl), &mut reg).unwrap();
    assert_eq!(update.size.width, 1024);
    assert_eq!(update.size.height, 768);
    assert_eq!(gl.calls().last(), Some(&Call::Viewport(0, 0, 1024, 768)));
}

#[test]
fn missing_surface_or_context_is_a_silent_no_op() {
    let gl = MockGl::new();
    let surface = MockSurface::new(800.0, 600.0);
    let mut reg = registry();
    let before = reg.value(RESOLUTION_UNIFORM);
    let initial = ViewportSize {
        width: 300,
        height: 150,
    };
    let mut sync = ResizeSynchronizer::new(false, initial);

    assert!(sync
        .synchronize::<MockGl, MockSurface>(None, Some(&gl), &mut reg)
        .is_none());
    assert!(sync
        .synchronize::<MockGl, MockSurface>(Some(&surface), None, &mut reg)
        .is_none());

    assert!(gl.calls().is_empty());
    assert_eq!(surface.backing.get(), None);
    assert_eq!(sync.size(), initial);
    assert_eq!(reg.value(RESOLUTION_UNIFORM), before);
}

#[test]
fn viewport_for_matches_bounds_at_unit_ratio() {
    for (w, h) in [(1.0, 1.0), (320.0, 240.0), (1920.0, 1080.0), (7.0, 3000.0)] {
        let size = viewport_for(
            LayoutBounds {
                width: w,
                height: h,
            },
            1.0,
        );
        assert_eq!(size.width as f64, w);
        assert_eq!(size.height as f64, h);
    }
}
