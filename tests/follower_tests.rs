// Host-side tests for the smoothed pointer follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod bus {
        include!("../src/core/bus.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod highlight {
        include!("../src/core/highlight.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod orb {
        include!("../src/core/orb.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use fx::follower::*;
use glam::DVec2;

#[test]
fn pointer_at_viewport_center_targets_origin() {
    let mut f = Follower::default();
    f.on_pointer_move(DVec2::new(640.0, 360.0), Viewport::new(1280.0, 720.0));
    assert_eq!(f.state().target, DVec2::ZERO);
}

#[test]
fn pointer_offset_is_divided_by_sensitivity() {
    let mut f = Follower::default();
    // 100px right and 50px above center
    f.on_pointer_move(DVec2::new(740.0, 310.0), Viewport::new(1280.0, 720.0));
    assert_eq!(f.state().target, DVec2::new(2.0, -1.0));
}

#[test]
fn far_pointer_is_not_clamped() {
    let mut f = Follower::default();
    f.on_pointer_move(DVec2::new(10_000.0, 0.0), Viewport::new(100.0, 100.0));
    assert_eq!(f.state().target, DVec2::new(199.0, -1.0));
}

#[test]
fn zero_sized_viewport_uses_origin_as_center() {
    let mut f = Follower::default();
    f.on_pointer_move(DVec2::new(25.0, 50.0), Viewport::new(0.0, 0.0));
    let target = f.state().target;
    assert!(target.is_finite());
    assert_eq!(target, DVec2::new(0.5, 1.0));
}

#[test]
fn tick_moves_a_fixed_fraction_of_the_remaining_distance() {
    let mut f = Follower::default();
    f.set_target(DVec2::new(10.0, 0.0));
    let pos = f.tick();
    assert!((pos.x - 0.5).abs() < 1e-6);
    assert_eq!(pos.y, 0.0);
}

#[test]
fn converges_monotonically_toward_a_fixed_target() {
    let target = DVec2::new(10.0, -4.0);
    let mut f = Follower::default();
    f.set_target(target);

    for _ in 0..60 {
        let before = f.state();
        f.tick();
        let after = f.state();

        assert!(after.remaining().length() < before.remaining().length());
        // Never overshoots on either axis
        assert!(after.current.x > before.current.x && after.current.x <= target.x);
        assert!(after.current.y < before.current.y && after.current.y >= target.y);
    }
}

#[test]
fn far_pointer_keeps_converging_for_hundreds_of_ticks() {
    // ~8s at 60Hz toward an unclamped target well outside the viewport
    let mut f = Follower::default();
    f.on_pointer_move(DVec2::new(10_000.0, 360.0), Viewport::new(1280.0, 720.0));
    let target = f.state().target;
    assert_eq!(target, DVec2::new(187.2, 0.0));

    for tick in 0..500 {
        let before = f.state().remaining().length();
        f.tick();
        let after = f.state().remaining().length();
        assert!(
            after < before,
            "stalled at tick {tick}: current={:?} remaining={after}",
            f.state().current
        );
    }
    assert!(f.state().remaining().length() < 1e-6);
}

#[test]
fn remaining_distance_decays_geometrically_per_tick() {
    // No delta-time term: the decay depends on tick count only.
    let mut f = Follower::new(0.05, 50.0);
    f.set_target(DVec2::new(10.0, 0.0));
    for n in 1..=20 {
        f.tick();
        let expected = 10.0 * 0.95_f64.powi(n);
        assert!((f.state().remaining().x - expected).abs() < 1e-9);
    }
}

#[test]
fn ticks_are_idempotent_once_at_rest() {
    let mut f = Follower::default();
    for _ in 0..10 {
        assert_eq!(f.tick(), DVec2::ZERO);
    }

    f.set_target(DVec2::new(3.0, -7.0));
    for _ in 0..25 {
        f.tick();
    }
    let rest = f.state().current;
    f.set_target(rest);
    for _ in 0..10 {
        assert_eq!(f.tick(), rest);
    }
}

#[test]
fn retargeting_mid_flight_heads_to_the_new_target() {
    let mut f = Follower::default();
    f.set_target(DVec2::new(10.0, 0.0));
    for _ in 0..10 {
        f.tick();
    }
    f.set_target(DVec2::new(-10.0, 0.0));
    let before = f.state().current.x;
    f.tick();
    assert!(f.state().current.x < before);
}

#[test]
fn translate_css_formats_pixels() {
    assert_eq!(
        translate_css(DVec2::new(1.5, -2.0)),
        "translate(1.5px, -2px)"
    );
    assert_eq!(translate_css(DVec2::ZERO), "translate(0px, 0px)");
}
