//! Property-based tests for the orbit simulator.
//!
//! These verify the invariants that must hold for any pointer gesture:
//! the ball never escapes the boundary, pointer-derived gravity stays
//! bounded, and coasting never gains speed.

use glam::Vec2;
use proptest::prelude::*;

use super::OrbitSimulator;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The ball stays inside the boundary after every tick, whatever the
    /// pointer does and however uneven the frame timing is.
    #[test]
    fn prop_ball_stays_inside(
        radius in 20.0f32..200.0,
        moves in prop::collection::vec(
            (0.0f32..1.0, 0.0f32..1.0, 1.0f64..50.0),
            1..200,
        ),
    ) {
        let bounds = Vec2::new(300.0, 300.0);
        let mut sim = OrbitSimulator::new(radius);
        let mut now = 0.0f64;
        sim.tick(now);
        for (nx, ny, step_ms) in moves {
            sim.pointer_move(Vec2::new(nx, ny) * bounds, bounds);
            now += step_ms;
            let pos = sim.tick(now);
            prop_assert!(pos.length() <= radius + 1e-3);
        }
    }

    /// Per-axis gravity never exceeds unit magnitude for pointers up to
    /// half a region outside the bounds.
    #[test]
    fn prop_gravity_bounded(nx in -0.5f32..1.5, ny in -0.5f32..1.5) {
        let bounds = Vec2::new(240.0, 180.0);
        let mut sim = OrbitSimulator::new(70.0);
        sim.pointer_move(Vec2::new(nx, ny) * bounds, bounds);
        let g = sim.gravity();
        prop_assert!(g.x.abs() <= 1.0 + 1e-5);
        prop_assert!(g.y.abs() <= 1.0 + 1e-5);
    }

    /// With the pointer gone and the boundary out of reach, speed decays
    /// monotonically.
    #[test]
    fn prop_coasting_never_gains_speed(
        nx in 0.0f32..1.0,
        ny in 0.0f32..1.0,
        steps in prop::collection::vec(1.0f64..50.0, 1..100),
    ) {
        let bounds = Vec2::new(300.0, 300.0);
        let mut sim = OrbitSimulator::new(1.0e6);
        let mut now = 0.0f64;
        sim.tick(now);
        sim.pointer_move(Vec2::new(nx, ny) * bounds, bounds);
        for _ in 0..10 {
            now += 16.0;
            sim.tick(now);
        }
        sim.pointer_leave();

        let mut speed = sim.velocity().length();
        for step_ms in steps {
            now += step_ms;
            sim.tick(now);
            let next = sim.velocity().length();
            prop_assert!(next <= speed + 1e-5);
            speed = next;
        }
    }
}
