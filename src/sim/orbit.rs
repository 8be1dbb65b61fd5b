//! Pointer-driven orbit ball confined to a circular boundary
//!
//! The ball accelerates along a pseudo-gravity vector derived from the
//! pointer position, decays under damping, and bounces elastically off a
//! circular boundary. The bounce multiplier is above 1 on purpose: the
//! extra energy keeps the ball visually lively, and the continuous damping
//! keeps it bounded.

use glam::Vec2;

use crate::consts::{DAMPING, GRAVITY_STRENGTH, MAX_STEP, MAX_TILT_DEG, RESTITUTION};

/// Per-frame physics integrator for the decorative orbit ball.
///
/// Owns the ball's full kinematic state. Pointer events set the gravity
/// vector; `tick` is the only operation that moves the ball. The caller
/// drives `tick` once per animation frame for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct OrbitSimulator {
    /// Ball center, offset in pixels from the boundary center
    pos: Vec2,
    /// Velocity in pixels/s
    vel: Vec2,
    /// Per-axis pseudo-gravity direction; zero while the pointer is away
    gravity: Vec2,
    /// Card tilt in degrees (x = rotateX, y = rotateY)
    tilt: Vec2,
    /// Boundary radius in pixels
    radius: f32,
    /// Timestamp of the previous tick, unset before the first
    last_time: Option<f64>,
}

impl OrbitSimulator {
    /// Ball at rest at the center, no gravity, clock unset
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            gravity: Vec2::ZERO,
            tilt: Vec2::ZERO,
            radius,
            last_time: None,
        }
    }

    /// Steer gravity from a pointer position inside the interactive region.
    ///
    /// `local` is relative to the region's top-left corner; `bounds` is the
    /// region's current size. The caller must reject zero-sized bounds
    /// before calling. Positions slightly outside the region are accepted
    /// and produce gravity slightly beyond unit magnitude.
    pub fn pointer_move(&mut self, local: Vec2, bounds: Vec2) {
        let n = local / bounds;
        self.tilt = Vec2::new((0.5 - n.y) * MAX_TILT_DEG, (n.x - 0.5) * MAX_TILT_DEG);
        self.gravity = Vec2::new(self.tilt.y, -self.tilt.x) / MAX_TILT_DEG;
    }

    /// Pointer left the region: gravity and tilt drop to zero.
    ///
    /// Idempotent; never touches position or velocity.
    pub fn pointer_leave(&mut self) {
        self.gravity = Vec2::ZERO;
        self.tilt = Vec2::ZERO;
    }

    /// Replace the boundary radius (the region was resized).
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Advance the simulation to `timestamp_ms` and return the ball offset.
    ///
    /// The first call establishes the time base and performs a zero-length
    /// step. The effective step is capped at [`MAX_STEP`] so a resumed
    /// background tab cannot blow up the integration.
    pub fn tick(&mut self, timestamp_ms: f64) -> Vec2 {
        let last = self.last_time.unwrap_or(timestamp_ms);
        let delta = (((timestamp_ms - last) / 1000.0) as f32).min(MAX_STEP);
        self.last_time = Some(timestamp_ms);

        self.vel += self.gravity * GRAVITY_STRENGTH * delta;
        self.vel *= (1.0 - DAMPING * delta).max(0.0);
        self.pos += self.vel * delta;

        let dist = self.pos.length();
        if dist > self.radius && dist > 0.0 {
            self.pos *= self.radius / dist;

            // Normal from the clamped position over the pre-clamp distance;
            // its length is radius/dist, so deeper overshoot softens the
            // bounce slightly.
            let normal = self.pos / dist;
            let dot = self.vel.dot(normal);
            // Only an outward-moving ball is reflected; inward overlap
            // (e.g. after a radius shrink) is clamped in position only.
            if dot > 0.0 {
                self.vel -= RESTITUTION * dot * normal;
            }
        }

        self.pos
    }

    /// Current ball offset from the boundary center (pixels)
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Current velocity (pixels/s)
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Current gravity vector
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Current card tilt in degrees (x = rotateX, y = rotateY)
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    /// Current boundary radius
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Pointer position producing gravity (1, 0): half a region past the
    /// right edge, vertically centered.
    fn point_right_overshoot(sim: &mut OrbitSimulator) {
        sim.pointer_move(Vec2::new(360.0, 120.0), Vec2::new(240.0, 240.0));
    }

    #[test]
    fn test_first_tick_is_zero_length() {
        let mut sim = OrbitSimulator::new(70.0);
        point_right_overshoot(&mut sim);
        let pos = sim.tick(12345.0);
        assert_eq!(pos, Vec2::ZERO);
        assert_eq!(sim.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_center_pointer_yields_zero_gravity() {
        let mut sim = OrbitSimulator::new(70.0);
        sim.pointer_move(Vec2::new(120.0, 90.0), Vec2::new(240.0, 180.0));
        assert_eq!(sim.gravity(), Vec2::ZERO);
        assert_eq!(sim.tilt(), Vec2::ZERO);
    }

    #[test]
    fn test_gravity_mapping_from_pointer() {
        let mut sim = OrbitSimulator::new(70.0);

        // Right edge, vertically centered: pull right at half strength
        sim.pointer_move(Vec2::new(240.0, 120.0), Vec2::new(240.0, 240.0));
        assert!((sim.gravity().x - 0.5).abs() < 1e-6);
        assert!(sim.gravity().y.abs() < 1e-6);
        assert!(sim.tilt().x.abs() < 1e-6);
        assert!((sim.tilt().y - 14.0).abs() < 1e-4);

        // Bottom edge, horizontally centered: pull down at half strength
        sim.pointer_move(Vec2::new(120.0, 240.0), Vec2::new(240.0, 240.0));
        assert!(sim.gravity().x.abs() < 1e-6);
        assert!((sim.gravity().y - 0.5).abs() < 1e-6);
        assert!((sim.tilt().x + 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_leave_is_idempotent() {
        let mut sim = OrbitSimulator::new(70.0);
        point_right_overshoot(&mut sim);
        let mut now = 0.0;
        sim.tick(now);
        for _ in 0..10 {
            now += FRAME_MS;
            sim.tick(now);
        }
        let pos = sim.position();
        let vel = sim.velocity();
        assert!(vel.length() > 0.0);

        sim.pointer_leave();
        sim.pointer_leave();
        sim.pointer_leave();
        assert_eq!(sim.gravity(), Vec2::ZERO);
        assert_eq!(sim.position(), pos);
        assert_eq!(sim.velocity(), vel);
    }

    #[test]
    fn test_large_gap_clamps_to_max_step() {
        let mut sim = OrbitSimulator::new(1.0e6);
        point_right_overshoot(&mut sim);
        sim.tick(0.0);
        // 5 seconds of wall time must integrate as a single 0.03s step
        let pos = sim.tick(5000.0);
        let expected_vx = GRAVITY_STRENGTH * MAX_STEP * (1.0 - DAMPING * MAX_STEP);
        assert!((sim.velocity().x - expected_vx).abs() < 1e-3);
        assert!((pos.x - expected_vx * MAX_STEP).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-6);
    }

    #[test]
    fn test_damping_matches_closed_form() {
        let mut sim = OrbitSimulator::new(1.0e6);
        point_right_overshoot(&mut sim);
        sim.tick(0.0);
        sim.tick(100.0);
        sim.pointer_leave();
        let v0 = sim.velocity().x;
        assert!(v0 > 0.0);

        // 30 steps of exactly 10ms each
        let steps = 30;
        let mut now = 100.0;
        for _ in 0..steps {
            now += 10.0;
            sim.tick(now);
        }
        let expected = v0 * (1.0 - DAMPING * 0.01).powi(steps);
        let actual = sim.velocity().x;
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_coasting_speed_never_increases() {
        let mut sim = OrbitSimulator::new(1.0e6);
        point_right_overshoot(&mut sim);
        let mut now = 0.0;
        sim.tick(now);
        for _ in 0..20 {
            now += FRAME_MS;
            sim.tick(now);
        }
        sim.pointer_leave();

        let mut speed = sim.velocity().length();
        for _ in 0..200 {
            now += FRAME_MS;
            sim.tick(now);
            let next = sim.velocity().length();
            assert!(next <= speed + 1e-6);
            speed = next;
        }
    }

    #[test]
    fn test_sustained_gravity_reaches_boundary_and_bounces() {
        let radius = 70.0;
        let mut sim = OrbitSimulator::new(radius);
        point_right_overshoot(&mut sim); // gravity (1, 0)

        let mut now = 0.0;
        sim.tick(now);
        let mut prev_x = 0.0f32;
        let mut bounced = false;
        for _ in 0..90 {
            now += FRAME_MS;
            let pos = sim.tick(now);
            assert!(pos.length() <= radius + 1e-3);
            if bounced {
                continue;
            }
            if sim.velocity().x < 0.0 {
                // First contact: the radial velocity component reverses,
                // and only a boundary hit can cause that
                assert!(pos.length() >= radius - 1e-2);
                bounced = true;
            } else {
                assert!(pos.x > prev_x, "x should climb until the boundary");
                assert!(pos.y.abs() < 1e-3);
                prev_x = pos.x;
            }
        }
        assert!(bounced, "ball should reach the boundary within 1.5s");
    }

    #[test]
    fn test_inward_overlap_clamps_without_reflecting() {
        let mut sim = OrbitSimulator::new(70.0);
        point_right_overshoot(&mut sim); // park the ball on the +x boundary
        let mut now = 0.0;
        sim.tick(now);
        for _ in 0..120 {
            now += FRAME_MS;
            sim.tick(now);
        }
        assert!((sim.position().length() - 70.0).abs() < 1.0);

        // Flip gravity inward until the ball actually moves toward center
        sim.pointer_move(Vec2::new(-120.0, 120.0), Vec2::new(240.0, 240.0)); // gravity (-1, 0)
        while sim.velocity().x >= 0.0 {
            now += FRAME_MS;
            sim.tick(now);
        }
        sim.pointer_leave();
        let vel_before = sim.velocity();
        assert!(vel_before.x < 0.0);

        // Shrink the boundary under the ball: it is now outside and moving
        // inward, so it must be clamped but not velocity-reflected
        sim.set_radius(20.0);
        assert_eq!(sim.radius(), 20.0);
        now += 10.0;
        let pos = sim.tick(now);
        assert!((pos.length() - 20.0).abs() < 1e-3);
        let expected = vel_before * (1.0 - DAMPING * 0.01);
        assert!((sim.velocity() - expected).length() < 1e-3);
    }
}
