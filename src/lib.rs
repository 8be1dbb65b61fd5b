//! Lock Orbit - interactive behaviors for the lock landing page
//!
//! Core modules:
//! - `sim`: Deterministic orbit-ball physics (pure, no platform dependencies)
//! - `page`: Page behavior state machines (accordion, showcase, contact form)
//!
//! All DOM wiring lives in the wasm entry point (`main.rs`); nothing in
//! this library touches the browser, so everything here is tested natively.

pub mod page;
pub mod sim;

pub use sim::OrbitSimulator;

/// Tuning constants for the page behaviors
pub mod consts {
    /// Maximum card tilt in degrees; also scales pointer gravity to [-1, 1]
    pub const MAX_TILT_DEG: f32 = 28.0;
    /// Pointer gravity strength (pixels/s²)
    pub const GRAVITY_STRENGTH: f32 = 420.0;
    /// Velocity damping coefficient (1/s)
    pub const DAMPING: f32 = 3.0;
    /// Boundary bounce multiplier; >1 keeps the ball lively between bounces
    pub const RESTITUTION: f32 = 1.1;
    /// Longest simulation step in seconds (caps the spike after a
    /// backgrounded tab resumes)
    pub const MAX_STEP: f32 = 0.03;
    /// Boundary radius as a fraction of the token's rendered size
    pub const BOUNDARY_FACTOR: f32 = 0.32;
    /// Token size assumed before layout has settled (pixels)
    pub const FALLBACK_TOKEN_SIZE: f32 = 220.0;

    /// Visible fraction that triggers a scroll reveal
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Delay before the header reveal kicks in (ms)
    pub const HEADER_REVEAL_DELAY_MS: i32 = 100;
}

/// Boundary radius for a token of the given rendered size
///
/// Falls back to the pre-layout token size when the element reports zero
/// width (not yet laid out).
#[inline]
pub fn boundary_radius(token_size: f32) -> f32 {
    let size = if token_size > 0.0 {
        token_size
    } else {
        consts::FALLBACK_TOKEN_SIZE
    };
    size * consts::BOUNDARY_FACTOR
}
