//! Deterministic orbit-ball simulation
//!
//! The decorative ball on the lock illustration lives here. This module
//! must be pure and deterministic:
//! - Inputs are pointer geometry and a millisecond clock, both supplied
//!   by the caller
//! - No rendering or platform dependencies
//! - The only mutation of position/velocity happens in `tick`

mod orbit;

#[cfg(test)]
mod proptest_orbit;

pub use orbit::OrbitSimulator;
