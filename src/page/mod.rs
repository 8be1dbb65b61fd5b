//! Page behavior state machines
//!
//! The non-physics interactions of the landing page: the FAQ accordion,
//! the experience-section video showcase, and the contact form. Each one
//! is a small pure state machine; the wasm entry point reads its decisions
//! and applies them to the DOM.

pub mod accordion;
pub mod contact;
pub mod showcase;

pub use accordion::{Accordion, AccordionChange};
pub use contact::{ContactPayload, DeliveryOutcome, DeliveryRoute, FormStatus, StatusKind};
pub use showcase::{Showcase, StepMedia, Swap, swap_for};
