//! Provisioning stages and the orchestrator that sequences them.
//!
//! Each stage is a free function over any [`provisioning::TrackerApi`]:
//!
//! 1. [`authenticate`] turns credentials into a bearer token.
//! 2. [`create_boards`] creates every board concurrently and waits for all of them.
//! 3. [`create_memberships`] grants every member the `"Back"` role concurrently.
//!
//! [`Orchestrator`] runs them in that order. Within a stage every call is
//! dispatched before any is awaited; between stages there is a strict barrier.
//! All fan-out is polled from a single task, so no state is shared across
//! threads.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Stages sequence calls to the port trait. They
//! contain no HTTP details.

pub mod authenticator;
pub mod boards;
pub mod memberships;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use authenticator::authenticate;
pub use boards::create_boards;
pub use memberships::create_memberships;
pub use orchestrator::Orchestrator;
