//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! `session` is the single source of truth for authentication; `guard`
//! turns it into a routing decision; `confirm` drives the one-shot email
//! confirmation page.

pub mod confirm;
pub mod guard;
pub mod session;
