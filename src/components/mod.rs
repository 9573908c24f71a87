//! Reusable view components.

pub mod protected;
