//! Small framework-agnostic helpers.

pub mod form;
