//! Page components, one per route.

pub mod confirm;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
