//! Centralized constants for the tenant console.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod messages;
pub mod network;
pub mod paths;
pub mod quota;
