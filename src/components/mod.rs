//! Reusable view components.

pub mod pattern_network;
