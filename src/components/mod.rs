//! UI components.

pub mod sparkle;
