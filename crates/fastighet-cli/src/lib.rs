//! Library components for the fastighet CLI.

pub mod logging;
pub mod pipeline;
