//! Value types for Artemis API parameters.

mod suspend;

pub use suspend::SuspendState;
