// Port Layer - Interfaces for platform facts

pub mod endian_probe;

// Re-exports
pub use endian_probe::{EndianProbe, FixedEndianProbe, TargetEndianProbe};
