// Endian Probe Port (for testability)

use crate::domain::ByteOrder;

/// Reports the byte order of the executing platform (allows mocking in tests)
pub trait EndianProbe: Send + Sync {
    fn native_order(&self) -> ByteOrder;
}

/// Compile-target byte order (production)
pub struct TargetEndianProbe;

impl EndianProbe for TargetEndianProbe {
    fn native_order(&self) -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// Fixed byte order, for exercising the non-native paths
pub struct FixedEndianProbe(pub ByteOrder);

impl EndianProbe for FixedEndianProbe {
    fn native_order(&self) -> ByteOrder {
        self.0
    }
}
