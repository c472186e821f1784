// Domain Layer - The values the walkthroughs step through

pub mod arith;
pub mod error;
pub mod handle;
pub mod memory;

// Re-exports
pub use arith::{add, add_numbers, checked_add, checked_compute_sum, compute_sum};
pub use error::DomainError;
pub use handle::{acquire, DataHandle, DATA_LEN};
pub use memory::{ByteOrder, ByteOrderChoice, HexDump, MemoryReport, MemorySample};
