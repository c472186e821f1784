// Application Layer - One runner per demonstration program

pub mod basic;
pub mod fault;
pub mod hello;
pub mod memory;
pub mod script;

// Re-exports
pub use fault::{FaultKind, FaultStrategy};
pub use memory::{MemoryOptions, ReportFormat};
pub use script::{PlainStyle, Program, ScriptStyle, Step};

/// How a program run ended (when it ended at all)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to the end; exit status 0
    Completed,
    /// Stopped early after reporting an error
    Aborted { exit_code: i32 },
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Completed => 0,
            Outcome::Aborted { exit_code } => exit_code,
        }
    }
}
