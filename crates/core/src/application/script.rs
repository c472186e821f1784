// Narration scripts: the debugger session an instructor walks through per program

use crate::domain::DomainError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// The four demonstration programs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Hello,
    Basic,
    Memory,
    Fault,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Hello,
        Program::Basic,
        Program::Memory,
        Program::Fault,
    ];

    /// Name of the standalone executable
    pub fn binary(self) -> &'static str {
        match self {
            Program::Hello => "demo0",
            Program::Basic => "demo1",
            Program::Memory => "demo2",
            Program::Fault => "demo3",
        }
    }

    pub fn purpose(self) -> &'static str {
        match self {
            Program::Hello => "Break, run and step into a single function call",
            Program::Basic => "Locals, step vs next, backtraces, registers and finish",
            Program::Memory => "Examine arrays, endianness, strings and pointers with x",
            Program::Fault => "Diagnose a crash caused by using an absent data handle",
        }
    }

    pub fn script(self) -> &'static [Step] {
        match self {
            Program::Hello => HELLO,
            Program::Basic => BASIC,
            Program::Memory => MEMORY,
            Program::Fault => FAULT,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Program::Hello => write!(f, "hello"),
            Program::Basic => write!(f, "basic"),
            Program::Memory => write!(f, "memory"),
            Program::Fault => write!(f, "fault"),
        }
    }
}

impl FromStr for Program {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hello" | "demo0" | "0" => Ok(Program::Hello),
            "basic" | "demo1" | "1" => Ok(Program::Basic),
            "memory" | "demo2" | "2" => Ok(Program::Memory),
            "fault" | "demo3" | "3" => Ok(Program::Fault),
            _ => Err(DomainError::InvalidChoice {
                field: "program",
                value: s.to_string(),
            }),
        }
    }
}

/// One narrated step of a debugger session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub commands: &'static [&'static str],
    pub note: &'static str,
}

const HELLO: &[Step] = &[
    Step {
        title: "Start the debugger",
        commands: &["gdb ./demo0"],
        note: "Build with debug info and no optimisation first.",
    },
    Step {
        title: "Stop at the entry point",
        commands: &["break main", "run"],
        note: "Execution halts before the first line of main.",
    },
    Step {
        title: "Step into add",
        commands: &["step", "step"],
        note: "Keep stepping until the current frame is add.",
    },
];

const BASIC: &[Step] = &[
    Step {
        title: "Stop at the entry point",
        commands: &["gdb ./demo1", "break main", "run"],
        note: "",
    },
    Step {
        title: "Inspect locals before initialisation",
        commands: &["info locals"],
        note: "Values are whatever was left on the stack.",
    },
    Step {
        title: "Advance over the assignments",
        commands: &["next", "next", "info locals"],
        note: "The locals now hold 10, 20 and 15.",
    },
    Step {
        title: "Enter compute_sum",
        commands: &["step", "backtrace"],
        note: "Two frames: compute_sum called from main.",
    },
    Step {
        title: "Enter add_numbers",
        commands: &["step", "backtrace"],
        note: "Three frames: add_numbers, compute_sum, main.",
    },
    Step {
        title: "Look at argument registers",
        commands: &["info registers"],
        note: "rdi/x0 holds the first argument, rsi/x1 the second.",
    },
    Step {
        title: "Return to the caller",
        commands: &["finish"],
        note: "The debugger prints the returned value.",
    },
    Step {
        title: "Run to completion",
        commands: &["continue"],
        note: "",
    },
];

const MEMORY: &[Step] = &[
    Step {
        title: "Stop at the entry point",
        commands: &["gdb ./demo2", "break main", "run"],
        note: "",
    },
    Step {
        title: "Step past the declarations",
        commands: &["next"],
        note: "Repeat until the string pointer has been assigned.",
    },
    Step {
        title: "Examine the integer array",
        commands: &["print numbers", "x/5dw &numbers[0]", "x/20xb &numbers[0]"],
        note: "Each element is 4 bytes, least significant byte first.",
    },
    Step {
        title: "Show endianness",
        commands: &["print/x big_number", "x/4xb &big_number"],
        note: "On little-endian machines the bytes read 0xef 0xbe 0xad 0xde.",
    },
    Step {
        title: "Compare a 16-bit value",
        commands: &["print/x small_number", "x/2xb &small_number"],
        note: "Expect 0xfe 0xca.",
    },
    Step {
        title: "Examine the string",
        commands: &["print greeting", "x/s greeting", "x/12xb greeting"],
        note: "'H' is 0x48; the final byte is the 0x00 terminator.",
    },
    Step {
        title: "Follow the pointer",
        commands: &["print str_ptr", "print *str_ptr", "x/s str_ptr"],
        note: "The pointer holds an address; dereferencing gives the first byte.",
    },
    Step {
        title: "Pointer arithmetic",
        commands: &["print &numbers[0]", "print &numbers[1]"],
        note: "Consecutive elements are 4 bytes apart.",
    },
];

const FAULT: &[Step] = &[
    Step {
        title: "Run outside the debugger",
        commands: &["./demo3"],
        note: "The process dies with a segmentation fault.",
    },
    Step {
        title: "Run under the debugger",
        commands: &["gdb ./demo3", "run"],
        note: "The debugger stops on SIGSEGV at the faulting instruction.",
    },
    Step {
        title: "Find the faulting frame",
        commands: &["backtrace"],
        note: "The innermost frame was handed a null data pointer.",
    },
    Step {
        title: "Read the surrounding source",
        commands: &["list"],
        note: "",
    },
    Step {
        title: "Confirm the pointer is null",
        commands: &["print data", "print *data"],
        note: "Reading address 0x0 is refused.",
    },
    Step {
        title: "Walk up to the caller",
        commands: &["up", "up", "list", "print bad_data"],
        note: "Climb to the frame that passed on an acquisition result it never checked.",
    },
    Step {
        title: "Registers at the crash",
        commands: &["frame 0", "info registers"],
        note: "On x86-64 rdi is 0: the first argument was null.",
    },
    Step {
        title: "Apply a fix",
        commands: &[
            "debug-demos fault --strategy guarded",
            "debug-demos fault --strategy caller-checked",
        ],
        note: "Check for absence in the callee, or check the result in the caller.",
    },
];

/// Decoration applied to each piece of a rendered script
///
/// The layout lives in [`render`]; a style only wraps the text it is handed.
pub trait ScriptStyle {
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn number(&self, text: &str) -> String {
        text.to_string()
    }

    fn command(&self, text: &str) -> String {
        text.to_string()
    }

    fn note(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Undecorated text
pub struct PlainStyle;

impl ScriptStyle for PlainStyle {}

/// Write a numbered rendering of a program's script
pub fn render(
    out: &mut dyn Write,
    program: Program,
    style: &dyn ScriptStyle,
) -> std::io::Result<()> {
    let heading = format!("{} ({})", program, program.binary());
    writeln!(out, "{}: {}", style.heading(&heading), program.purpose())?;
    for (i, step) in program.script().iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{} {}", style.number(&format!("{}.", i + 1)), step.title)?;
        for command in step.commands {
            writeln!(out, "   {}", style.command(command))?;
        }
        if !step.note.is_empty() {
            writeln!(out, "   -- {}", style.note(step.note))?;
        }
    }
    Ok(())
}
