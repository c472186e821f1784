//! Debug Demos CLI - run any demonstration program, or print its narration

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use debug_demos_core::application::{
    basic, fault, hello, memory, script, FaultKind, FaultStrategy, MemoryOptions, PlainStyle,
    Program, ReportFormat, ScriptStyle,
};
use debug_demos_core::domain::ByteOrderChoice;
use debug_demos_core::port::TargetEndianProbe;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Parser)]
#[command(name = "debug-demos")]
#[command(about = "Debugger walkthrough programs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Single call to step into (demo0)
    Hello,

    /// Nested calls for step, next, backtrace and finish (demo1)
    Basic,

    /// Arrays, endianness and strings for memory examination (demo2)
    Memory {
        /// Byte order used for the inspection dumps (native, little, big)
        #[arg(long, env = "DEBUG_DEMOS_BYTE_ORDER", default_value = "native")]
        byte_order: ByteOrderChoice,

        /// Append x/Nxb-style dumps of every value
        #[arg(long)]
        inspect: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: ReportFormat,
    },

    /// Crash diagnosis with an absent data handle (demo3)
    Fault {
        /// Second-call variant (unchecked, guarded, caller-checked)
        #[arg(short, long, env = "DEBUG_DEMOS_FAULT_STRATEGY", default_value = "unchecked")]
        strategy: FaultStrategy,

        /// How the unchecked variant fails (null-read, panic)
        #[arg(long = "fault", env = "DEBUG_DEMOS_FAULT_KIND", default_value = "null-read")]
        kind: FaultKind,
    },

    /// Print the debugger narration for a program
    Script {
        /// Program name or executable (hello, basic, memory, fault, demo0..demo3)
        program: Program,
    },

    /// List the programs
    List,
}

#[derive(Tabled)]
struct ProgramRow {
    #[tabled(rename = "Executable")]
    binary: &'static str,
    #[tabled(rename = "Subcommand")]
    name: String,
    #[tabled(rename = "Steps")]
    steps: usize,
    #[tabled(rename = "Purpose")]
    purpose: &'static str,
}

/// Terminal colours for `debug-demos script`
struct ColoredStyle;

impl ScriptStyle for ColoredStyle {
    fn heading(&self, text: &str) -> String {
        text.cyan().bold().to_string()
    }

    fn number(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn command(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn note(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

fn main() -> Result<()> {
    debug_demos_cli::logging::init_logging()?;
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Hello => hello::run(&mut out)?,
        Commands::Basic => basic::run(&mut out)?,
        Commands::Memory {
            byte_order,
            inspect,
            format,
        } => {
            let options = MemoryOptions {
                byte_order,
                inspect,
                format,
            };
            memory::run(&mut out, &TargetEndianProbe, &options)?
        }
        Commands::Fault { strategy, kind } => {
            info!(?strategy, ?kind, "Starting crash program");
            fault::run(&mut out, strategy, kind)?
        }
        Commands::Script { program } => {
            drop(out);
            let style: &dyn ScriptStyle = if colored::control::SHOULD_COLORIZE.should_colorize() {
                &ColoredStyle
            } else {
                &PlainStyle
            };
            script::render(&mut std::io::stdout().lock(), program, style)?;
            return Ok(());
        }
        Commands::List => {
            drop(out);
            let rows: Vec<ProgramRow> = Program::ALL
                .iter()
                .map(|&program| ProgramRow {
                    binary: program.binary(),
                    name: program.to_string(),
                    steps: program.script().len(),
                    purpose: program.purpose(),
                })
                .collect();

            println!("{}", "Programs".cyan().bold());
            println!();
            println!("{}", Table::new(rows));
            return Ok(());
        }
    };

    drop(out);
    debug_demos_cli::conclude(outcome)
}
