// Program 2: memory examination (arrays, endianness, strings, pointers)

use super::Outcome;
use crate::domain::memory::{
    bytes_of_i32s, bytes_of_u16, bytes_of_u32, BIG_NUMBER, GREETING, NUMBERS, SMALL_NUMBER,
};
use crate::domain::{ByteOrder, ByteOrderChoice, DomainError, HexDump, MemoryReport, MemorySample};
use crate::port::EndianProbe;
use crate::Result;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info};

/// Output format of the memory program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(DomainError::InvalidChoice {
                field: "report format",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryOptions {
    pub byte_order: ByteOrderChoice,
    /// Append `x/Nxb`-style dumps after the values
    pub inspect: bool,
    pub format: ReportFormat,
}

/// Run the memory program
///
/// The values live in locals of this frame so a debugger stopped here can
/// examine them with `x/5dw &numbers[0]`, `x/4xb &big_number` and `x/s greeting`.
pub fn run(
    out: &mut dyn Write,
    probe: &dyn EndianProbe,
    options: &MemoryOptions,
) -> Result<Outcome> {
    let numbers: [i32; 5] = NUMBERS;
    let big_number: u32 = BIG_NUMBER;
    let small_number: u16 = SMALL_NUMBER;
    let greeting: [u8; 12] = GREETING;
    let str_ptr: *const u8 = greeting.as_ptr();

    let native = probe.native_order();
    let order = options.byte_order.resolve(native);
    info!(byte_order = %order, requested = ?options.byte_order, "Memory walkthrough");

    let sample = MemorySample {
        numbers,
        big_number,
        small_number,
        greeting,
    };

    if options.format == ReportFormat::Json {
        let report = MemoryReport::build(&sample, order);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(Outcome::Completed);
    }

    writeln!(out, "Address of numbers[0]: {:p}", &numbers[0])?;
    writeln!(out, "Address of big_number: {:p}", &big_number)?;
    writeln!(out, "Address of greeting:   {:p}", str_ptr)?;

    writeln!(out)?;
    writeln!(out, "Values:")?;
    writeln!(out, "big_number = 0x{:X}", big_number)?;
    writeln!(out, "small_number = 0x{:X}", small_number)?;
    writeln!(out, "greeting = \"{}\"", sample.greeting_text())?;

    if options.inspect {
        write_inspection(
            out,
            order,
            order == native,
            &numbers,
            &big_number,
            &small_number,
            &greeting,
        )?;
    }

    Ok(Outcome::Completed)
}

/// Byte dumps of the locals
///
/// In the native order the dumps carry the real addresses and the `x/` command that
/// reproduces them. In a foreign order the bytes are a re-serialised copy, so they
/// are labelled as such and shown at offsets, never at the locals' addresses.
fn write_inspection(
    out: &mut dyn Write,
    order: ByteOrder,
    native: bool,
    numbers: &[i32; 5],
    big_number: &u32,
    small_number: &u16,
    greeting: &[u8; 12],
) -> Result<()> {
    debug!(byte_order = %order, native, "Writing inspection dumps");

    writeln!(out)?;
    if native {
        writeln!(out, "Memory ({}):", order)?;
    } else {
        writeln!(out, "Memory (as laid out on a {} target):", order)?;
    }

    let mut dump = |label: &str, command: &str, addr: usize, bytes: &[u8]| -> Result<()> {
        if native {
            writeln!(out, "{}", command)?;
            writeln!(out, "{}", HexDump::new(addr, bytes))?;
        } else {
            writeln!(out, "{}", label)?;
            writeln!(out, "{}", HexDump::new(0, bytes))?;
        }
        Ok(())
    };

    dump(
        "numbers",
        "x/20xb &numbers[0]",
        numbers.as_ptr() as usize,
        &bytes_of_i32s(numbers, order),
    )?;
    dump(
        "big_number",
        "x/4xb &big_number",
        big_number as *const u32 as usize,
        &bytes_of_u32(*big_number, order),
    )?;
    dump(
        "small_number",
        "x/2xb &small_number",
        small_number as *const u16 as usize,
        &bytes_of_u16(*small_number, order),
    )?;
    dump(
        "greeting",
        "x/12xb greeting",
        greeting.as_ptr() as usize,
        greeting,
    )?;

    writeln!(
        out,
        "&numbers[1] - &numbers[0] = {} bytes",
        std::mem::size_of_val(&numbers[0])
    )?;

    Ok(())
}
