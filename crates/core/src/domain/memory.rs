// Memory Layout Domain Model
//
// Values examined with `x/...` during the memory walkthrough, plus the byte-order
// serialisation used to show how multi-byte integers sit in memory.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub const NUMBERS: [i32; 5] = [10, 20, 30, 40, 50];
pub const BIG_NUMBER: u32 = 0xDEAD_BEEF;
pub const SMALL_NUMBER: u16 = 0xCAFE;
/// "Hello, GDB!" with its NUL terminator
pub const GREETING: [u8; 12] = *b"Hello, GDB!\0";

/// Concrete byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Little,
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Big => write!(f, "big-endian"),
        }
    }
}

/// Byte order requested by the user; `Native` defers to the executing platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrderChoice {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrderChoice {
    pub fn resolve(self, native: ByteOrder) -> ByteOrder {
        match self {
            ByteOrderChoice::Native => native,
            ByteOrderChoice::Little => ByteOrder::Little,
            ByteOrderChoice::Big => ByteOrder::Big,
        }
    }
}

impl FromStr for ByteOrderChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(ByteOrderChoice::Native),
            "little" | "le" => Ok(ByteOrderChoice::Little),
            "big" | "be" => Ok(ByteOrderChoice::Big),
            _ => Err(DomainError::InvalidChoice {
                field: "byte order",
                value: s.to_string(),
            }),
        }
    }
}

pub fn bytes_of_u32(value: u32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

pub fn bytes_of_u16(value: u16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

pub fn bytes_of_i32s(values: &[i32], order: ByteOrder) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&value| match order {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        })
        .collect()
}

/// The four values of the memory walkthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySample {
    pub numbers: [i32; 5],
    pub big_number: u32,
    pub small_number: u16,
    pub greeting: [u8; 12],
}

impl Default for MemorySample {
    fn default() -> Self {
        Self {
            numbers: NUMBERS,
            big_number: BIG_NUMBER,
            small_number: SMALL_NUMBER,
            greeting: GREETING,
        }
    }
}

impl MemorySample {
    /// Greeting text up to (not including) the NUL terminator
    pub fn greeting_text(&self) -> Cow<'_, str> {
        let end = self
            .greeting
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.greeting.len());
        String::from_utf8_lossy(&self.greeting[..end])
    }

    /// Distance in bytes between consecutive `numbers` elements
    pub fn element_stride(&self) -> usize {
        std::mem::size_of_val(&self.numbers[0])
    }
}

/// `x/Nxb`-style rendering of a byte run, 8 bytes per line
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    base: usize,
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    pub const BYTES_PER_LINE: usize = 8;

    pub fn new(base: usize, bytes: &'a [u8]) -> Self {
        Self { base, bytes }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, chunk) in self.bytes.chunks(Self::BYTES_PER_LINE).enumerate() {
            if line > 0 {
                writeln!(f)?;
            }
            write!(f, "{:#x}:", self.base + line * Self::BYTES_PER_LINE)?;
            for byte in chunk {
                write!(f, "\t{:#04x}", byte)?;
            }
        }
        Ok(())
    }
}

/// Serialisable inspection report of a [`MemorySample`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReport {
    pub byte_order: ByteOrder,
    pub numbers: Vec<i32>,
    pub numbers_bytes: Vec<String>,
    pub element_stride: usize,
    pub big_number: String,
    pub big_number_bytes: Vec<String>,
    pub small_number: String,
    pub small_number_bytes: Vec<String>,
    pub greeting: String,
    pub greeting_bytes: Vec<String>,
}

impl MemoryReport {
    pub fn build(sample: &MemorySample, order: ByteOrder) -> Self {
        Self {
            byte_order: order,
            numbers: sample.numbers.to_vec(),
            numbers_bytes: hex_bytes(&bytes_of_i32s(&sample.numbers, order)),
            element_stride: sample.element_stride(),
            big_number: format!("0x{:X}", sample.big_number),
            big_number_bytes: hex_bytes(&bytes_of_u32(sample.big_number, order)),
            small_number: format!("0x{:X}", sample.small_number),
            small_number_bytes: hex_bytes(&bytes_of_u16(sample.small_number, order)),
            greeting: sample.greeting_text().into_owned(),
            greeting_bytes: hex_bytes(&sample.greeting),
        }
    }
}

fn hex_bytes(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| format!("{:#04x}", b)).collect()
}
