//! Byte-order contract of the memory program
//!
//! Serialised bytes follow the chosen order; `native` follows the probe.

use debug_demos_core::application::memory::{self, MemoryOptions, ReportFormat};
use debug_demos_core::domain::memory::{bytes_of_u16, bytes_of_u32, BIG_NUMBER, SMALL_NUMBER};
use debug_demos_core::domain::{ByteOrder, ByteOrderChoice, MemoryReport};
use debug_demos_core::port::{EndianProbe, FixedEndianProbe, TargetEndianProbe};

fn json_report(probe: &dyn EndianProbe, byte_order: ByteOrderChoice) -> MemoryReport {
    let options = MemoryOptions {
        byte_order,
        format: ReportFormat::Json,
        ..Default::default()
    };
    let mut out = Vec::new();
    memory::run(&mut out, probe, &options).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_little_endian_bytes() {
    assert_eq!(
        bytes_of_u32(BIG_NUMBER, ByteOrder::Little),
        [0xEF, 0xBE, 0xAD, 0xDE]
    );
    assert_eq!(bytes_of_u16(SMALL_NUMBER, ByteOrder::Little), [0xFE, 0xCA]);
}

#[test]
fn test_native_matches_platform_memory() {
    let order = TargetEndianProbe.native_order();
    assert_eq!(bytes_of_u32(BIG_NUMBER, order), BIG_NUMBER.to_ne_bytes());
    assert_eq!(bytes_of_u16(SMALL_NUMBER, order), SMALL_NUMBER.to_ne_bytes());
}

#[test]
fn test_native_is_observable_through_probe() {
    let little = json_report(&FixedEndianProbe(ByteOrder::Little), ByteOrderChoice::Native);
    let big = json_report(&FixedEndianProbe(ByteOrder::Big), ByteOrderChoice::Native);

    assert_eq!(little.byte_order, ByteOrder::Little);
    assert_eq!(little.small_number_bytes, ["0xfe", "0xca"]);
    assert_eq!(big.byte_order, ByteOrder::Big);
    assert_eq!(big.small_number_bytes, ["0xca", "0xfe"]);
}

#[test]
fn test_greeting_and_layout_independent_of_order() {
    let little = json_report(&TargetEndianProbe, ByteOrderChoice::Little);
    let big = json_report(&TargetEndianProbe, ByteOrderChoice::Big);

    assert_eq!(little.greeting, "Hello, GDB!");
    assert_eq!(little.greeting_bytes, big.greeting_bytes);
    assert_eq!(little.greeting_bytes.len(), 12);
    assert_eq!(little.greeting_bytes[0], "0x48");
    assert_eq!(little.element_stride, 4);
    assert_eq!(little.numbers_bytes.len(), 20);
}
