//! Register file tests.

use ls8_core::common::constants::NUM_REGISTERS;
use ls8_core::common::error::Fault;
use ls8_core::core::gpr::RegisterFile;

#[test]
fn registers_start_zeroed() {
    let regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS as u8 {
        assert_eq!(regs.read(i).unwrap(), 0);
    }
}

#[test]
fn write_then_read_round_trips() {
    let mut regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS as u8 {
        regs.write(i, i * 10).unwrap();
    }
    for i in 0..NUM_REGISTERS as u8 {
        assert_eq!(regs.read(i).unwrap(), i * 10);
    }
}

#[test]
fn registers_are_independent() {
    let mut regs = RegisterFile::new();
    regs.write(3, 99).unwrap();
    assert_eq!(regs.read(2).unwrap(), 0);
    assert_eq!(regs.read(4).unwrap(), 0);
}

#[test]
fn read_out_of_range_faults() {
    let regs = RegisterFile::new();
    assert!(matches!(regs.read(8), Err(Fault::RegisterOutOfBounds(8))));
    assert!(matches!(
        regs.read(255),
        Err(Fault::RegisterOutOfBounds(255))
    ));
}

#[test]
fn write_out_of_range_faults_and_mutates_nothing() {
    let mut regs = RegisterFile::new();
    assert!(matches!(
        regs.write(8, 1),
        Err(Fault::RegisterOutOfBounds(8))
    ));
    for i in 0..NUM_REGISTERS as u8 {
        assert_eq!(regs.read(i).unwrap(), 0);
    }
}
