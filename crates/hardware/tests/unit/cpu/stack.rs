//! Stack discipline tests: PUSH, POP, CALL, RET, the stack-pointer bounds,
//! and the deliberately stale R7 mirror.

use crate::common::harness::{Program, run_program};
use ls8_core::common::constants::{SP_REG, STACK_INIT};
use ls8_core::common::error::Fault;
use proptest::prelude::*;

#[test]
fn push_writes_below_the_initial_stack_pointer() {
    let result = run_program(&Program::new().ldi(0, 0xAB).push(0).hlt());
    assert_eq!(result.cpu.sp, STACK_INIT - 1);
    assert_eq!(result.cpu.mem.read(STACK_INIT - 1).unwrap(), 0xAB);
}

#[test]
fn pop_is_lifo() {
    let result = run_program(
        &Program::new()
            .ldi(0, 1)
            .ldi(1, 2)
            .push(0)
            .push(1)
            .pop(2)
            .pop(3)
            .hlt(),
    );
    assert_eq!(result.cpu.regs.read(2).unwrap(), 2);
    assert_eq!(result.cpu.regs.read(3).unwrap(), 1);
    assert_eq!(result.cpu.sp, STACK_INIT);
}

#[test]
fn call_pushes_the_address_after_its_operand() {
    // 0-2: LDI R0,7   (subroutine address)
    // 3-4: CALL R0    (return address is 5)
    //   5: HLT
    //   6: padding
    // 7-9: LDI R1,42  (subroutine body)
    //  10: RET
    let program = Program::new()
        .ldi(0, 7)
        .call(0)
        .hlt()
        .raw(0)
        .ldi(1, 42)
        .ret();
    let result = run_program(&program);

    // The subroutine ran and control resumed at the HLT after the CALL.
    assert_eq!(result.cpu.regs.read(1).unwrap(), 42);
    assert_eq!(result.halt().pc, 5);
    // The pushed return address is still visible below the stack top.
    assert_eq!(result.cpu.mem.read(STACK_INIT - 1).unwrap(), 5);
    assert_eq!(result.cpu.sp, STACK_INIT);
}

#[test]
fn nested_calls_unwind_in_order() {
    // main calls OUTER, OUTER calls INNER, both return.
    let program = Program::new()
        .ldi(0, 10) // 0-2: OUTER address
        .ldi(1, 16) // 3-5: INNER address
        .call(0) // 6-7
        .hlt() // 8
        .raw(0) // 9: padding
        // OUTER (10): call INNER, then mark R2
        .call(1) // 10-11
        .ldi(2, 1) // 12-14
        .ret() // 15
        // INNER (16): mark R3
        .ldi(3, 1) // 16-18
        .ret(); // 19
    let result = run_program(&program);
    assert_eq!(result.cpu.regs.read(2).unwrap(), 1);
    assert_eq!(result.cpu.regs.read(3).unwrap(), 1);
    assert_eq!(result.halt().pc, 8);
    assert_eq!(result.cpu.sp, STACK_INIT);
}

#[test]
fn r7_mirror_goes_stale_after_pushes() {
    // R7 is written once at run start and never tracks the live stack
    // pointer. Reproduced reference behavior; see Cpu::sp.
    let result = run_program(&Program::new().ldi(0, 1).push(0).push(0).hlt());
    assert_eq!(result.cpu.sp, STACK_INIT - 2);
    assert_eq!(result.cpu.regs.read(SP_REG).unwrap(), STACK_INIT as u8);
}

#[test]
fn pushing_into_the_program_region_faults() {
    // 0-2: LDI R0,3; 3-4: PUSH R1; 5-6: JMP R0 — pushes until the stack
    // pointer would descend into the 7 program bytes.
    let result = run_program(&Program::new().ldi(0, 3).push(1).jmp(0));
    assert!(matches!(
        result.fault(),
        Fault::StackOverflow { sp: 6, limit: 7 }
    ));
    assert_eq!(result.output, "");
}

#[test]
fn popping_past_the_address_space_faults() {
    // 0-2: LDI R0,3; 3-4: POP R1; 5-6: JMP R0 — pops climb from 244 and
    // fault at the first read past address 255.
    let result = run_program(&Program::new().ldi(0, 3).pop(1).jmp(0));
    assert!(matches!(result.fault(), Fault::MemoryOutOfBounds(256)));
}

proptest! {
    #[test]
    fn balanced_push_pop_restores_sp_and_value(v in any::<u8>(), clobber in any::<u8>()) {
        let result = run_program(
            &Program::new()
                .ldi(0, v)
                .push(0)
                .ldi(0, clobber)
                .pop(0)
                .prn(0)
                .hlt(),
        );
        prop_assert_eq!(result.cpu.sp, STACK_INIT);
        prop_assert_eq!(result.cpu.regs.read(0).unwrap(), v);
        prop_assert_eq!(result.output, format!("{v}\n"));
    }
}
