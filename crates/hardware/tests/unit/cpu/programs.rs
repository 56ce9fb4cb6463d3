//! End-to-end runs of the shipped sample programs.

use crate::common::harness::run_source;
use pretty_assertions::assert_eq;

#[test]
fn print8_prints_8() {
    let result = run_source(include_str!("../../../../../programs/print8.ls8"));
    assert_eq!(result.output, "8\n");
    assert!(result.outcome.is_ok());
}

#[test]
fn mult_prints_72() {
    let result = run_source(include_str!("../../../../../programs/mult.ls8"));
    assert_eq!(result.output, "72\n");
}

#[test]
fn stack_prints_2_4_1() {
    let result = run_source(include_str!("../../../../../programs/stack.ls8"));
    assert_eq!(result.output, "2\n4\n1\n");
}

#[test]
fn call_doubles_and_prints_each_argument() {
    let result = run_source(include_str!("../../../../../programs/call.ls8"));
    assert_eq!(result.output, "20\n30\n36\n60\n");
    assert!(result.outcome.is_ok());
}
