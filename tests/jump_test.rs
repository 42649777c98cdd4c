mod common;
use common::*;
use stackvm::mach::Runtime;

#[test]
fn test_jump_skips_to_line_after_label() {
    assert_eq!(
        exec(&["PUSH 1", "JMP LOOP", "PUSH 99", "LOOP:", "PRINT"]),
        "Top of stack: 1\n"
    );
}

#[test]
fn test_jump_backwards_never_reruns_label_line() {
    assert_eq!(
        exec(&[
            "PUSH 0",
            "LOOP: PUSH 100",
            "PUSH 1",
            "ADD",
            "PRINT",
            "DUP",
            "PUSH 2",
            "CMPE",
            "CJMP DONE",
            "JMP LOOP",
            "DONE:",
        ]),
        "Top of stack: 1\nTop of stack: 2\n"
    );
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = Runtime::new(vec!["LOOP:", "JMP LOOP"]);
    assert_eq!(
        exec_n(&mut r, 100),
        "\n100 Execution cycles exceeded.\n"
    );
    assert!(!r.is_stopped());
}

#[test]
fn test_jmp_without_label() {
    assert_eq!(
        exec(&["PUSH 1", "JMP", "PRINT"]),
        "?MALFORMED OPERAND IN 1 [JMP]; MISSING LABEL\nTop of stack: 1\n"
    );
}

#[test]
fn test_cjmp_without_label_taken() {
    let mut r = Runtime::new(vec!["PUSH 5", "PUSH 1", "CJMP", "PRINT"]);
    assert_eq!(
        exec_runtime(&mut r),
        "?MALFORMED OPERAND IN 2 [CJMP]; MISSING LABEL\nTop of stack: 5\n"
    );
    assert_eq!(r.stack().len(), 1);
}

#[test]
fn test_cjmp_without_label_not_taken() {
    let mut r = Runtime::new(vec!["PUSH 5", "PUSH 0", "CJMP", "PRINT"]);
    assert_eq!(exec_runtime(&mut r), "Top of stack: 5\n");
    assert_eq!(r.stack().len(), 1);
}
