/*!
# Instructions

Opcodes are matched exactly as written. `push` is not `PUSH`.
Extra words after an instruction are ignored.
*/

#[path = "instructions/push.rs"]
#[allow(non_snake_case)]
pub mod PUSH;

#[path = "instructions/pop.rs"]
#[allow(non_snake_case)]
pub mod POP;

#[path = "instructions/dup.rs"]
#[allow(non_snake_case)]
pub mod DUP;

#[path = "instructions/swap.rs"]
#[allow(non_snake_case)]
pub mod SWAP;

#[path = "instructions/arithmetic.rs"]
#[allow(non_snake_case)]
pub mod ADD_SUB_MUL;

#[path = "instructions/div.rs"]
#[allow(non_snake_case)]
pub mod DIV_MOD;

#[path = "instructions/compare.rs"]
#[allow(non_snake_case)]
pub mod CMPE_CMPG_CMPL;

#[path = "instructions/jmp.rs"]
#[allow(non_snake_case)]
pub mod JMP;

#[path = "instructions/cjmp.rs"]
#[allow(non_snake_case)]
pub mod CJMP;

#[path = "instructions/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "instructions/label.rs"]
#[allow(non_snake_case)]
pub mod LABEL;
