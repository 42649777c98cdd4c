/*!
# `CJMP <label>`

## Purpose
Pop the stack and jump like `JMP` when the value is exactly 1.

## Remarks
Every other value, including 2 and -1, does not jump.
`STACK UNDERFLOW` if the stack is empty.

*/
