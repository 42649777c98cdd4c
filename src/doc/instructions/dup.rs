/*!
# `DUP`

## Purpose
Push a copy of the top of the stack.

## Remarks
`STACK UNDERFLOW` if the stack is empty.

*/
