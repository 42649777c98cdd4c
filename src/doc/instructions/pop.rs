/*!
# `POP`

## Purpose
Remove the top of the stack and throw it away.

## Remarks
`STACK UNDERFLOW` if the stack is empty.

*/
