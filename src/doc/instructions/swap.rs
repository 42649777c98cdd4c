/*!
# `SWAP`

## Purpose
Exchange the top two values.

## Remarks
Needs two values or `STACK UNDERFLOW` occurs and the stack is left alone.

*/
