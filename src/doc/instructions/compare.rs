/*!
# `CMPE` `CMPG` `CMPL`

## Purpose
Replace the top two values with 1 or 0.

## Remarks
`CMPE` tests for equality.
`CMPG` pushes 1 when the top value is less than the one below it.
`CMPL` pushes 1 when the top value is greater than the one below it.
Read them as comparing the value pushed first against the top.

## Example
```text
PUSH 1
PUSH 2
CMPG
PRINT
```
Prints `Top of stack: 0`.

*/
