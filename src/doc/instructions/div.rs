/*!
# `DIV` `MOD`

## Purpose
Divide the value below the top by the top value. `DIV` leaves the
quotient rounded toward zero, `MOD` leaves the remainder, which has
the sign of the dividend.

## Remarks
A zero divisor is a `DIVISION BY ZERO` error. Both operands have
already been taken off the stack when this happens and no result is
pushed.

## Example
```text
PUSH -7
PUSH 2
MOD
PRINT
```
Prints `Top of stack: -1`.

*/
