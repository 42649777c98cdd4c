/*!
# `ADD` `SUB` `MUL`

## Purpose
Replace the top two values with their sum, difference or product.

## Remarks
`SUB` subtracts the top value from the one below it, so the value
pushed first is the left hand side.
Results wrap around on overflow like machine integers do.

## Example
```text
PUSH 10
PUSH 3
SUB
PRINT
```
Prints `Top of stack: 7`.

*/
