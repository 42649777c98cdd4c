/*!
# `PUSH <integer>`

## Purpose
Put a number on top of the stack.

## Remarks
The number must fit in a signed 32 bit integer. A leading `+` or `-`
is allowed. Anything else is a `MALFORMED OPERAND` error and nothing
is pushed.

## Example
```text
PUSH -12
PRINT
```

*/
