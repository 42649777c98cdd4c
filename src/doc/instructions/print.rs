/*!
# `PRINT`

## Purpose
Show the top of the stack without removing it.

## Remarks
Prints `Top of stack: Empty` when there is nothing on the stack.

*/
