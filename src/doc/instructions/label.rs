/*!
# `<name>:`

## Purpose
Name the current line as a jump target.

## Remarks
Anything after the label on the same line is ignored and never runs.
When a name is declared twice the later declaration is used.

## Example
```text
JMP DONE
PUSH 1
DONE:
PRINT
```
Prints `Top of stack: Empty`.

*/
