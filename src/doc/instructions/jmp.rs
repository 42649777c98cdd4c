/*!
# `JMP <label>`

## Purpose
Continue with the line after the label declaration.

## Remarks
A label that is never declared is not an error. The jump is ignored
and the next line runs.

*/
