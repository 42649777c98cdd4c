/*!
# Introductory Tutorial for Stack VM

Run the executable with no arguments and type a program one
instruction per line. Finish with `END`. You will be offered the
chance to save the program, then it runs.
<pre><code>&nbsp;  Enter instructions for the VM (type 'END' to finish):
&nbsp;> PUSH 3
&nbsp;> PUSH 4
&nbsp;> ADD
&nbsp;> PRINT
&nbsp;> END
&nbsp;  Save program to file (yes/no)? no
&nbsp;  Top of stack: 7
</code></pre>

Every instruction works on the stack. `PUSH 3` and `PUSH 4` leave two
numbers on it. `ADD` takes both off and puts their sum back. `PRINT`
shows the top of the stack without removing it.

A saved program is a plain text file. Run it again with
`stackvm program.svm`.

## Labels and jumps

A line made of a single word ending in a colon is a label.
`JMP` and `CJMP` continue with the line after the label.
<pre><code>&nbsp;> PUSH 3
&nbsp;> LOOP:
&nbsp;> PRINT
&nbsp;> PUSH 1
&nbsp;> SUB
&nbsp;> DUP
&nbsp;> PUSH 0
&nbsp;> CMPG
&nbsp;> CJMP LOOP
&nbsp;> END
&nbsp;  Save program to file (yes/no)? no
&nbsp;  Top of stack: 3
&nbsp;  Top of stack: 2
&nbsp;  Top of stack: 1
</code></pre>

`CMPG` leaves 1 while the counter is still above zero and `CJMP`
only jumps when the value it pops is exactly 1.

Stop a program that loops forever with CTRL-C.

## Errors

An instruction that fails prints an error and the program carries on
with the next line.
<pre><code>&nbsp;> POP
&nbsp;> PUSH 1
&nbsp;> PRINT
&nbsp;> END
&nbsp;  Save program to file (yes/no)? no
&nbsp;  <b>STACK UNDERFLOW IN 0 [POP]</b>
&nbsp;  Top of stack: 1
</code></pre>

The number after `IN` is the line of the program counting from zero.
Set `RUST_LOG=trace` to see every instruction as it executes.

*/
