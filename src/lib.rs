//! # Stack VM
//!
//! A small stack machine for teaching. Programs are plain text, one
//! instruction per line, working on a stack of 32 bit integers.
//!
//! ```
//! use stackvm::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::new(vec!["PUSH 3", "PUSH 4", "ADD", "PRINT"]);
//! let mut output = vec![];
//! runtime.run(|event| output.push(event));
//! assert_eq!(output, [Event::Print("Top of stack: 7".to_string())]);
//! ```
//!
//! Run the `stackvm` executable to type in a program, or give it a
//! file name to run a saved one.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
