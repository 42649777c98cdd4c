/*!
## Rust Machine Module

This Rust module is the stack machine: label table, operand stack
and the fetch, decode and execute loop.

*/

pub type Address = usize;
pub type Val = i32;

mod labels;
mod listing;
mod opcode;
mod program;
mod runtime;
mod stack;

pub use labels::Labels;
pub use listing::Listing;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;
