/*!
# Rust Language Module

This Rust module splits program text into instruction tokens
and defines the errors reported by the machine.

*/

#[macro_use]
mod error;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
