//! # Stack VM
//!
//! Enter or load a stack machine program and run it.
//!

mod term;

fn main() {
    term::main()
}
