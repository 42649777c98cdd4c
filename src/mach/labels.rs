use super::{Address, Program};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

/// ## Label table
///
/// Built in one pass before execution. A line whose first token ends
/// in `:` declares the label named by the rest of that token. When a
/// name is declared twice the later line wins.

#[derive(Debug, Default, Clone)]
pub struct Labels {
    symbols: HashMap<String, Address>,
}

impl Labels {
    pub fn new() -> Labels {
        Labels::default()
    }

    pub fn build(program: &Program) -> Labels {
        let mut labels = Labels::new();
        for (addr, line) in program.lines().iter().enumerate() {
            if let Some(name) = line.label() {
                labels.insert(name, addr);
            }
        }
        labels
    }

    pub fn insert(&mut self, name: &str, addr: Address) {
        self.symbols.insert(name.to_string(), addr);
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<Address, Error> {
        match self.get(name) {
            Some(addr) => Ok(addr),
            None => Err(error!(UnresolvedLabel; name)),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
