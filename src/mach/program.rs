use super::{Address, Listing};
use crate::lang::Line;

/// ## Tokenized program
///
/// Fixed for the whole run. The index of a line is its address.

#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn line(&self, addr: Address) -> Option<&Line> {
        self.lines.get(addr)
    }
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Program {
    fn from(lines: Vec<S>) -> Program {
        Program {
            lines: lines.iter().map(|s| Line::from_str(s.as_ref())).collect(),
        }
    }
}

impl From<&Listing> for Program {
    fn from(listing: &Listing) -> Program {
        Program {
            lines: listing.lines().map(Line::from_str).collect(),
        }
    }
}
