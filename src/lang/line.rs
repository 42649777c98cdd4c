/// ## One program line split into tokens
///
/// Tokens are separated by ASCII spaces. Runs of spaces do not
/// produce empty tokens, but a blank line still has one empty opcode
/// token so it reports as an unknown instruction.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    source: String,
    tokens: Vec<String>,
}

impl Line {
    pub fn from_str(s: &str) -> Line {
        let mut tokens: Vec<String> = s
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if tokens.is_empty() {
            tokens.push(String::new());
        }
        Line {
            source: s.to_string(),
            tokens,
        }
    }

    pub fn opcode(&self) -> &str {
        &self.tokens[0]
    }

    pub fn operands(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands().get(index).map(|s| s.as_str())
    }

    /// The name declared by a label line, without its trailing colon.
    pub fn label(&self) -> Option<&str> {
        self.opcode().strip_suffix(':')
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
