use super::Val;
use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// The machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `(10 - 3) * 2` is `[Push(10), Push(3), Sub, Push(2), Mul]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push literal value on to the stack.
    Push(Val),
    Pop,
    Dup,
    Swap,

    // *** Arithmetic
    Add,
    /// Second popped minus first popped.
    Sub,
    Mul,
    /// Truncating division. First popped is the divisor.
    Div,
    /// Truncated remainder. First popped is the divisor.
    Mod,

    // *** Comparison
    Cmpe,
    /// Pushes 1 when the first popped is less than the second popped.
    Cmpg,
    /// Pushes 1 when the first popped is greater than the second popped.
    Cmpl,

    // *** Branch control
    /// Unconditional branch to the line declaring the label.
    Jmp(String),
    /// Pop stack and branch if exactly 1. The label is only
    /// required when the branch is taken.
    Cjmp(Option<String>),

    // *** Statements
    Print,
    /// Label declaration. Never executes anything.
    Label(String),
    Unknown(String),
}

impl Opcode {
    /// Decodes the opcode token exactly as written. Extra operands are ignored.
    pub fn decode(line: &Line) -> Result<Opcode> {
        use Opcode::*;
        if let Some(name) = line.label() {
            return Ok(Label(name.to_string()));
        }
        Ok(match line.opcode() {
            "PUSH" => Push(Opcode::literal(line)?),
            "POP" => Pop,
            "DUP" => Dup,
            "SWAP" => Swap,
            "ADD" => Add,
            "SUB" => Sub,
            "MUL" => Mul,
            "DIV" => Div,
            "MOD" => Mod,
            "CMPE" => Cmpe,
            "CMPG" => Cmpg,
            "CMPL" => Cmpl,
            "JMP" => Jmp(Opcode::label_operand(line)?),
            "CJMP" => Cjmp(line.operand(0).map(|s| s.to_string())),
            "PRINT" => Print,
            s => Unknown(s.to_string()),
        })
    }

    fn literal(line: &Line) -> Result<Val> {
        match line.operand(0) {
            None => Err(error!(MalformedOperand; "MISSING INTEGER")),
            Some(s) => match s.parse::<Val>() {
                Ok(v) => Ok(v),
                Err(_) => Err(error!(MalformedOperand; &format!("NOT AN INTEGER: {}", s))),
            },
        }
    }

    fn label_operand(line: &Line) -> Result<String> {
        match line.operand(0) {
            Some(s) => Ok(s.to_string()),
            None => Err(error!(MalformedOperand; "MISSING LABEL")),
        }
    }

    /// Number of stack values the instruction consumes.
    pub fn arity(&self) -> usize {
        use Opcode::*;
        match self {
            Pop | Dup | Cjmp(_) => 1,
            Swap | Add | Sub | Mul | Div | Mod | Cmpe | Cmpg | Cmpl => 2,
            Push(_) | Jmp(_) | Print | Label(_) | Unknown(_) => 0,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Push(v) => write!(f, "PUSH {}", v),
            Pop => write!(f, "POP"),
            Dup => write!(f, "DUP"),
            Swap => write!(f, "SWAP"),

            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),

            Cmpe => write!(f, "CMPE"),
            Cmpg => write!(f, "CMPG"),
            Cmpl => write!(f, "CMPL"),

            Jmp(s) => write!(f, "JMP {}", s),
            Cjmp(Some(s)) => write!(f, "CJMP {}", s),
            Cjmp(None) => write!(f, "CJMP"),

            Print => write!(f, "PRINT"),
            Label(s) => write!(f, "{}:", s),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn decode(s: &str) -> Result<Opcode> {
        Opcode::decode(&Line::from_str(s))
    }

    #[test]
    fn test_decode_push() {
        assert_eq!(decode("PUSH -12").unwrap(), Opcode::Push(-12));
        assert_eq!(decode("PUSH +5").unwrap(), Opcode::Push(5));
        assert_eq!(decode("PUSH 1 2").unwrap(), Opcode::Push(1));
    }

    #[test]
    fn test_decode_push_malformed() {
        assert!(decode("PUSH x").unwrap_err().is(ErrorCode::MalformedOperand));
        assert!(decode("PUSH").unwrap_err().is(ErrorCode::MalformedOperand));
        assert!(decode("PUSH 99999999999")
            .unwrap_err()
            .is(ErrorCode::MalformedOperand));
    }

    #[test]
    fn test_decode_label_discards_rest() {
        assert_eq!(
            decode("LOOP: PUSH 1").unwrap(),
            Opcode::Label("LOOP".to_string())
        );
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_eq!(decode("add").unwrap(), Opcode::Unknown("add".to_string()));
    }

    #[test]
    fn test_decode_jump_labels() {
        assert_eq!(decode("JMP END").unwrap(), Opcode::Jmp("END".to_string()));
        assert!(decode("JMP").unwrap_err().is(ErrorCode::MalformedOperand));
        assert_eq!(
            decode("CJMP END").unwrap(),
            Opcode::Cjmp(Some("END".to_string()))
        );
        assert_eq!(decode("CJMP").unwrap(), Opcode::Cjmp(None));
    }
}
