use crate::mach::Address;

/// ## Diagnostic produced by a failing instruction or file operation

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    address: Option<Address>,
    instruction: String,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            instruction: String::new(),
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_instruction(self, instruction: &str) -> Error {
        debug_assert!(self.instruction.is_empty());
        Error {
            instruction: instruction.to_string(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Underflow = 1,
    MalformedOperand = 2,
    DivisionByZero = 3,
    UnresolvedLabel = 4,
    UnknownOpcode = 5,
    FileNotFound = 53,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "STACK UNDERFLOW",
            2 => "MALFORMED OPERAND",
            3 => "DIVISION BY ZERO",
            4 => "UNDEFINED LABEL",
            5 => "UNKNOWN INSTRUCTION",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" {}", address));
        }
        if !self.instruction.is_empty() {
            suffix.push_str(&format!(" [{}]", self.instruction));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        match (self.address, suffix.is_empty()) {
            (_, true) => Ok(()),
            (Some(_), false) => write!(f, " IN{}", suffix),
            (None, false) => write!(f, "{}", suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_in_address() {
        let e = error!(DivisionByZero, 2).in_instruction("DIV");
        assert_eq!(e.to_string(), "DIVISION BY ZERO IN 2 [DIV]");
    }

    #[test]
    fn test_display_message_only() {
        let e = error!(FileNotFound; "prog.svm");
        assert_eq!(e.to_string(), "FILE NOT FOUND; prog.svm");
        assert!(e.is(ErrorCode::FileNotFound));
    }

    #[test]
    fn test_display_bare() {
        assert_eq!(error!(Underflow).to_string(), "STACK UNDERFLOW");
    }
}
