//! Error codes for all Roze diagnostics.

use std::fmt;

/// Error codes for all Roze diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Compile errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Named function outside the top level
    E1005,

    // Compile Errors (E2xxx)
    /// Operand type mismatch
    E2001,
    /// Operator not defined for type
    E2002,
    /// Assignment target is not an identifier
    E2003,
    /// Reassignment changes the variable's type
    E2004,
    /// Empty expression
    E2005,
    /// Key-value key is not a string
    E2006,
    /// Duplicate parameter name
    E2007,

    // Runtime Errors (E6xxx)
    /// Variable used before assignment
    E6001,
    /// Operand types differ at run time
    E6002,
    /// Operator not defined for runtime type
    E6003,
    /// Invoked value is not a function
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Function name registered twice
    E6006,
    /// Local assignment to a global name
    E6007,
    /// Pipeline stage is not a function
    E6008,
    /// Pipeline stage does not take exactly one parameter
    E6009,
    /// Integer division by zero
    E6010,
    /// Integer modulo by zero
    E6011,
    /// Assignment changes a variable's runtime type
    E6012,
    /// Pipeline lap limit exceeded
    E6013,
    /// Recursion limit exceeded
    E6014,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Compile
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6014 => "E6014",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_compile_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
