use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// The leading digit names the phase that reports the code. `E0` codes
/// come from bad tokens and `E1` codes from syntax. `E2` codes are semantic
/// problems the parser finds as it goes, and `E9` codes belong to the
/// diagnostic machinery itself.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid token in source
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Expected a pattern
    E1008,
    /// Expected a parameter clause
    E1016,

    // Semantic Errors (E2xxx)
    /// Use of undeclared type
    E2002,
    /// Use of unresolved identifier
    E2003,
    /// Pattern in a function signature lacks an explicit type
    E2005,
    /// Duplicate type declaration
    E2006,

    // Driver Errors (E9xxx)
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1008,
        ErrorCode::E1016,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E9002,
    ];

    /// Check if this is a syntax error (lexer or parser).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1008
                | ErrorCode::E1016
        )
    }

    /// Check if this is a semantic error.
    pub fn is_semantic_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2005 | ErrorCode::E2006
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Short summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid token",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1008 => "expected a pattern",
            ErrorCode::E1016 => "expected a parameter clause",
            ErrorCode::E2002 => "use of undeclared type",
            ErrorCode::E2003 => "use of unresolved identifier",
            ErrorCode::E2005 => "pattern must have an explicit type in a function signature",
            ErrorCode::E2006 => "duplicate type declaration",
            ErrorCode::E9002 => "too many errors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
