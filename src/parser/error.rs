use super::ast::OperatorName;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of line")]
    EmptyInput,

    #[error("unexpected {0}")]
    UnexpectedToken(String),

    #[error("expected ( after {0}")]
    ExpectedOpenParen(OperatorName),

    #[error("expected ,")]
    ExpectedComma,

    #[error("extra token(s): {}", .0.join(" "))]
    ExtraTokens(Vec<String>),
}

impl ParseError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::UnexpectedToken(_) => "UnexpectedToken",
            Self::ExpectedOpenParen(_) => "ExpectedOpenParen",
            Self::ExpectedComma => "ExpectedComma",
            Self::ExtraTokens(_) => "ExtraTokens",
        }
    }
}
