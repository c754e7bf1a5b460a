mod ast;
mod error;
mod grammar;
pub mod tokenizer;

pub use ast::*;
pub use error::ParseError;
pub use grammar::{parse, ParseResult};
pub use tokenizer::{classify, tokenize, Classified, Token};
