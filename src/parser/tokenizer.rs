use super::ast::Value;
use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: &'a str,
}

impl<'a> Token<'a> {
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum TokenType {
    LPAR,
    RPAR,
    COMMA,
    /// Anything else: a number or a name, decided later by [`classify`].
    ATOM,
}

const LPAR: (&str, TokenType) = ("(", TokenType::LPAR);
const RPAR: (&str, TokenType) = (")", TokenType::RPAR);
const COMMA: (&str, TokenType) = (",", TokenType::COMMA);

const PUNCTUATION: [(&str, TokenType); 3] = [LPAR, RPAR, COMMA];

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(?:", alternative!($($ts),+), ")")
    }}
}

macro_rules! maybe {
    ($($ts:expr),+) => {
        concatcp!(group!($($ts),+), r"?")
    }
}

const S_TOKEN: &str = r"[(),]|[^\s(),]+";
const S_SIGN: &str = r"[-+]?";
const S_DIGITS: &str = r"[0-9](?:_?[0-9])*";
const S_EXPONENT: &str = concatcp!(r"[eE][-+]?", S_DIGITS);
const S_POINTFLOAT: &str = group!(
    concatcp!(S_DIGITS, r"\.", maybe!(S_DIGITS)),
    concatcp!(r"\.", S_DIGITS)
);
const S_FINITEFLOAT: &str = concatcp!(group!(S_POINTFLOAT, S_DIGITS), maybe!(S_EXPONENT));
const S_SPECIALFLOAT: &str = r"(?i:infinity|inf|nan)";
const S_WHOLE_INTNUMBER: &str = concatcp!("^", S_SIGN, S_DIGITS, "$");
const S_WHOLE_FLOATNUMBER: &str =
    concatcp!("^", S_SIGN, group!(S_FINITEFLOAT, S_SPECIALFLOAT), "$");

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(S_TOKEN).expect("Error compiling regex."));
static INTNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_INTNUMBER).expect("Error compiling regex."));
static FLOATNUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_FLOATNUMBER).expect("Error compiling regex."));

/// Splits a line into tokens. Parentheses and commas always stand alone,
/// everything else is separated by whitespace. Any text tokenizes.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    TOKEN
        .find_iter(line)
        .map(|m| {
            let lexeme = m.as_str();
            let typ = PUNCTUATION
                .iter()
                .find(|(punct, _)| *punct == lexeme)
                .map_or(TokenType::ATOM, |(_, typ)| *typ);
            Token { typ, lexeme }
        })
        .collect()
}

/// What a single lexeme stands for.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Classified<'a> {
    Number(Value),
    Name(&'a str),
}

/// Integer first, then float, otherwise a name. `"3"` is `Integer(3)`,
/// `"3.0"` is `Float(3.0)`.
pub fn classify(lexeme: &str) -> Classified<'_> {
    if let Some(i) = parse_int(lexeme) {
        return Classified::Number(Value::Integer(i));
    }
    if let Some(f) = parse_float(lexeme) {
        return Classified::Number(Value::Float(f));
    }
    Classified::Name(lexeme)
}

fn parse_int(lexeme: &str) -> Option<i64> {
    if !INTNUMBER.is_match(lexeme) {
        return None;
    }
    // out of range literals fall through to float parsing
    lexeme.replace('_', "").parse().ok()
}

fn parse_float(lexeme: &str) -> Option<f64> {
    if !FLOATNUMBER.is_match(lexeme) {
        return None;
    }
    lexeme.replace('_', "").parse().ok()
}
