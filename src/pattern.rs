use crate::operator::Operator;
use std::borrow::Cow;

const SEPARATOR: char = '|';

pub fn escape_token(op: Operator) -> Cow<'static, str> {
    if op.needs_escape() {
        Cow::Owned(format!("\\{}", op.token()))
    } else {
        Cow::Borrowed(op.token())
    }
}

/// All operator tokens, escaped where needed, joined as a regex alternation.
pub fn token_alternation() -> String {
    let mut alternation = String::new();
    for &op in Operator::ALL.iter() {
        alternation.push_str(&escape_token(op));
        alternation.push(SEPARATOR);
    }
    // drop the trailing separator only, never part of the last token
    if alternation.ends_with(SEPARATOR) {
        alternation.pop();
    }
    alternation
}

/// Pattern matching a single operator token as a whole word: preceded by the
/// start of input or whitespace, and followed by whitespace or the end of input.
/// The surrounding whitespace is not part of the match.
pub fn build_token_pattern() -> String {
    format!(r"(?<=^|\s)({})(?=\s|$)", token_alternation())
}
