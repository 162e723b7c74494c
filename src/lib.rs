mod operator;
mod pattern;
mod rpneval;

pub use crate::operator::{token_of, Operator};
pub use crate::pattern::{build_token_pattern, escape_token, token_alternation};
pub use crate::rpneval::{apply, apply_operator, EvalError, EvalResult};
