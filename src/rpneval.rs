use crate::operator::Operator;
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Wrong number of arguments: '{operator}' takes {needed}, stack holds {found}")]
    StackUnderflow {
        operator: Operator,
        needed: usize,
        found: usize,
    },
}

/// Resolve `token` and apply it to the top of `operands`.
/// On error the stack is left untouched.
pub fn apply(token: &str, operands: &mut Vec<f64>) -> EvalResult<()> {
    let op = token.parse::<Operator>().map_err(|err| {
        log::trace!("rejected token {:?}: {}", token, err);
        err
    })?;
    apply_operator(op, operands)
}

/// Pop the operator's operands (the last one pushed is the right-hand side),
/// compute and push the result. Depth is checked before anything is popped.
pub fn apply_operator(op: Operator, operands: &mut Vec<f64>) -> EvalResult<()> {
    let needed = op.arity();
    if needed > operands.len() {
        let err = EvalError::StackUnderflow {
            operator: op,
            needed,
            found: operands.len(),
        };
        log::trace!("rejected {}: {}", op, err);
        return Err(err);
    }
    let cut = operands.len() - needed;
    let args = operands.split_off(cut);
    let result = match op.compute(&args) {
        Some(result) => result,
        // unreachable: args holds exactly op.arity() operands
        None => unreachable!("{} given {} operands", op, args.len()),
    };
    log::trace!("{} {:?} -> {}", op, args, result);
    operands.push(result);
    Ok(())
}
