use crate::interpreter::evaluator::{core::EvalResult, utils::arity_mismatch};

/// Computes the minimum or maximum of two integers.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. On a tie both arguments are equal, so either is returned.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `ArityMismatch` unless `args` holds exactly two values.
///
/// # Example
/// ```
/// use labka::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3, 7], 1), Ok(3));
/// assert_eq!(min_max("max", &[3, 7], 1), Ok(7));
/// assert_eq!(min_max("max", &[-2, -9], 1), Ok(-2));
/// assert!(min_max("min", &[3], 1).is_err());
/// ```
pub fn min_max(name: &str, args: &[i64], line: usize) -> EvalResult<i64> {
    let &[left, right] = args else {
        return Err(arity_mismatch(name, args, 2, line));
    };

    let value = if name == "min" {
        std::cmp::min(left, right)
    } else {
        std::cmp::max(left, right)
    };

    Ok(value)
}
