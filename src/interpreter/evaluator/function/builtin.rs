use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::arity_mismatch},
};

/// Absolute value of one integer.
///
/// `abs(i64::MIN)` does not fit and is reported as an overflow.
///
/// # Errors
/// - `ArityMismatch` unless `args` holds exactly one value.
/// - `Overflow` for `i64::MIN`.
///
/// # Example
/// ```
/// use labka::interpreter::evaluator::function::builtin::abs;
///
/// assert_eq!(abs(&[-5], 1), Ok(5));
/// assert!(abs(&[i64::MIN], 1).is_err());
/// assert!(abs(&[], 1).is_err());
/// ```
pub fn abs(args: &[i64], line: usize) -> EvalResult<i64> {
    let &[value] = args else {
        return Err(arity_mismatch("abs", args, 1, line));
    };
    value.checked_abs().ok_or(RuntimeError::Overflow { line })
}

/// Raises `args[0]` to the power `args[1]`.
///
/// The exponent must be non-negative; there are no fractional results.
/// Bases `0`, `1` and `-1` accept any exponent, every other base overflows
/// long before the exponent leaves `u32`.
///
/// # Errors
/// - `ArityMismatch` unless `args` holds exactly two values.
/// - `InvalidArgument` for a negative exponent.
/// - `Overflow` when the result does not fit in `i64`.
///
/// # Example
/// ```
/// use labka::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(&[2, 10], 1), Ok(1024));
/// assert_eq!(pow(&[-3, 3], 1), Ok(-27));
/// assert_eq!(pow(&[7, 0], 1), Ok(1));
/// assert!(pow(&[2, -1], 1).is_err());
/// assert!(pow(&[2, 64], 1).is_err());
/// assert!(pow(&[2], 1).is_err());
/// ```
pub fn pow(args: &[i64], line: usize) -> EvalResult<i64> {
    let &[base, exponent] = args else {
        return Err(arity_mismatch("pow", args, 2, line));
    };

    if exponent < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("pow exponent must not be negative, found {exponent}"),
                                                   line });
    }

    match base {
        0 | 1 if exponent > 0 => Ok(base),
        -1 if exponent > 0 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent).ok()
                                    .and_then(|e| base.checked_pow(e))
                                    .ok_or(RuntimeError::Overflow { line }),
    }
}
