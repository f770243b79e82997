use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// Negation is checked: `-i64::MIN` does not fit and is reported as
    /// `RuntimeError::Overflow`.
    ///
    /// # Example
    /// ```
    /// use labka::{ast::UnaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5, 1), Ok(-5));
    /// assert!(Environment::eval_unary(UnaryOperator::Negate, i64::MIN, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, line: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Negate => value.checked_neg().ok_or(RuntimeError::Overflow { line }),
        }
    }
}
