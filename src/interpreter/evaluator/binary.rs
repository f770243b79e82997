use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

impl Environment {
    /// Evaluates a binary operation between two integers.
    ///
    /// All arithmetic is checked 64-bit arithmetic: a result that does not fit
    /// is reported as `RuntimeError::Overflow` instead of wrapping. Division
    /// truncates toward zero and rejects a zero divisor with
    /// `RuntimeError::DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use labka::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Add, 3, 4, 1), Ok(7));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-3));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 1, 0, 1),
    ///            Err(RuntimeError::DivisionByZero { line: 1 }));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 1),
    ///            Err(RuntimeError::Overflow { line: 1 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                // i64::MIN / -1 is the only quotient that does not fit.
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { line })
    }
}
