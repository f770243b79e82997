use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Bindings, EvalResult},
    },
};

impl Environment {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. Parameter bindings (when evaluating a function body).
    /// 2. Global variables.
    ///
    /// If the variable is not found, an `UndefinedVariable` error is returned.
    ///
    /// # Example
    /// ```
    /// use labka::interpreter::{environment::Environment, evaluator::core::Bindings};
    ///
    /// let mut env = Environment::new();
    /// env.define_var("x", 10);
    ///
    /// let params = Bindings::from([("x".to_string(), 1)]);
    /// assert_eq!(env.eval_variable("x", 1, Some(&params)), Ok(1));
    /// assert_eq!(env.eval_variable("x", 1, None), Ok(10));
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         line: usize,
                         bindings: Option<&Bindings>)
                         -> EvalResult<i64> {
        if let Some(b) = bindings
           && let Some(value) = b.get(name)
        {
            return Ok(*value);
        }
        self.lookup_var(name, line)
    }

    /// Evaluates a unary operator applied to a subexpression.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         line: usize,
                         bindings: Option<&Bindings>)
                         -> EvalResult<i64> {
        let value = self.evaluate(expr, bindings)?;
        Self::eval_unary(op, value, line)
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is evaluated completely before the right one. The
    /// resulting integers are then combined by `Environment::eval_binary`.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize,
                          bindings: Option<&Bindings>)
                          -> EvalResult<i64> {
        let lval = self.evaluate(left, bindings)?;
        let rval = self.evaluate(right, bindings)?;

        Self::eval_binary(op, lval, rval, line)
    }

    /// Evaluates a function call expression.
    ///
    /// The callee is resolved first, builtins before user functions, so a call
    /// to an unknown function fails as such even when its arguments would
    /// fail too. Argument expressions are then evaluated left to right in the
    /// caller's scope.
    ///
    /// # Example
    /// ```
    /// use labka::{
    ///     ast::{BinaryOperator, Expr, FunctionDef},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    ///
    /// // def f(x) { x + 1 }
    /// env.define_func(FunctionDef {
    ///     name: "f".into(),
    ///     params: vec!["x".into()],
    ///     body: Expr::BinaryOp {
    ///         left: Box::new(Expr::Variable { name: "x".into(), line: 1 }),
    ///         op: BinaryOperator::Add,
    ///         right: Box::new(Expr::Literal { value: 1, line: 1 }),
    ///         line: 1,
    ///     },
    ///     line: 1,
    /// });
    ///
    /// let arg = Expr::Literal { value: 10,
    ///                           line:  2, };
    ///
    /// assert_eq!(env.eval_function_call("f", &[arg], 2, None), Ok(11));
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize,
                              bindings: Option<&Bindings>)
                              -> EvalResult<i64> {
        self.eval_function(name, arguments, line, bindings)
    }

    /// Evaluates call arguments left to right, stopping at the first failure.
    pub(crate) fn eval_arguments(&mut self,
                                 arguments: &[Expr],
                                 bindings: Option<&Bindings>)
                                 -> EvalResult<Vec<i64>> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.evaluate(expr, bindings)?);
        }

        Ok(args)
    }
}

/// Checks that a call supplies exactly `expected` arguments.
///
/// # Errors
/// `RuntimeError::ArityMismatch` naming the function and both counts.
pub fn check_arity(name: &str, args: &[i64], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        return Ok(());
    }
    Err(arity_mismatch(name, args, expected, line))
}

/// Builds the `ArityMismatch` error for a call to `name` with `args`.
#[must_use]
pub fn arity_mismatch(name: &str, args: &[i64], expected: usize, line: usize) -> RuntimeError {
    RuntimeError::ArityMismatch { name: name.to_string(),
                                  expected,
                                  found: args.len(),
                                  line }
}

/// Returns `true` when `name` is the name of a builtin function.
///
/// Builtins are resolved before user functions, so a user function with one
/// of these names can be declared but never called.
///
/// # Example
/// ```
/// use labka::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("max"));
/// assert!(!is_reserved_identifier("myfunc"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    BUILTIN_FUNCTIONS.contains(&name)
}
