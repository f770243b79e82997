use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::utils::is_reserved_identifier},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Parameter bindings of the user-function call currently being evaluated.
///
/// This is the call's child scope: it exists only while the body is
/// evaluated and shadows global variables with the same names.
pub type Bindings = HashMap<String, i64>;

impl Environment {
    /// Evaluates an expression and returns the resulting integer.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations, and function calls.
    /// Operands and arguments are evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `bindings`: Parameter bindings when evaluating a function body.
    ///
    /// # Example
    /// ```
    /// use labka::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define_var("a", 4);
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "a".to_string(),
    ///                                                              line: 1, }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Literal { value: 3,
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(env.evaluate(&expr, None), Ok(12));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line, bindings),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line, bindings),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line, bindings),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.eval_function_call(name, arguments, *line, bindings)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Expression statements yield their value. Declarations mutate the
    /// environment and yield nothing. A variable declaration binds only after
    /// its initializer evaluated successfully, so a failing line leaves the
    /// environment as it was.
    ///
    /// A function declaration stores the body unevaluated: names in the body
    /// other than its parameters are resolved when the function is called,
    /// not when it is declared.
    ///
    /// # Returns
    /// `Some(value)` for expression statements, `None` for declarations.
    ///
    /// # Example
    /// ```
    /// use labka::{
    ///     ast::{Expr, Statement},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let declare = Statement::VariableDeclaration { name:  "a".to_string(),
    ///                                                value: Expr::Literal { value: 2,
    ///                                                                       line:  1, },
    ///                                                line:  1, };
    /// assert_eq!(env.execute(&declare), Ok(None));
    /// assert_eq!(env.variable("a"), Some(2));
    /// ```
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Option<i64>> {
        match statement {
            Statement::Function(def) => {
                if is_reserved_identifier(&def.name) {
                    log::warn!("line {}: function '{}' is shadowed by the builtin of the same name",
                               def.line,
                               def.name);
                }
                log::debug!("line {}: defined {}/{}", def.line, def.name, def.params.len());
                self.define_func(def.clone());
                Ok(None)
            },
            Statement::VariableDeclaration { name, value, line } => {
                let value = self.evaluate(value, None)?;
                log::debug!("line {line}: {name} = {value}");
                self.define_var(name, value);
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.evaluate(expr, None).map(Some),
        }
    }
}
