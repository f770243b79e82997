use crate::{
    ast::{Expr, FunctionDef},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Bindings, EvalResult},
            function::{builtin, min_max},
            utils::check_arity,
        },
    },
    error::RuntimeError,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// Arity has already been checked when it runs.
type BuiltinFn = fn(&[i64], usize) -> EvalResult<i64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments it takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "min" => { arity: 2, func: |args, line| min_max::min_max("min", args, line) },
    "max" => { arity: 2, func: |args, line| min_max::min_max("max", args, line) },
    "abs" => { arity: 1, func: builtin::abs },
    "pow" => { arity: 2, func: builtin::pow },
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it evaluates the arguments, verifies arity and executes the
    /// builtin. Otherwise the user function is looked up before any argument
    /// is evaluated.
    ///
    /// # Returns
    /// The function result or an error if lookup, an argument or arity fails.
    pub(crate) fn eval_function(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                line: usize,
                                bindings: Option<&Bindings>)
                                -> EvalResult<i64> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            let arg_vals = self.eval_arguments(arguments, bindings)?;
            check_arity(name, &arg_vals, builtin.arity, line)?;
            return (builtin.func)(&arg_vals, line);
        }

        let func = self.lookup_func(name, line)?.clone();
        let arg_vals = self.eval_arguments(arguments, bindings)?;

        self.call_user_defined_function(&func, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// Its parameter count must match the number of supplied arguments.
    /// Parameters are bound positionally in a fresh scope, the body is
    /// evaluated with them, and the scope is dropped on return. The body sees
    /// its own parameters and the global variables as they are now; the
    /// caller's parameters are not visible.
    ///
    /// An error raised inside the body is wrapped in
    /// `RuntimeError::InFunction` and reported on the line of the call.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - More nested calls than the environment's call depth limit.
    /// - Any error raised by the body.
    fn call_user_defined_function(&mut self,
                                  func: &FunctionDef,
                                  arg_vals: Vec<i64>,
                                  line: usize)
                                  -> EvalResult<i64> {
        let name = func.name.as_str();

        check_arity(name, &arg_vals, func.params.len(), line)?;

        if self.call_depth >= self.max_call_depth() {
            return Err(RuntimeError::CallDepthExceeded { limit: self.max_call_depth(),
                                                         line });
        }

        log::trace!("line {line}: call {name}{arg_vals:?} at depth {}", self.call_depth);

        let bindings = func.params
                           .iter()
                           .cloned()
                           .zip(arg_vals)
                           .collect::<Bindings>();

        self.call_depth += 1;
        let result = self.evaluate(&func.body, Some(&bindings));
        self.call_depth -= 1;

        result.map_err(|e| e.in_function(name, func.line, line))
    }
}
