use std::collections::HashMap;

use crate::{ast::FunctionDef, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Stores the runtime session state.
///
/// This struct holds every binding made during a session: global variables
/// and user-defined functions. The two namespaces are independent, so a
/// variable and a function may share a name.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed by mutable
/// reference to evaluation (see `Environment::evaluate` and
/// `Environment::execute`). Bindings are never removed; redefining a name
/// replaces the previous binding.
#[derive(Debug, Clone)]
pub struct Environment {
    variables:      HashMap<String, i64>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when declaring functions like `def sq(x) { x * x }`.
    functions:      HashMap<String, FunctionDef>,
    /// Maximum number of user-function calls that may be active at once.
    max_call_depth: usize,
    pub(crate) call_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an empty environment with the default call depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_call_depth(DEFAULT_MAX_CALL_DEPTH)
    }

    /// Creates an empty environment with a custom call depth limit.
    ///
    /// # Example
    /// ```
    /// use labka::interpreter::environment::Environment;
    ///
    /// let env = Environment::with_max_call_depth(8);
    /// assert_eq!(env.max_call_depth(), 8);
    /// ```
    #[must_use]
    pub fn with_max_call_depth(max_call_depth: usize) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               max_call_depth,
               call_depth: 0 }
    }

    /// Binds `value` to the variable `name`, replacing any earlier binding.
    ///
    /// # Example
    /// ```
    /// use labka::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.define_var("a", 1);
    /// env.define_var("a", 2);
    ///
    /// assert_eq!(env.lookup_var("a", 1), Ok(2));
    /// ```
    pub fn define_var(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up a global variable.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` when `name` was never declared.
    pub fn lookup_var(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Stores a function definition, replacing any earlier one with the same
    /// name. The body is not evaluated.
    pub fn define_func(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Looks up a user-defined function.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedFunction` when `name` was never declared.
    ///
    /// # Example
    /// ```
    /// use labka::{error::RuntimeError, interpreter::environment::Environment};
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.lookup_func("f", 2).unwrap_err(),
    ///            RuntimeError::UndefinedFunction { name: "f".to_string(),
    ///                                              line: 2, });
    /// ```
    pub fn lookup_func(&self, name: &str, line: usize) -> EvalResult<&FunctionDef> {
        self.functions
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                             line })
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Returns the function bound to `name`, if any.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub const fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }
}
