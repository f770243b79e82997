/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct that yields an integer: literals, variable
/// references, unary and binary arithmetic, and function calls. Each variant
/// records the session line it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function parameter by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `max(a, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use labka::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }

    /// Number of nodes on the longest path from `self` down to a leaf.
    ///
    /// Evaluation recurses once per level, so this is also how deep the
    /// evaluator descends for the expression.
    ///
    /// ## Example
    /// ```
    /// use labka::ast::{Expr, UnaryOperator};
    ///
    /// let leaf = Expr::Literal { value: 1,
    ///                            line:  1, };
    /// assert_eq!(leaf.height(), 1);
    ///
    /// let negated = Expr::UnaryOp { op:   UnaryOperator::Negate,
    ///                               expr: Box::new(leaf),
    ///                               line: 1, };
    /// assert_eq!(negated.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.height(),
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Self::FunctionCall { arguments, .. } => {
                1 + arguments.iter().map(Self::height).max().unwrap_or(0)
            },
        }
    }
}

/// Represents a user-defined function definition.
///
/// The body is kept unevaluated and is evaluated afresh on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a top-level statement.
///
/// Exactly one statement is parsed from each input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A user-defined function declaration using `def`.
    Function(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Short, human readable name of the statement kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Function(_) => "function declaration",
            Self::Expression { .. } => "expression",
            Self::VariableDeclaration { .. } => "variable declaration",
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero.
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
