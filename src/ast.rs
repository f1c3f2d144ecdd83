//! Abstract Syntax Tree for plottable expressions

use crate::error::Span;
use crate::functions::MathFunction;

/// Binary operators, dispatched on by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// An expression node with the source span it was parsed from
///
/// Every node exclusively owns its children; the tree is built bottom-up by
/// the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Constant number (a literal, or the reserved `e`/`pi`)
    Number(f64),

    /// The plot variable `x`
    Variable,

    /// Unary operation (negation)
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Whitelisted function applied to a single argument
    Call {
        function: MathFunction,
        argument: Box<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { span, kind }
    }

    /// Create a number literal
    pub fn number(n: f64, span: Span) -> Self {
        Expr::new(ExprKind::Number(n), span)
    }

    /// Create the plot variable
    pub fn variable(span: Span) -> Self {
        Expr::new(ExprKind::Variable, span)
    }

    /// Create a unary operation; the span covers operator and operand
    pub fn unary(op: UnaryOp, operand: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        )
    }

    /// Create a binary operation spanning both operands
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = Span::merge(left.span, right.span);
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    /// Create a function call; the span covers name and argument list
    pub fn call(function: MathFunction, argument: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Call {
                function,
                argument: Box::new(argument),
            },
            span,
        )
    }

    /// Check if expression is a constant number and return its value
    pub fn as_number(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Number of nodes in the tree, counting this one
    pub fn node_count(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable => 1,
            ExprKind::Unary { operand, .. } => 1 + operand.node_count(),
            ExprKind::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            ExprKind::Call { argument, .. } => 1 + argument.node_count(),
        }
    }
}
