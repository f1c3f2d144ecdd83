// Display formatting for AST - produces the normalized formula text
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e10 {
                    // Display as integer if no fractional part
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }

            ExprKind::Variable => write!(f, "x"),

            ExprKind::Call { function, argument } => {
                write!(f, "{}({})", function.name(), argument)
            }

            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            } => {
                // Parenthesize sums so -(x + 1) does not flatten to -x + 1
                match operand.kind {
                    ExprKind::Binary {
                        op: BinaryOp::Add | BinaryOp::Sub,
                        ..
                    } => write!(f, "-({})", operand),
                    _ => write!(f, "-{}", operand),
                }
            }

            ExprKind::Binary { op, left, right } => match op {
                BinaryOp::Add => write!(f, "{} + {}", left, right),

                BinaryOp::Sub => {
                    // Parenthesize RHS when it's an addition or subtraction to
                    // preserve the grouping: `a - (b + c)`, not `a - b + c`
                    let right_str = match right.kind {
                        ExprKind::Binary {
                            op: BinaryOp::Add | BinaryOp::Sub,
                            ..
                        } => format!("({})", right),
                        _ => format!("{}", right),
                    };
                    write!(f, "{} - {}", left, right_str)
                }

                BinaryOp::Mul => write!(
                    f,
                    "{} * {}",
                    format_mul_operand(left),
                    format_mul_operand(right)
                ),

                BinaryOp::Div => {
                    let formatted_num = match left.kind {
                        ExprKind::Binary {
                            op: BinaryOp::Add | BinaryOp::Sub,
                            ..
                        } => format!("({})", left),
                        _ => format!("{}", left),
                    };
                    // Parenthesize the denominator unless it is atomic enough
                    let formatted_denom = match right.kind {
                        ExprKind::Number(_)
                        | ExprKind::Variable
                        | ExprKind::Call { .. }
                        | ExprKind::Binary {
                            op: BinaryOp::Pow, ..
                        } => format!("{}", right),
                        _ => format!("({})", right),
                    };
                    write!(f, "{} / {}", formatted_num, formatted_denom)
                }

                BinaryOp::Pow => {
                    // (C * R)^2 must not display as C * R^2
                    let formatted_base = match left.kind {
                        ExprKind::Number(_) | ExprKind::Variable | ExprKind::Call { .. } => {
                            format!("{}", left)
                        }
                        _ => format!("({})", left),
                    };
                    let formatted_exp = match right.kind {
                        ExprKind::Number(_) | ExprKind::Variable => format!("{}", right),
                        _ => format!("({})", right),
                    };
                    write!(f, "{}^{}", formatted_base, formatted_exp)
                }
            },
        }
    }
}

/// Format operand for multiplication to minimize parentheses
fn format_mul_operand(expr: &Expr) -> String {
    match expr.kind {
        ExprKind::Binary {
            op: BinaryOp::Add | BinaryOp::Sub,
            ..
        } => format!("({})", expr),
        _ => format!("{}", expr),
    }
}
