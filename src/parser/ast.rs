use serde::Serialize;

use crate::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub classes: Vec<Class>,
}

impl Program {
    /// Deepest method body in the program, as measured by [`Expr::depth`].
    pub fn max_expr_depth(&self) -> usize {
        self.classes
            .iter()
            .flat_map(|class| &class.features)
            .filter_map(|feature| match feature {
                Feature::Method { body, .. } => Some(body.depth()),
                Feature::Attribute { .. } => None,
            })
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Feature {
    Attribute {
        name: String,
        declared_type: String,
    },
    Method {
        name: String,
        params: Vec<Param>,
        declared_type: String,
        body: Expr,
    },
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Feature::Attribute { name, .. } | Feature::Method { name, .. } => name,
        }
    }

    pub fn declared_type(&self) -> &str {
        match self {
            Feature::Attribute { declared_type, .. } | Feature::Method { declared_type, .. } => declared_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub declared_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinOp {
    /// `+` or `-`, the lower precedence tier.
    pub fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            _ => None,
        }
    }

    /// `*` or `/`, the higher precedence tier.
    pub fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Times => Some(BinOp::Mul),
            TokenKind::Divide => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// The symbol with a space on each side, as the source printer writes it.
    pub fn padded(self) -> &'static str {
        match self {
            BinOp::Add => " + ",
            BinOp::Sub => " - ",
            BinOp::Mul => " * ",
            BinOp::Div => " / ",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree.
///
/// Operator chains are left-deep, so a flat `1 + 1 + ... + 1` is as deep as
/// it is long. `Drop`, `PartialEq` and [`Expr::depth`] walk the tree with an
/// explicit stack and work at any depth.
#[derive(Debug, Clone, Serialize)]
pub enum Expr {
    Number(i32),
    Identifier(String),
    StringLiteral(String),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Block(Vec<Expr>),
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp { op, left: Box::new(left), right: Box::new(right) }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call { callee: callee.into(), args }
    }

    /// Height of the tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            deepest = deepest.max(level);
            match expr {
                Expr::BinaryOp { left, right, .. } => {
                    stack.push((left.as_ref(), level + 1));
                    stack.push((right.as_ref(), level + 1));
                }
                Expr::Block(exprs) | Expr::Call { args: exprs, .. } => {
                    stack.extend(exprs.iter().map(|e| (e, level + 1)));
                }
                Expr::Number(_) | Expr::Identifier(_) | Expr::StringLiteral(_) => {}
            }
        }
        deepest
    }

    /// Move every direct child into `out`, leaving `self` childless.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(left.as_mut(), Expr::Number(0)));
                out.push(std::mem::replace(right.as_mut(), Expr::Number(0)));
            }
            Expr::Block(exprs) | Expr::Call { args: exprs, .. } => out.append(exprs),
            Expr::Number(_) | Expr::Identifier(_) | Expr::StringLiteral(_) => {}
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Expr::Number(x), Expr::Number(y)) if x == y => {}
                (Expr::Identifier(x), Expr::Identifier(y)) if x == y => {}
                (Expr::StringLiteral(x), Expr::StringLiteral(y)) if x == y => {}
                (
                    Expr::BinaryOp { op: op_a, left: left_a, right: right_a },
                    Expr::BinaryOp { op: op_b, left: left_b, right: right_b },
                ) if op_a == op_b => {
                    pending.push((left_a.as_ref(), left_b.as_ref()));
                    pending.push((right_a.as_ref(), right_b.as_ref()));
                }
                (Expr::Block(xs), Expr::Block(ys)) if xs.len() == ys.len() => {
                    pending.extend(xs.iter().zip(ys));
                }
                (Expr::Call { callee: callee_a, args: xs }, Expr::Call { callee: callee_b, args: ys })
                    if callee_a == callee_b && xs.len() == ys.len() =>
                {
                    pending.extend(xs.iter().zip(ys));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}
