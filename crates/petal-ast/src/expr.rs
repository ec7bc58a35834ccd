/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Expression and statement nodes. These show up as binding initializers and
//! inside accessor bodies.

use petal_common::Span;
use smallvec::SmallVec;

use crate::common::{Ident, Literal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub expr_ty: ExprTy,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ExprTy {
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        right: Box<Expr>,
        op: BinaryOp,
    },
    Ident(Ident),
    Call(Box<Call>),
    List(Vec<Expr>),
    Literal(Literal),
}

///Call to some `ident` with `args`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub span: Span,
    pub ident: Ident,
    pub args: SmallVec<[Expr; 3]>,
}

///Binding of an expression value to a new identifier
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LetStmt {
    pub span: Span,
    pub decl_name: Ident,
    pub expr: Expr,
}

///Assignment to an already existing identifier
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    pub span: Span,
    pub dst: Ident,
    pub expr: Expr,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Assign(AssignStmt),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub span: Span,
    pub stmts: SmallVec<[Stmt; 3]>,
    pub retexpr: Option<Expr>,
}

impl Block {
    ///Block that evaluates to just `expr`.
    pub fn of_expr(expr: Expr) -> Self {
        Block {
            span: expr.span.clone(),
            stmts: SmallVec::new(),
            retexpr: Some(expr),
        }
    }
}
