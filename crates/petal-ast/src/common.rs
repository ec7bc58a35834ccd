/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Leaf vocabulary of the declaration tree.

use std::fmt::Display;

use petal_common::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident(value.to_owned())
    }
}

///Access level of a declaration. The effective level is carried on the
/// declaration itself, accessors may narrow it individually.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    ///Type-level member, not instance-level.
    Static,
    Final,
    Override,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub span: Span,
    pub kind: ModifierKind,
}

///All builtin data types of the DSL.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataTy {
    Integer,
    Real,
    Bool,
    Text,
    Void,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Simple(DataTy),
    Named(Ident),
    ///Aggregate type in the form of a tuple
    Tuple(Vec<Self>),
}

///The `: Ty` part of a binding.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeAnnotation {
    pub span: Span,
    pub ty: Ty,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    IntegerLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    TextLiteral(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::IntegerLiteral(i) => write!(f, "{}i", i),
            Literal::FloatLiteral(fl) => write!(f, "{}f", fl),
            Literal::BoolLiteral(b) => write!(f, "{}", b),
            Literal::TextLiteral(t) => write!(f, "\"{}\"", t),
        }
    }
}
