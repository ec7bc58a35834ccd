/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Variable-declaration nodes, their bindings and accessor blocks.
//!
//! A [VarDecl] owns one or more [Binding]s. Each binding may carry an
//! [AccessorBlock], which is either a single implicit getter body or an
//! ordered list of labeled [Accessor] entries. The two shapes share no
//! behavior beyond classification, so they are kept as a tagged enum and
//! matched exhaustively wherever they are touched.

use petal_common::Span;
use smallvec::SmallVec;

use crate::{
    common::{Ident, Modifier, ModifierKind, TypeAnnotation, Visibility},
    expr::{Block, Expr},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///A named value slot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub span: Span,
    ///Effective access level of the declaration.
    pub visibility: Visibility,
    pub modifiers: SmallVec<[Modifier; 2]>,
    ///Declarations like `var a, b: Integer` own several bindings. All queries
    /// resolve against the first binding that matches their predicate.
    pub bindings: SmallVec<[Binding; 1]>,
}

impl VarDecl {
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifiers.iter().any(|m| m.kind == kind)
    }
}

///One pattern + initializer + accessor unit within a declaration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub span: Span,
    pub pattern: Pattern,
    pub ty: Option<TypeAnnotation>,
    pub initializer: Option<Expr>,
    pub accessors: Option<AccessorBlock>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Ident(Ident),
    Tuple(Vec<Pattern>),
    Wildcard,
}

impl Pattern {
    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Pattern::Ident(ident) => Some(ident),
            Pattern::Tuple(_) | Pattern::Wildcard => None,
        }
    }
}

///The `{ .. }` region defining how a property's value is produced or
/// intercepted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum AccessorBlock {
    ///A single unnamed body, semantically a read-only `get`.
    ImplicitGetter(Block),
    ///An ordered list of labeled accessor entries. Holds at most one entry
    /// per label.
    Explicit(SmallVec<[Accessor; 2]>),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    ///Runs after the value changed.
    Observe,
}

///Marks an accessor as suspending and/or failing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EffectSpecifiers {
    pub span: Span,
    pub asynchronous: bool,
    pub throwing: bool,
}

///One labeled entry of an explicit accessor list. A missing `body` is the
/// requirement form (`{ get set }` on an interface), which is never computed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Accessor {
    pub span: Span,
    pub kind: AccessorKind,
    pub visibility: Option<Visibility>,
    pub effects: Option<EffectSpecifiers>,
    pub body: Option<Block>,
    pub trivia: Trivia,
}

impl Accessor {
    ///Bare accessor of `kind`, spanned to its body if there is one.
    pub fn new(kind: AccessorKind, body: Option<Block>) -> Self {
        Accessor {
            span: body
                .as_ref()
                .map(|b| b.span.clone())
                .unwrap_or_else(Span::empty),
            kind,
            visibility: None,
            effects: None,
            body,
            trivia: Trivia::default(),
        }
    }

    ///Strips source formatting without altering semantics.
    pub fn trim(&mut self) {
        self.trivia = Trivia::default();
    }

    ///Trimmed copy of `self`.
    pub fn trimmed(&self) -> Self {
        let mut trimmed = self.clone();
        trimmed.trim();
        trimmed
    }
}

///Source formatting attached to an accessor. Never semantic.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trivia {
    pub leading: String,
    pub trailing: String,
}

impl Trivia {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}
