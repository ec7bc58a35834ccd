//! # Petal-AST
//!
//! Petal's declaration syntax tree, as handed to the macro expander.
//!
//! The crate models variable declarations ([decl::VarDecl]) together with
//! their bindings and accessor blocks, and implements the accessor-block
//! editor on top of them: classification (computed vs. stored, static,
//! throwing, asynchronous), extraction (identifier, type annotation,
//! initializer, effect specifiers) and the getter/setter rewrites.
//!
//! Queries are read-only projections over the tree. Rewrites rebuild the
//! accessor list of the owning binding and swap it in place, the tree itself
//! is never re-allocated.

use ahash::AHashMap;
use petal_common::PetalError;

use crate::{
    common::Ident,
    decl::VarDecl,
    error::{EditError, EditResult},
};

pub mod common;
pub mod decl;
mod edit;
pub mod error;
pub mod expr;

///Set of named declarations, the unit the macro expander works on.
#[derive(Clone, Debug, Default)]
pub struct DeclTable {
    decls: AHashMap<Ident, VarDecl>,
}

impl DeclTable {
    pub fn new() -> Self {
        DeclTable {
            decls: AHashMap::default(),
        }
    }

    ///Inserts `decl`, keyed by its extracted identifier. Rejects
    /// declarations whose name is already taken.
    pub fn insert(&mut self, decl: VarDecl) -> EditResult<()> {
        let ident = decl.identifier()?.clone();
        if self.decls.contains_key(&ident) {
            return Err(PetalError::error_here(
                EditError::IdentifierAlreadyExists {
                    ident: ident.to_string(),
                },
                decl.span.clone(),
                "a declaration with this name already exists",
            ));
        }

        self.decls.insert(ident, decl);
        Ok(())
    }

    pub fn get(&self, name: &Ident) -> Option<&VarDecl> {
        self.decls.get(name)
    }

    pub fn get_mut(&mut self, name: &Ident) -> Option<&mut VarDecl> {
        self.decls.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &VarDecl)> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
