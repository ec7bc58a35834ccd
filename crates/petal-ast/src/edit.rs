/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Accessor-block queries and rewrites on [VarDecl] nodes.
//!
//! The queries are read-only projections. The rewrites rebuild the accessor
//! list of the owning binding and swap it in as a whole, so a failed edit
//! never leaves a half-updated list behind.

use petal_common::{PetalError, Span};
use smallvec::{smallvec, SmallVec};

use crate::{
    common::{Ident, ModifierKind, TypeAnnotation},
    decl::{Accessor, AccessorBlock, AccessorKind, EffectSpecifiers, VarDecl},
    error::{EditError, EditResult},
    expr::Expr,
};

impl VarDecl {
    ///True iff any binding carries an accessor block with executable bodies.
    ///
    /// A body-less requirement list (`{ get set }` on an interface) does not
    /// count, an implicit getter always does.
    pub fn is_computed(&self) -> bool {
        self.bindings
            .iter()
            .any(|binding| match &binding.accessors {
                Some(AccessorBlock::ImplicitGetter(_)) => true,
                Some(AccessorBlock::Explicit(accessors)) => {
                    accessors.iter().any(|accessor| accessor.body.is_some())
                }
                None => false,
            })
    }

    pub fn is_stored(&self) -> bool {
        !self.is_computed()
    }

    ///True iff the declaration is a type-level member.
    pub fn is_static(&self) -> bool {
        self.has_modifier(ModifierKind::Static)
    }

    ///True iff any explicit accessor is marked throwing. Implicit getters
    /// cannot carry effect specifiers.
    pub fn is_throwing(&self) -> bool {
        self.any_effect(|effects| effects.throwing)
    }

    ///True iff any explicit accessor is marked asynchronous.
    pub fn is_async(&self) -> bool {
        self.any_effect(|effects| effects.asynchronous)
    }

    fn any_effect(&self, pred: impl Fn(&EffectSpecifiers) -> bool) -> bool {
        self.bindings
            .iter()
            .any(|binding| match &binding.accessors {
                Some(AccessorBlock::Explicit(accessors)) => accessors
                    .iter()
                    .any(|accessor| accessor.effects.as_ref().map_or(false, &pred)),
                _ => false,
            })
    }
}

impl VarDecl {
    ///Name of the first binding with a simple identifier pattern.
    ///
    /// Tuple and wildcard patterns are outside this editor's contract, a
    /// declaration made only of those is rejected.
    pub fn identifier(&self) -> EditResult<&Ident> {
        self.bindings
            .iter()
            .find_map(|binding| binding.pattern.as_ident())
            .ok_or_else(|| {
                PetalError::error_here(
                    EditError::NoIdentifierPattern,
                    self.span.clone(),
                    "only simple variable declarations can be edited",
                )
            })
    }

    ///First type annotation across the bindings, in declaration order.
    pub fn type_annotation(&self) -> Option<&TypeAnnotation> {
        self.bindings.iter().find_map(|binding| binding.ty.as_ref())
    }

    ///First initializer expression across the bindings.
    pub fn initializer_value(&self) -> Option<&Expr> {
        self.bindings
            .iter()
            .find_map(|binding| binding.initializer.as_ref())
    }

    ///Effect specifiers of the first explicit accessor entry that carries
    /// any. `None` if every accessor block is an implicit getter, or none
    /// exists.
    pub fn effect_specifiers(&self) -> Option<&EffectSpecifiers> {
        self.bindings
            .iter()
            .find_map(|binding| match &binding.accessors {
                Some(AccessorBlock::Explicit(accessors)) => accessors
                    .iter()
                    .find_map(|accessor| accessor.effects.as_ref()),
                _ => None,
            })
    }
}

impl VarDecl {
    ///The `get` accessor, first match across the bindings.
    ///
    /// An implicit getter body is normalized into a synthesized `get` entry
    /// that carries the declaration's access level, so both block shapes
    /// become one queryable form.
    pub fn getter(&self) -> Option<Accessor> {
        self.bindings
            .iter()
            .find_map(|binding| match &binding.accessors {
                Some(AccessorBlock::ImplicitGetter(body)) => {
                    let mut getter = Accessor::new(AccessorKind::Get, Some(body.clone()));
                    getter.visibility = Some(self.visibility);
                    Some(getter)
                }
                Some(AccessorBlock::Explicit(accessors)) => accessors
                    .iter()
                    .find(|accessor| accessor.kind == AccessorKind::Get)
                    .map(Accessor::trimmed),
                None => None,
            })
    }

    ///The `set` accessor, if any. Implicit getter blocks never have one.
    pub fn setter(&self) -> Option<Accessor> {
        self.bindings
            .iter()
            .find_map(|binding| match &binding.accessors {
                Some(AccessorBlock::Explicit(accessors)) => accessors
                    .iter()
                    .find(|accessor| accessor.kind == AccessorKind::Set)
                    .map(Accessor::trimmed),
                _ => None,
            })
    }

    ///Replaces the getter of the first binding that carries an accessor
    /// block.
    ///
    /// An implicit getter body is replaced wholesale by an explicit list that
    /// contains only `getter` (there was no setter to preserve). In an
    /// explicit list the `get` entry is substituted at its position and every
    /// other entry is re-trimmed.
    ///
    /// A getter cannot be removed, which is why `getter` is not optional.
    pub fn set_getter(&mut self, getter: Accessor) -> EditResult<()> {
        let decl_span = self.span.clone();
        for binding in self.bindings.iter_mut() {
            let Some(block) = binding.accessors.as_mut() else {
                continue;
            };

            match block {
                AccessorBlock::ImplicitGetter(_) => {
                    *block = AccessorBlock::Explicit(smallvec![getter]);
                }
                AccessorBlock::Explicit(accessors) => {
                    let Some(at) = accessors
                        .iter()
                        .position(|accessor| accessor.kind == AccessorKind::Get)
                    else {
                        return Err(PetalError::error_here(
                            EditError::NoGetterToReplace,
                            binding.span.clone(),
                            "this accessor list never declared a getter",
                        ));
                    };

                    let rebuilt = accessors
                        .iter()
                        .enumerate()
                        .map(|(index, accessor)| {
                            if index == at {
                                getter.clone()
                            } else {
                                accessor.trimmed()
                            }
                        })
                        .collect::<SmallVec<_>>();
                    *accessors = rebuilt;
                }
            }
            return Ok(());
        }

        Err(no_accessor_block(decl_span))
    }

    ///Replaces the setter of the first binding that carries an accessor
    /// block, or removes it when `setter` is `None`.
    ///
    /// An implicit getter block is converted into an explicit list of the
    /// synthesized getter followed by the new setter. Removing a setter from
    /// an implicit getter is a no-op, there is nothing to remove.
    pub fn set_setter(&mut self, setter: Option<Accessor>) -> EditResult<()> {
        let decl_span = self.span.clone();
        for binding in self.bindings.iter_mut() {
            let Some(block) = binding.accessors.as_mut() else {
                continue;
            };

            match block {
                AccessorBlock::ImplicitGetter(body) => {
                    let Some(new) = setter else {
                        return Ok(());
                    };
                    let getter = Accessor::new(AccessorKind::Get, Some(body.clone()));
                    *block = AccessorBlock::Explicit(smallvec![getter, new]);
                }
                AccessorBlock::Explicit(accessors) => {
                    let mut pending = setter;
                    let mut rebuilt: SmallVec<[Accessor; 2]> =
                        SmallVec::with_capacity(accessors.len());
                    for accessor in accessors.iter() {
                        if accessor.kind == AccessorKind::Set {
                            //replace, or drop the entry when no new setter
                            //was supplied
                            if let Some(new) = pending.take() {
                                rebuilt.push(new);
                            }
                        } else {
                            rebuilt.push(accessor.trimmed());
                        }
                    }
                    //a lone leftover accessor plus a still unplaced setter:
                    //keep get and set together, never a setter alone
                    if rebuilt.len() == 1 {
                        if let Some(new) = pending.take() {
                            rebuilt.push(new);
                        }
                    }
                    *accessors = rebuilt;
                }
            }
            return Ok(());
        }

        Err(no_accessor_block(decl_span))
    }
}

fn no_accessor_block(span: Span) -> PetalError<EditError> {
    PetalError::error_here(
        EditError::NoAccessorBlock,
        span,
        "no binding carries an accessor block to edit",
    )
}
