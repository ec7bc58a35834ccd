
use builders::*;
use petal_ast::{
    common::Visibility,
    decl::{AccessorBlock, AccessorKind},
    error::EditError,
};

#[test]
fn getter_is_synthesized_from_implicit_body() {
    let mut decl = computed_decl("x", AccessorBlock::ImplicitGetter(int_body(1)));
    decl.visibility = Visibility::Public;

    let getter = decl.getter().unwrap();
    assert_eq!(getter.kind, AccessorKind::Get);
    assert_eq!(getter.body.as_ref().unwrap(), &int_body(1));
    //the synthesized entry carries the declaration's access level
    assert_eq!(getter.visibility, Some(Visibility::Public));

    assert_eq!(decl.setter(), None);
}

#[test]
fn getter_read_trims_the_explicit_entry() {
    let decl = computed_decl(
        "x",
        explicit([
            with_trivia(accessor(AccessorKind::Get, 1), "   "),
            accessor(AccessorKind::Set, 2),
        ]),
    );

    let getter = decl.getter().unwrap();
    assert_eq!(getter.kind, AccessorKind::Get);
    assert!(getter.trivia.is_empty());
    assert_eq!(getter.body.as_ref().unwrap(), &int_body(1));
}

#[test]
fn setter_read_only_exists_on_explicit_lists() {
    let explicit_decl = computed_decl(
        "x",
        explicit([accessor(AccessorKind::Get, 1), accessor(AccessorKind::Set, 2)]),
    );
    assert_eq!(
        explicit_decl.setter().unwrap().body.as_ref().unwrap(),
        &int_body(2)
    );

    let implicit_decl = computed_decl("y", AccessorBlock::ImplicitGetter(int_body(1)));
    assert_eq!(implicit_decl.setter(), None);
}

#[test]
fn set_getter_replaces_implicit_block_wholesale() {
    let mut decl = computed_decl("x", AccessorBlock::ImplicitGetter(int_body(1)));
    decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap();

    match &decl.bindings[0].accessors {
        Some(AccessorBlock::Explicit(list)) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0], accessor(AccessorKind::Get, 7));
        }
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn set_getter_substitutes_in_place_and_trims_siblings() {
    let mut decl = computed_decl(
        "x",
        explicit([
            with_trivia(accessor(AccessorKind::Get, 1), " "),
            with_trivia(accessor(AccessorKind::Observe, 3), "\t"),
            with_trivia(accessor(AccessorKind::Set, 2), "  "),
        ]),
    );

    decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap();

    match &decl.bindings[0].accessors {
        Some(AccessorBlock::Explicit(list)) => {
            //relative order survives, the siblings lost their trivia
            assert_eq!(list.len(), 3);
            assert_eq!(list[0], accessor(AccessorKind::Get, 7));
            assert_eq!(list[1], accessor(AccessorKind::Observe, 3));
            assert_eq!(list[2], accessor(AccessorKind::Set, 2));
        }
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn set_getter_is_idempotent() {
    let once = {
        let mut decl = computed_decl(
            "x",
            explicit([accessor(AccessorKind::Get, 1), accessor(AccessorKind::Set, 2)]),
        );
        decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap();
        decl
    };

    let mut twice = once.clone();
    twice.set_getter(accessor(AccessorKind::Get, 7)).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn getter_setter_round_trip_preserves_order() {
    let original = computed_decl(
        "x",
        explicit([accessor(AccessorKind::Get, 1), accessor(AccessorKind::Set, 2)]),
    );

    let getter = original.getter().unwrap();
    let setter = original.setter().unwrap();

    let mut rewritten = original.clone();
    rewritten.set_getter(getter).unwrap();
    rewritten.set_setter(Some(setter)).unwrap();

    assert_eq!(rewritten, original);
}

#[test]
fn set_setter_extends_a_lone_getter() {
    //`var x: Integer { get { 1 } }`
    let mut decl = computed_decl("x", explicit([accessor(AccessorKind::Get, 1)]));
    assert!(decl.is_computed());
    assert!(!decl.is_throwing());
    assert_eq!(decl.setter(), None);

    decl.set_setter(Some(accessor(AccessorKind::Set, 2))).unwrap();

    match &decl.bindings[0].accessors {
        Some(AccessorBlock::Explicit(list)) => {
            //get and set coexist, in that order
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].kind, AccessorKind::Get);
            assert_eq!(list[1].kind, AccessorKind::Set);
        }
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn set_setter_converts_an_implicit_getter() {
    //`var x: Integer { 1 }`
    let mut decl = computed_decl("x", AccessorBlock::ImplicitGetter(int_body(1)));
    decl.set_setter(Some(accessor(AccessorKind::Set, 2))).unwrap();

    match &decl.bindings[0].accessors {
        Some(AccessorBlock::Explicit(list)) => {
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].kind, AccessorKind::Get);
            assert_eq!(list[0].body.as_ref().unwrap(), &int_body(1));
            assert_eq!(list[1], accessor(AccessorKind::Set, 2));
        }
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn set_setter_none_removes_the_setter() {
    let mut decl = computed_decl(
        "x",
        explicit([accessor(AccessorKind::Get, 1), accessor(AccessorKind::Set, 2)]),
    );

    decl.set_setter(None).unwrap();

    match &decl.bindings[0].accessors {
        Some(AccessorBlock::Explicit(list)) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].kind, AccessorKind::Get);
        }
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn set_setter_none_on_implicit_getter_is_a_noop() {
    let mut decl = computed_decl("x", AccessorBlock::ImplicitGetter(int_body(1)));
    decl.set_setter(None).unwrap();

    assert_eq!(
        decl.bindings[0].accessors,
        Some(AccessorBlock::ImplicitGetter(int_body(1)))
    );
}

#[test]
fn writes_skip_bindings_without_accessor_blocks() {
    //`var a = 0, b: Integer { 1 }` - the edit lands on `b`
    let mut decl = decl_of(stored_binding("a", 0));
    decl.bindings.push(binding(
        "b",
        Some(AccessorBlock::ImplicitGetter(int_body(1))),
    ));

    decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap();

    assert_eq!(decl.bindings[0].accessors, None);
    match &decl.bindings[1].accessors {
        Some(AccessorBlock::Explicit(list)) => assert_eq!(list.len(), 1),
        other => panic!("expected explicit list, got {:?}", other),
    }
}

#[test]
fn writes_fail_loudly_without_any_accessor_block() {
    let mut decl = stored_decl("x", 3);

    let err = decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap_err();
    assert_eq!(err.error, EditError::NoAccessorBlock);

    let err = decl
        .set_setter(Some(accessor(AccessorKind::Set, 2)))
        .unwrap_err();
    assert_eq!(err.error, EditError::NoAccessorBlock);

    //the declaration is untouched by the failed edits
    assert_eq!(decl, stored_decl("x", 3));
}

#[test]
fn set_getter_rejects_lists_without_a_getter() {
    let mut decl = computed_decl("x", explicit([accessor(AccessorKind::Set, 2)]));

    let err = decl.set_getter(accessor(AccessorKind::Get, 7)).unwrap_err();
    assert_eq!(err.error, EditError::NoGetterToReplace);
}
