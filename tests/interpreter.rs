//! Stepping scenarios for the single-step interpreter.
//!
//! Covers value discard, plain grounded reduction, the drop policy for
//! non-interpretable expressions, bottom-up reduction of compound
//! expressions, and the error surfaces of `interpret_step`.

mod common;

use atomspace::grounded::{AddOp, MulOp};
use atomspace::{Atom, GroundingSpace, SpaceError, E, S, V};
use common::{int, FailOp, ForeignSpace, SpreadOp};

#[test]
fn test_values_are_discarded_one_per_step() {
    let mut space = GroundingSpace::from_atoms(vec![S("A"), int(1), V("x")]);
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[S("A"), int(1)]);
    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[S("A")]);
    space.interpret_step(&kb).unwrap();
    assert!(space.is_empty());

    // Stepping an empty space stays a no-op.
    space.interpret_step(&kb).unwrap();
    assert!(space.is_empty());
}

#[test]
fn test_plain_grounded_reduction() {
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(AddOp), int(2), int(3)]));
    let kb = GroundingSpace::new();
    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[int(5)]);
}

#[test]
fn test_reduction_below_other_atoms_leaves_them_alone() {
    let mut space = GroundingSpace::from_atoms(vec![S("keep")]);
    space.add(E([Atom::gnd(MulOp), int(6), int(7)]));
    let kb = GroundingSpace::new();
    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[S("keep"), int(42)]);
}

#[test]
fn test_non_interpretable_expression_is_dropped() {
    let mut space = GroundingSpace::new();
    space.add(E([S("foo"), int(1), int(2)]));
    let kb = GroundingSpace::new();
    space.interpret_step(&kb).unwrap();
    assert_eq!(space.to_string(), "<>");
}

#[test]
fn test_grounded_expression_with_variable_is_dropped() {
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(AddOp), int(1), V("x")]));
    let kb = GroundingSpace::new();
    space.interpret_step(&kb).unwrap();
    assert!(space.is_empty());
}

#[test]
fn test_nested_reduction_step_by_step() {
    let mut space = GroundingSpace::new();
    space.add(E([
        Atom::gnd(AddOp),
        E([Atom::gnd(AddOp), int(1), int(2)]),
        int(3),
    ]));
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap();
    assert_eq!(space.to_string(), "<((simplify (+ (+ 1 2) 3)))>");

    space.interpret_step(&kb).unwrap();
    assert_eq!(space.to_string(), "<((simplify (+ 3 3)))>");

    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[int(6)]);
}

#[test]
fn test_compound_with_non_interpretable_root_survives_simplification() {
    // The inner expression reduces, the outer one has a symbol operator and
    // comes back unchanged, then gets dropped as non-interpretable.
    let mut space = GroundingSpace::new();
    space.add(E([S("foo"), E([Atom::gnd(AddOp), int(1), int(2)])]));
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap(); // wrap in simplifier
    space.interpret_step(&kb).unwrap(); // reduce (+ 1 2)
    space.interpret_step(&kb).unwrap(); // root declines, (foo 3) lands on the stack
    assert_eq!(space.content(), &[E([S("foo"), int(3)])]);

    space.interpret_step(&kb).unwrap(); // non-interpretable, dropped
    assert!(space.is_empty());
}

#[test]
fn test_values_on_top_are_discarded_while_stepping_continues() {
    // Two pending expressions: the top one reduces first; its value is then
    // discarded when stepping continues, so callers capture results between
    // steps.
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(AddOp), int(1), int(2)]));
    space.add(E([
        Atom::gnd(MulOp),
        E([Atom::gnd(AddOp), int(2), int(3)]),
        int(10),
    ]));
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap(); // wrap the compound in a simplifier
    space.interpret_step(&kb).unwrap(); // reduce (+ 2 3)
    space.interpret_step(&kb).unwrap(); // reduce (* 5 10)
    assert_eq!(
        space.content(),
        &[E([Atom::gnd(AddOp), int(1), int(2)]), int(50)]
    );

    space.interpret_step(&kb).unwrap(); // 50 is a value: popped and discarded
    assert_eq!(space.content(), &[E([Atom::gnd(AddOp), int(1), int(2)])]);

    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[int(3)]);
}

#[test]
fn test_foreign_kb_is_rejected() {
    let mut space = GroundingSpace::from_atoms(vec![S("A")]);
    let err = space.interpret_step(&ForeignSpace).unwrap_err();
    assert!(matches!(err, SpaceError::InvalidArgument(_)));
    // The step did not run: the atom is still there.
    assert_eq!(space.content(), &[S("A")]);
}

#[test]
fn test_grounded_failure_propagates() {
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(FailOp), int(1)]));
    let kb = GroundingSpace::new();
    let err = space.interpret_step(&kb).unwrap_err();
    assert_eq!(err, SpaceError::User("boom".into()));
    // No rollback: the popped atom is gone.
    assert!(space.is_empty());
}

#[test]
fn test_multi_atom_result_is_allowed_at_top_level() {
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(SpreadOp), S("a"), S("b")]));
    let kb = GroundingSpace::new();
    space.interpret_step(&kb).unwrap();
    assert_eq!(space.content(), &[S("a"), S("b")]);
}

#[test]
fn test_multi_atom_result_in_nested_position_is_rejected() {
    let mut space = GroundingSpace::new();
    space.add(E([
        Atom::gnd(AddOp),
        E([Atom::gnd(SpreadOp), S("a"), S("b")]),
        int(3),
    ]));
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap(); // wrap in simplifier
    let err = space.interpret_step(&kb).unwrap_err();
    assert!(matches!(err, SpaceError::NotImplemented(_)));
}

#[test]
fn test_zero_atom_result_in_nested_position_is_rejected() {
    let mut space = GroundingSpace::new();
    space.add(E([Atom::gnd(AddOp), E([Atom::gnd(SpreadOp)]), int(3)]));
    let kb = GroundingSpace::new();

    space.interpret_step(&kb).unwrap();
    let err = space.interpret_step(&kb).unwrap_err();
    assert!(matches!(err, SpaceError::NotImplemented(_)));
}
