//! End-to-end dispatch scenarios.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use sift_eval::{
    dispatch, match_pattern, Arm, ArmList, ClassRegistry, GuardExpr, MatchErrorKind,
    MatchOutcome, ObjectValue, Pattern, StringInterner, Value,
};

#[test]
fn or_pattern_short_circuits() {
    let interner = StringInterner::new();
    let registry = ClassRegistry::new(&interner);
    let x = interner.intern("x");
    let pattern = Pattern::or([Pattern::literal(Value::int(1)), Pattern::capture(x)]);

    assert_eq!(
        match_pattern(&pattern, &Value::int(1), &registry).unwrap(),
        MatchOutcome::Success(sift_eval::Bindings::new())
    );
    let bindings = match_pattern(&pattern, &Value::int(2), &registry)
        .unwrap()
        .into_bindings()
        .unwrap();
    assert_eq!(bindings.into_vec(), vec![(x, Value::int(2))]);
}

#[test]
fn or_pattern_never_evaluates_later_alternatives() {
    let interner = StringInterner::new();
    let registry = ClassRegistry::new(&interner);
    let sensor = interner.intern("Sensor");
    let reading = interner.intern("reading");
    let subject = Value::object(
        ObjectValue::builder(sensor)
            .raising_attr(reading, "would raise if read")
            .build(),
    );
    // The second alternative reads a raising attribute; reaching it is an error
    let pattern = Pattern::or([
        Pattern::class(sensor, [], []),
        Pattern::class(sensor, [], [(reading, Pattern::Wildcard)]),
    ]);
    assert!(match_pattern(&pattern, &subject, &registry)
        .unwrap()
        .is_success());
}

#[test]
fn class_shape_positional_and_keyword() {
    let interner = StringInterner::new();
    let (t, x, y) = (
        interner.intern("T"),
        interner.intern("x"),
        interner.intern("y"),
    );
    let registry = ClassRegistry::new(&interner).with_type(t, [x, y]);
    let subject = Value::object(ObjectValue::new(
        t,
        [(x, Value::int(0)), (y, Value::int(5))],
    ));
    let pattern = Pattern::class(
        t,
        [Pattern::literal(Value::int(0))],
        [(y, Pattern::capture(y))],
    );

    let bindings = match_pattern(&pattern, &subject, &registry)
        .unwrap()
        .into_bindings()
        .unwrap();
    assert_eq!(bindings.into_vec(), vec![(y, Value::int(5))]);
}

#[test]
fn guard_rejection_cascades() {
    let interner = StringInterner::new();
    let registry = ClassRegistry::new(&interner);
    let n = interner.intern("n");
    let arms = ArmList::new([
        Arm::guarded(
            Pattern::capture(n),
            GuardExpr::gt(GuardExpr::binding(n), GuardExpr::constant(Value::int(10))),
            'A',
        ),
        Arm::new(Pattern::Wildcard, 'B'),
    ])
    .unwrap();

    let selection = dispatch(&Value::int(3), &arms, &registry).unwrap();
    assert_eq!(selection.arm_index, 1);
    assert_eq!(arms[selection.arm_index].action, 'B');
    assert!(selection.bindings.is_empty());
}

#[test]
fn superset_arm_with_false_guard_yields_to_narrower_arm() {
    let interner = StringInterner::new();
    let registry = ClassRegistry::new(&interner);
    let (first, rest) = (interner.intern("first"), interner.intern("rest"));
    let arms = ArmList::new([
        Arm::guarded(
            Pattern::sequence_with_star([Pattern::capture(first)], 1, Some(rest)),
            GuardExpr::constant(Value::Bool(false)),
            "wide",
        ),
        Arm::new(
            Pattern::sequence([Pattern::literal(Value::int(1)), Pattern::capture(rest)]),
            "narrow",
        ),
    ])
    .unwrap();

    let subject = Value::list(vec![Value::int(1), Value::int(2)]);
    let selection = dispatch(&subject, &arms, &registry).unwrap();
    assert_eq!(selection.arm_index, 1);
    assert_eq!(selection.bindings.into_vec(), vec![(rest, Value::int(2))]);
}

#[test]
fn no_match() {
    let interner = StringInterner::new();
    let registry = ClassRegistry::new(&interner);
    let arms = ArmList::new([Arm::new(Pattern::literal(Value::int(1)), 'A')]).unwrap();

    let err = dispatch(&Value::int(2), &arms, &registry).unwrap_err();
    assert_eq!(err.kind, MatchErrorKind::NonExhaustiveMatch);
}

#[test]
fn nested_mapping_sequence_and_class() {
    let interner = StringInterner::new();
    let point = interner.intern("Point");
    let (x, y) = (interner.intern("x"), interner.intern("y"));
    let (px, tail, rest) = (
        interner.intern("px"),
        interner.intern("tail"),
        interner.intern("rest"),
    );
    let registry = ClassRegistry::new(&interner).with_type(point, [x, y]);

    // {"path": [Point(px, 0), *tail], **rest}
    let pattern = Pattern::mapping_with_rest(
        [(
            Value::string("path"),
            Pattern::sequence_with_star(
                [Pattern::class(
                    point,
                    [Pattern::capture(px), Pattern::literal(Value::int(0))],
                    [],
                )],
                1,
                Some(tail),
            ),
        )],
        rest,
    );
    let origin = Value::object(ObjectValue::new(point, [(x, Value::int(4)), (y, Value::int(0))]));
    let subject = Value::str_map([
        ("path", Value::tuple(vec![origin, Value::None])),
        ("closed", Value::Bool(true)),
    ]);

    let bindings = match_pattern(&pattern, &subject, &registry)
        .unwrap()
        .into_bindings()
        .unwrap();
    assert_eq!(
        bindings.into_vec(),
        vec![
            (px, Value::int(4)),
            (tail, Value::tuple(vec![Value::None])),
            (rest, Value::str_map([("closed", Value::Bool(true))])),
        ]
    );
}
