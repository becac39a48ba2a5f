use super::*;
use crate::errors::MatchErrorKind;
use pretty_assertions::assert_eq;
use sift_value::{ClassRegistry, StringInterner};

struct Fixture {
    interner: StringInterner,
    registry: ClassRegistry,
}

impl Fixture {
    fn new() -> Self {
        let interner = StringInterner::new();
        let point = interner.intern("Point");
        let (x, y) = (interner.intern("x"), interner.intern("y"));
        let registry = ClassRegistry::new(&interner).with_type(point, [x, y]);
        Fixture { interner, registry }
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn point(&self, x: i64, y: i64) -> Value {
        Value::object(ObjectValue::new(
            self.name("Point"),
            [(self.name("x"), Value::int(x)), (self.name("y"), Value::int(y))],
        ))
    }

    fn run(&self, pattern: &Pattern, subject: &Value) -> Option<Vec<(Name, Value)>> {
        match_pattern(pattern, subject, &self.registry)
            .unwrap()
            .into_bindings()
            .map(Bindings::into_vec)
    }
}

fn ints(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::int).collect()
}

// Literal / capture / wildcard

#[test]
fn test_literal_numeric_equality() {
    let f = Fixture::new();
    let pattern = Pattern::literal(Value::int(200));
    assert_eq!(f.run(&pattern, &Value::Float(200.0)), Some(vec![]));
    assert_eq!(f.run(&pattern, &Value::int(404)), None);
    // Bools never equal numbers, so `case 1:` does not take `True`
    assert_eq!(f.run(&Pattern::literal(Value::int(1)), &Value::Bool(true)), None);
}

#[test]
fn test_literal_map_with_numeric_keys() {
    let f = Fixture::new();
    let pattern = Pattern::literal(Value::map_from([(Value::int(1), Value::string("a"))]));
    let subject = Value::map_from([(Value::Float(1.0), Value::string("a"))]);
    assert_eq!(f.run(&pattern, &subject), Some(vec![]));
}

#[test]
fn test_capture_binds_subject() {
    let f = Fixture::new();
    let status = f.name("status");
    assert_eq!(
        f.run(&Pattern::capture(status), &Value::int(302)),
        Some(vec![(status, Value::int(302))])
    );
    assert_eq!(f.run(&Pattern::Wildcard, &Value::None), Some(vec![]));
}

// Or

#[test]
fn test_or_first_alternative_wins() {
    let f = Fixture::new();
    let (a, b) = (f.name("a"), f.name("b"));
    // [a, 0] | [0, b] against [0, 0] takes the first alternative
    let pattern = Pattern::or([
        Pattern::sequence([Pattern::capture(a), Pattern::literal(Value::int(0))]),
        Pattern::sequence([Pattern::literal(Value::int(0)), Pattern::capture(b)]),
    ]);
    assert_eq!(
        f.run(&pattern, &Value::list(ints(&[0, 0]))),
        Some(vec![(a, Value::int(0))])
    );
}

#[test]
fn test_or_failed_alternative_leaves_no_bindings() {
    let f = Fixture::new();
    let (a, b) = (f.name("a"), f.name("b"));
    let pattern = Pattern::or([
        Pattern::sequence([Pattern::capture(a), Pattern::literal(Value::int(9))]),
        Pattern::sequence([Pattern::Wildcard, Pattern::capture(b)]),
    ]);
    assert_eq!(
        f.run(&pattern, &Value::list(ints(&[1, 2]))),
        Some(vec![(b, Value::int(2))])
    );
}

#[test]
fn test_or_of_literals() {
    let f = Fixture::new();
    let pattern = Pattern::one_of([Value::int(500), Value::int(502), Value::int(503)]);
    assert!(f.run(&pattern, &Value::int(503)).is_some());
    assert!(f.run(&pattern, &Value::int(501)).is_none());
}

// Sequence

#[test]
fn test_sequence_exact_length() {
    let f = Fixture::new();
    let (x, y) = (f.name("x"), f.name("y"));
    let pattern = Pattern::sequence([Pattern::capture(x), Pattern::capture(y)]);
    assert_eq!(
        f.run(&pattern, &Value::tuple(ints(&[3, 4]))),
        Some(vec![(x, Value::int(3)), (y, Value::int(4))])
    );
    assert_eq!(f.run(&pattern, &Value::list(ints(&[3]))), None);
    assert_eq!(f.run(&pattern, &Value::list(ints(&[3, 4, 5]))), None);
}

#[test]
fn test_sequence_rejects_str_and_map() {
    let f = Fixture::new();
    let pattern = Pattern::sequence([Pattern::Wildcard, Pattern::Wildcard]);
    assert_eq!(f.run(&pattern, &Value::string("ab")), None);
    assert_eq!(
        f.run(&pattern, &Value::str_map([("a", Value::None), ("b", Value::None)])),
        None
    );
    let empty = Pattern::sequence([]);
    assert_eq!(f.run(&empty, &Value::list(vec![])), Some(vec![]));
    assert_eq!(f.run(&empty, &Value::string("")), None);
}

#[test]
fn test_star_binds_same_container_kind() {
    let f = Fixture::new();
    let (first, rest) = (f.name("first"), f.name("rest"));
    // [first, *rest]
    let pattern = Pattern::sequence_with_star([Pattern::capture(first)], 1, Some(rest));

    assert_eq!(
        f.run(&pattern, &Value::list(ints(&[1, 2, 3]))),
        Some(vec![
            (first, Value::int(1)),
            (rest, Value::list(ints(&[2, 3]))),
        ])
    );
    assert_eq!(
        f.run(&pattern, &Value::tuple(ints(&[7]))),
        Some(vec![(first, Value::int(7)), (rest, Value::tuple(vec![]))])
    );
    assert_eq!(f.run(&pattern, &Value::list(vec![])), None);
}

#[test]
fn test_star_in_front() {
    let f = Fixture::new();
    let last = f.name("last");
    // [*_, last]
    let pattern = Pattern::sequence_with_star([Pattern::capture(last)], 0, None);
    assert_eq!(
        f.run(&pattern, &Value::tuple(ints(&[10, 20, 30]))),
        Some(vec![(last, Value::int(30))])
    );
}

#[test]
fn test_star_in_middle() {
    let f = Fixture::new();
    let (a, mid, z) = (f.name("a"), f.name("mid"), f.name("z"));
    let pattern = Pattern::sequence_with_star(
        [Pattern::capture(a), Pattern::capture(z)],
        1,
        Some(mid),
    );
    assert_eq!(
        f.run(&pattern, &Value::list(ints(&[1, 2, 3, 4]))),
        Some(vec![
            (a, Value::int(1)),
            (mid, Value::list(ints(&[2, 3]))),
            (z, Value::int(4)),
        ])
    );
    assert_eq!(
        f.run(&pattern, &Value::list(ints(&[1, 4]))),
        Some(vec![
            (a, Value::int(1)),
            (mid, Value::list(vec![])),
            (z, Value::int(4)),
        ])
    );
}

#[test]
fn test_malformed_star_is_error() {
    let f = Fixture::new();
    let pattern = Pattern::sequence_with_star([], 1, None);
    let err = match_pattern(&pattern, &Value::list(vec![]), &f.registry).unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::InvalidStarPosition {
            position: 1,
            len: 0
        }
    );
}

#[test]
fn test_duplicate_capture_is_error() {
    let f = Fixture::new();
    let x = f.name("x");
    let pattern = Pattern::sequence([Pattern::capture(x), Pattern::capture(x)]);
    let err = match_pattern(&pattern, &Value::list(ints(&[1, 1])), &f.registry).unwrap_err();
    assert_eq!(err.kind, MatchErrorKind::DuplicateBinding { name: x });
}

// Mapping

#[test]
fn test_mapping_ignores_extra_keys() {
    let f = Fixture::new();
    let power = f.name("power");
    let pattern = Pattern::mapping([
        (Value::string("action"), Pattern::literal(Value::string("attack"))),
        (Value::string("power"), Pattern::capture(power)),
    ]);
    let subject = Value::str_map([
        ("action", Value::string("attack")),
        ("power", Value::int(95)),
        ("target", Value::string("enemy")),
    ]);
    assert_eq!(f.run(&pattern, &subject), Some(vec![(power, Value::int(95))]));
}

#[test]
fn test_mapping_missing_key_fails() {
    let f = Fixture::new();
    let pattern = Pattern::mapping([(Value::string("to"), Pattern::Wildcard)]);
    assert_eq!(
        f.run(&pattern, &Value::str_map([("action", Value::string("move"))])),
        None
    );
    assert_eq!(f.run(&pattern, &Value::list(vec![])), None);
}

#[test]
fn test_mapping_rest_in_subject_order() {
    let f = Fixture::new();
    let rest = f.name("rest");
    let pattern = Pattern::mapping_with_rest(
        [(Value::string("b"), Pattern::Wildcard)],
        rest,
    );
    let subject = Value::str_map([
        ("c", Value::int(3)),
        ("b", Value::int(2)),
        ("a", Value::int(1)),
    ]);
    let bindings = f.run(&pattern, &subject).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(
        bindings[0].1.to_string(),
        "{'c': 3, 'a': 1}",
        "rest keeps subject order"
    );
}

#[test]
fn test_mapping_keys_compare_numerically() {
    let f = Fixture::new();
    let (v, rest) = (f.name("v"), f.name("rest"));
    // {1: v, **rest}
    let pattern = Pattern::mapping_with_rest([(Value::int(1), Pattern::capture(v))], rest);
    let subject = Value::map_from([
        (Value::Float(1.0), Value::string("a")),
        (Value::int(2), Value::string("b")),
    ]);
    assert_eq!(
        f.run(&pattern, &subject),
        Some(vec![
            (v, Value::string("a")),
            (rest, Value::map_from([(Value::int(2), Value::string("b"))])),
        ])
    );
}

#[test]
fn test_empty_mapping_matches_any_map() {
    let f = Fixture::new();
    let pattern = Pattern::mapping([]);
    assert!(f.run(&pattern, &Value::str_map([])).is_some());
    assert!(f.run(&pattern, &Value::str_map([("k", Value::None)])).is_some());
    assert!(f.run(&pattern, &Value::string("not a map")).is_none());
}

// Class

#[test]
fn test_class_positional_uses_match_args() {
    let f = Fixture::new();
    let (point, y_name) = (f.name("Point"), f.name("y"));
    let capture_y = f.name("py");
    // Point(0, py)
    let pattern = Pattern::class(
        point,
        [Pattern::literal(Value::int(0)), Pattern::capture(capture_y)],
        [],
    );
    assert_eq!(
        f.run(&pattern, &f.point(0, 5)),
        Some(vec![(capture_y, Value::int(5))])
    );
    assert_eq!(f.run(&pattern, &f.point(1, 5)), None);

    // Point(y=0) reads the same attribute by name
    let keyword = Pattern::class(point, [], [(y_name, Pattern::literal(Value::int(0)))]);
    assert!(f.run(&keyword, &f.point(3, 0)).is_some());
    assert!(f.run(&keyword, &f.point(3, 1)).is_none());
}

#[test]
fn test_class_requires_exact_type() {
    let f = Fixture::new();
    let other = Value::object(ObjectValue::new(
        f.name("Vector"),
        [(f.name("x"), Value::int(0)), (f.name("y"), Value::int(0))],
    ));
    let pattern = Pattern::class(f.name("Point"), [], []);
    assert!(f.run(&pattern, &f.point(0, 0)).is_some());
    assert!(f.run(&pattern, &other).is_none());
    assert!(f.run(&pattern, &Value::tuple(ints(&[0, 0]))).is_none());
}

#[test]
fn test_class_too_many_positionals_fails() {
    let f = Fixture::new();
    let pattern = Pattern::class(
        f.name("Point"),
        [Pattern::Wildcard, Pattern::Wildcard, Pattern::Wildcard],
        [],
    );
    assert_eq!(f.run(&pattern, &f.point(1, 2)), None);
}

#[test]
fn test_class_without_match_args_fails_positional() {
    let f = Fixture::new();
    let line = f.name("Line");
    let subject = Value::object(ObjectValue::new(line, [(f.name("length"), Value::int(3))]));
    let positional = Pattern::class(line, [Pattern::Wildcard], []);
    let keyword = Pattern::class(line, [], [(f.name("length"), Pattern::Wildcard)]);
    assert_eq!(f.run(&positional, &subject), None);
    assert_eq!(f.run(&keyword, &subject), Some(vec![]));
}

#[test]
fn test_class_positional_and_keyword_for_same_attribute() {
    let f = Fixture::new();
    let (point, x) = (f.name("Point"), f.name("x"));
    // Point(0, x=1): the positional slot already reads `x`
    let pattern = Pattern::class(
        point,
        [Pattern::literal(Value::int(0))],
        [(x, Pattern::literal(Value::int(1)))],
    );
    let err = match_pattern(&pattern, &f.point(0, 1), &f.registry).unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::DuplicateClassAttribute {
            type_tag: point,
            attribute: x
        }
    );

    // Keyword for the attribute past the positional slots is fine
    let pattern = Pattern::class(
        point,
        [Pattern::literal(Value::int(0))],
        [(f.name("y"), Pattern::literal(Value::int(1)))],
    );
    assert_eq!(f.run(&pattern, &f.point(0, 1)), Some(vec![]));
}

#[test]
fn test_class_missing_attribute_fails() {
    let f = Fixture::new();
    let pattern = Pattern::class(f.name("Point"), [], [(f.name("z"), Pattern::Wildcard)]);
    assert_eq!(f.run(&pattern, &f.point(1, 2)), None);
}

#[test]
fn test_class_raising_attribute_propagates() {
    let f = Fixture::new();
    let sensor = f.name("Sensor");
    let reading = f.name("reading");
    let subject = Value::object(
        ObjectValue::builder(sensor)
            .raising_attr(reading, "sensor offline")
            .build(),
    );
    let pattern = Pattern::class(sensor, [], [(reading, Pattern::Wildcard)]);

    let err = match_pattern(&pattern, &subject, &f.registry).unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::HostAttribute {
            type_name: sensor,
            attribute: reading,
            message: "sensor offline".to_string(),
        }
    );
    assert_eq!(
        err.render(&f.interner),
        "error[E6104]: reading `Sensor.reading` raised: sensor offline"
    );
}

#[test]
fn test_builtin_class_binds_whole_subject() {
    let f = Fixture::new();
    let n = f.name("n");
    let pattern = Pattern::class(f.name("int"), [Pattern::capture(n)], []);
    assert_eq!(
        f.run(&pattern, &Value::int(123)),
        Some(vec![(n, Value::int(123))])
    );
    assert_eq!(f.run(&pattern, &Value::Bool(true)), None);
    assert_eq!(f.run(&pattern, &Value::Float(1.0)), None);

    let str_pattern = Pattern::class(f.name("str"), [], []);
    assert!(f.run(&str_pattern, &Value::string("hi")).is_some());
    assert!(f.run(&str_pattern, &Value::int(1)).is_none());
}

// As

#[test]
fn test_as_binds_inner_then_whole() {
    let f = Fixture::new();
    let (x, y, pair) = (f.name("x"), f.name("y"), f.name("pair"));
    let pattern = Pattern::sequence([Pattern::capture(x), Pattern::capture(y)]).named(pair);
    let subject = Value::list(ints(&[5, 5]));
    assert_eq!(
        f.run(&pattern, &subject),
        Some(vec![
            (x, Value::int(5)),
            (y, Value::int(5)),
            (pair, subject.clone()),
        ])
    );
    assert_eq!(f.run(&pattern, &Value::list(ints(&[5]))), None);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let f = Fixture::new();
    let leaf = f.name("leaf");
    let depth = 20_000;

    let mut pattern = Pattern::capture(leaf);
    let mut subject = Value::int(1);
    for _ in 0..depth {
        pattern = Pattern::sequence([pattern]);
        subject = Value::list(vec![subject]);
    }
    assert_eq!(f.run(&pattern, &subject), Some(vec![(leaf, Value::int(1))]));

    // Values drop recursively; unwind them iteratively
    while let Value::List(items) = subject {
        subject = items.first().cloned().unwrap_or(Value::None);
    }
    while let Pattern::Sequence { mut elements, .. } = pattern {
        pattern = elements.pop().unwrap_or(Pattern::Wildcard);
    }
}
