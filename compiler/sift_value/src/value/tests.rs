use super::*;
use pretty_assertions::assert_eq;
use sift_ir::StringInterner;

#[test]
fn test_value_truthy() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::int(1).is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::None.is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());
    assert!(!Value::map(MapValue::new()).is_truthy());
    assert!(Value::tuple(vec![Value::None]).is_truthy());
}

#[test]
fn test_repr_display() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(Value::string("north").to_string(), "'north'");
    assert_eq!(
        Value::list(vec![Value::string("banana"), Value::string("cherry")]).to_string(),
        "['banana', 'cherry']"
    );
    assert_eq!(Value::tuple(vec![Value::int(1)]).to_string(), "(1,)");
    assert_eq!(
        Value::tuple(vec![Value::int(3), Value::int(4)]).to_string(),
        "(3, 4)"
    );
    assert_eq!(
        Value::str_map([("power", Value::int(95)), ("target", Value::string("enemy"))])
            .to_string(),
        "{'power': 95, 'target': 'enemy'}"
    );
}

#[test]
fn test_display_value_unquotes_strings() {
    assert_eq!(Value::string("Hello Python").display_value(), "Hello Python");
    assert_eq!(
        Value::list(vec![Value::string("a")]).display_value(),
        "['a']"
    );
}

#[test]
fn test_display_with_interner_resolves_objects() {
    let interner = StringInterner::new();
    let point = interner.intern("Point");
    let (x, y) = (interner.intern("x"), interner.intern("y"));
    let obj = Value::object(ObjectValue::new(
        point,
        [(x, Value::int(3)), (y, Value::int(4))],
    ));

    assert_eq!(obj.display(&interner).to_string(), "Point(x=3, y=4)");
    assert_eq!(obj.type_name(), "object");
    assert_eq!(obj.type_name_with(&interner), "Point");
}

#[test]
fn test_equals_numeric_cross_type() {
    assert!(Value::int(200).equals(&Value::Float(200.0)));
    assert!(Value::Float(200.0).equals(&Value::int(200)));
    assert!(!Value::int(200).equals(&Value::Float(200.5)));
    assert!(!Value::int(1).equals(&Value::Bool(true)));
    // Strict equality keeps them apart
    assert_ne!(Value::int(200), Value::Float(200.0));
}

#[test]
fn test_equals_containers() {
    let a = Value::list(vec![Value::int(1), Value::Float(2.0)]);
    let b = Value::list(vec![Value::Float(1.0), Value::int(2)]);
    assert!(a.equals(&b));

    let t = Value::tuple(vec![Value::int(1), Value::int(2)]);
    assert!(!a.equals(&t), "list never equals tuple");

    let m1 = Value::str_map([("a", Value::int(1))]);
    let m2 = Value::str_map([("a", Value::Float(1.0))]);
    assert!(m1.equals(&m2));
}

#[test]
fn test_equals_maps_with_numeric_keys() {
    let ints = Value::map_from([(Value::int(1), Value::string("a"))]);
    let floats = Value::map_from([(Value::Float(1.0), Value::string("a"))]);
    assert!(ints.equals(&floats));
    assert!(floats.equals(&ints));

    let other = Value::map_from([(Value::Float(1.5), Value::string("a"))]);
    assert!(!ints.equals(&other));
}

#[test]
fn test_compare_int_float_is_exact() {
    use std::cmp::Ordering;

    // 2^53 + 1 has no exact f64; rounding it would make these equal
    let big = 9_007_199_254_740_993_i64;
    assert_eq!(compare_int_float(big, 9_007_199_254_740_992.0), Some(Ordering::Greater));
    assert_eq!(compare_int_float(2, 2.5), Some(Ordering::Less));
    assert_eq!(compare_int_float(-2, -2.5), Some(Ordering::Greater));
    assert_eq!(compare_int_float(-4, -4.0), Some(Ordering::Equal));
    assert_eq!(compare_int_float(i64::MAX, 9_223_372_036_854_775_808.0), Some(Ordering::Less));
    assert_eq!(compare_int_float(i64::MIN, f64::NEG_INFINITY), Some(Ordering::Greater));
    assert_eq!(compare_int_float(0, f64::NAN), None);
}

#[test]
fn test_int_float_equality_edges() {
    assert!(!Value::int(i64::MAX).equals(&Value::Float(f64::INFINITY)));
    assert!(!Value::int(0).equals(&Value::Float(f64::NAN)));
    assert!(Value::int(-4).equals(&Value::Float(-4.0)));
}

#[test]
fn test_builtin_kind() {
    assert_eq!(Value::None.builtin_kind(), Some(BuiltinKind::NoneType));
    assert_eq!(Value::string("s").builtin_kind(), Some(BuiltinKind::Str));
    assert_eq!(
        Value::map(MapValue::new()).builtin_kind(),
        Some(BuiltinKind::Dict)
    );
    assert_eq!(Value::int(1).type_name(), "int");
}

#[test]
fn test_as_sequence_only_lists_and_tuples() {
    let list = Value::list(vec![Value::int(1)]);
    let tuple = Value::tuple(vec![Value::int(1)]);
    assert_eq!(list.as_sequence().map(|(k, _)| k), Some(SequenceKind::List));
    assert_eq!(tuple.as_sequence().map(|(k, _)| k), Some(SequenceKind::Tuple));
    assert!(Value::string("abc").as_sequence().is_none());
    assert!(Value::str_map([("a", Value::int(1))]).as_sequence().is_none());
    assert!(Value::int(3).as_sequence().is_none());
}

#[test]
fn test_sequence_kind_rebuild() {
    let items = vec![Value::int(1), Value::int(2)];
    assert_eq!(
        SequenceKind::Tuple.rebuild(items.clone()),
        Value::tuple(items.clone())
    );
    assert_eq!(SequenceKind::List.rebuild(items.clone()), Value::list(items));
}

#[test]
fn test_len() {
    assert_eq!(Value::string("héllo").len(), Some(5));
    assert_eq!(Value::list(vec![Value::None; 3]).len(), Some(3));
    assert_eq!(Value::int(3).len(), None);
}

#[test]
fn test_value_as_hashmap_key() {
    use std::collections::HashMap;

    let mut map = HashMap::new();
    map.insert(Value::string("speed"), 1);
    map.insert(Value::int(2), 2);
    map.insert(Value::tuple(vec![Value::int(0), Value::int(0)]), 3);

    assert_eq!(map.get(&Value::string("speed")), Some(&1));
    assert_eq!(map.get(&Value::int(2)), Some(&2));
    assert_eq!(
        map.get(&Value::tuple(vec![Value::int(0), Value::int(0)])),
        Some(&3)
    );
    assert_eq!(map.get(&Value::Float(2.0)), None);
}
