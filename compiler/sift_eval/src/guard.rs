//! Guard expressions and their evaluation.
//!
//! A guard is a small, pure expression tree over the names an arm's
//! pattern binds. Keeping it a tree (rather than an opaque closure) lets
//! arm validation reject references to names the pattern cannot bind.

use std::cmp::Ordering;
use std::fmt;

use sift_ir::Name;
use sift_value::{compare_int_float, Value};

use crate::bindings::Bindings;
use crate::errors::{guard_type_mismatch, MatchResult};
use crate::stack::ensure_sufficient_stack;

/// Comparison operators available to guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::NotEq => ordering.is_ne(),
            CompareOp::Lt => ordering.is_lt(),
            CompareOp::LtEq => ordering.is_le(),
            CompareOp::Gt => ordering.is_gt(),
            CompareOp::GtEq => ordering.is_ge(),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Guard expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardExpr {
    Const(Value),
    /// Value of a bound name.
    Binding(Name),
    Compare {
        op: CompareOp,
        left: Box<GuardExpr>,
        right: Box<GuardExpr>,
    },
    /// Short-circuit conjunction.
    And(Box<GuardExpr>, Box<GuardExpr>),
    /// Short-circuit disjunction.
    Or(Box<GuardExpr>, Box<GuardExpr>),
    Not(Box<GuardExpr>),
    /// Length of a str, list, tuple or map.
    Len(Box<GuardExpr>),
}

impl GuardExpr {
    pub fn constant(value: Value) -> Self {
        GuardExpr::Const(value)
    }

    pub fn binding(name: Name) -> Self {
        GuardExpr::Binding(name)
    }

    pub fn compare(op: CompareOp, left: GuardExpr, right: GuardExpr) -> Self {
        GuardExpr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn eq(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::Eq, left, right)
    }

    pub fn ne(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::NotEq, left, right)
    }

    pub fn lt(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::Lt, left, right)
    }

    pub fn le(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::LtEq, left, right)
    }

    pub fn gt(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::Gt, left, right)
    }

    pub fn ge(left: GuardExpr, right: GuardExpr) -> Self {
        Self::compare(CompareOp::GtEq, left, right)
    }

    pub fn and(left: GuardExpr, right: GuardExpr) -> Self {
        GuardExpr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: GuardExpr, right: GuardExpr) -> Self {
        GuardExpr::Or(Box::new(left), Box::new(right))
    }

    pub fn not(inner: GuardExpr) -> Self {
        GuardExpr::Not(Box::new(inner))
    }

    pub fn len(inner: GuardExpr) -> Self {
        GuardExpr::Len(Box::new(inner))
    }

    /// Every name the guard reads, in first-occurrence order.
    pub fn referenced_names(&self) -> Vec<Name> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, out: &mut Vec<Name>) {
        ensure_sufficient_stack(|| match self {
            GuardExpr::Const(_) => {}
            GuardExpr::Binding(name) => {
                if !out.contains(name) {
                    out.push(*name);
                }
            }
            GuardExpr::Compare { left, right, .. }
            | GuardExpr::And(left, right)
            | GuardExpr::Or(left, right) => {
                left.collect_names(out);
                right.collect_names(out);
            }
            GuardExpr::Not(inner) | GuardExpr::Len(inner) => inner.collect_names(out),
        });
    }
}

/// Evaluate a guard against the bindings of a successful match.
///
/// The result is the truthiness of the expression's value.
///
/// # Errors
///
/// - `UnboundGuardReference` if the guard reads a name that is not bound.
/// - `GuardTypeMismatch` for an ordering comparison or `len` on operands
///   that do not support it.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate_guard(guard: &GuardExpr, bindings: &Bindings) -> MatchResult<bool> {
    eval(guard, bindings).map(|value| value.is_truthy())
}

fn eval(expr: &GuardExpr, bindings: &Bindings) -> MatchResult<Value> {
    ensure_sufficient_stack(|| match expr {
        GuardExpr::Const(value) => Ok(value.clone()),
        GuardExpr::Binding(name) => bindings.require(*name).cloned(),
        GuardExpr::Compare { op, left, right } => {
            let left = eval(left, bindings)?;
            let right = eval(right, bindings)?;
            compare(*op, &left, &right).map(Value::Bool)
        }
        GuardExpr::And(left, right) => {
            if !eval(left, bindings)?.is_truthy() {
                return Ok(Value::Bool(false));
            }
            Ok(Value::Bool(eval(right, bindings)?.is_truthy()))
        }
        GuardExpr::Or(left, right) => {
            if eval(left, bindings)?.is_truthy() {
                return Ok(Value::Bool(true));
            }
            Ok(Value::Bool(eval(right, bindings)?.is_truthy()))
        }
        GuardExpr::Not(inner) => Ok(Value::Bool(!eval(inner, bindings)?.is_truthy())),
        GuardExpr::Len(inner) => {
            let value = eval(inner, bindings)?;
            let len = value
                .len()
                .ok_or_else(|| guard_type_mismatch("len", &[&value]))?;
            Ok(Value::int(i64::try_from(len).unwrap_or(i64::MAX)))
        }
    })
}

fn compare(op: CompareOp, left: &Value, right: &Value) -> MatchResult<bool> {
    match op {
        CompareOp::Eq => Ok(left.equals(right)),
        CompareOp::NotEq => Ok(!left.equals(right)),
        _ => match order(left, right) {
            Some(Comparable::Ordered(ordering)) => Ok(op.holds(ordering)),
            // NaN compares false with everything
            Some(Comparable::Unordered) => Ok(false),
            None => Err(guard_type_mismatch(op.symbol(), &[left, right])),
        },
    }
}

enum Comparable {
    Ordered(Ordering),
    Unordered,
}

/// Ordering between two values, or `None` if the pair is not orderable.
fn order(left: &Value, right: &Value) -> Option<Comparable> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
        (Value::Str(a), Value::Str(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => return None,
    };
    Some(ordering.map_or(Comparable::Unordered, Comparable::Ordered))
}
