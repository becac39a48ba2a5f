//! `as` patterns, with and without a guard.

use sift_eval::{dispatch_with, Arm, ArmList, GuardExpr, MatchError, Pattern, Value};

use super::{show, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Data {
    EqualPair,
    Pair,
    Text,
    Other,
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let (x, y) = (ctx.name("x"), ctx.name("y"));
    let (pair, text) = (ctx.name("pair"), ctx.name("text"));

    let arms = ArmList::new([
        // [x, y] as pair if x == y
        Arm::guarded(
            Pattern::sequence([Pattern::capture(x), Pattern::capture(y)]).named(pair),
            GuardExpr::eq(GuardExpr::binding(x), GuardExpr::binding(y)),
            Data::EqualPair,
        ),
        // [_, _] as pair
        Arm::new(
            Pattern::sequence([Pattern::Wildcard, Pattern::Wildcard]).named(pair),
            Data::Pair,
        ),
        // str() as text
        Arm::new(Pattern::class(ctx.name("str"), [], []).named(text), Data::Text),
        Arm::new(Pattern::Wildcard, Data::Other),
    ])?;

    let ints = |ns: &[i64]| Value::list(ns.iter().copied().map(Value::int).collect());
    let subjects = [
        ints(&[10, 10]),
        ints(&[10, 20]),
        Value::string("Hello"),
        ints(&[1, 2, 3]),
    ];
    for subject in &subjects {
        let line = dispatch_with(subject, &arms, &ctx.registry, |data, bindings| {
            Ok::<_, MatchError>(match data {
                Data::EqualPair => format!("Pair with equal elements: {}", show(bindings, pair)?),
                Data::Pair => format!("Generic pair: {}", show(bindings, pair)?),
                Data::Text => format!("Text data: '{}'", show(bindings, text)?),
                Data::Other => "Other data format".to_string(),
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
