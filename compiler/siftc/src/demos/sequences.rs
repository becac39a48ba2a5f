//! Sequence patterns: exact length, head with star rest, star then last.

use sift_eval::{dispatch_with, Arm, ArmList, MatchError, Pattern, Value};

use super::{show, strings, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Shape {
    Empty,
    One,
    Two,
    FirstAndRest,
    Last,
    Other,
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let (item1, item2) = (ctx.name("item1"), ctx.name("item2"));
    let (rest, last_item) = (ctx.name("rest"), ctx.name("last_item"));
    let arms = ArmList::new([
        Arm::new(Pattern::sequence([]), Shape::Empty),
        Arm::new(Pattern::sequence([Pattern::capture(item1)]), Shape::One),
        Arm::new(
            Pattern::sequence([Pattern::capture(item1), Pattern::capture(item2)]),
            Shape::Two,
        ),
        // [item1, *rest]
        Arm::new(
            Pattern::sequence_with_star([Pattern::capture(item1)], 1, Some(rest)),
            Shape::FirstAndRest,
        ),
        // (*_, last_item)
        Arm::new(
            Pattern::sequence_with_star([Pattern::capture(last_item)], 0, None),
            Shape::Last,
        ),
        Arm::new(Pattern::Wildcard, Shape::Other),
    ])?;

    let fruit = ["apple", "banana", "cherry", "date"];
    let subjects = [
        Value::list(vec![]),
        Value::list(strings(&fruit[..1])),
        Value::list(strings(&fruit[..2])),
        Value::list(strings(&fruit)),
        Value::tuple(strings(&fruit)),
    ];
    for subject in &subjects {
        let line = dispatch_with(subject, &arms, &ctx.registry, |shape, bindings| {
            Ok::<_, MatchError>(match shape {
                Shape::Empty => "List is empty".to_string(),
                Shape::One => format!("List has one item: {}", show(bindings, item1)?),
                Shape::Two => format!(
                    "List has two items: {} and {}",
                    show(bindings, item1)?,
                    show(bindings, item2)?
                ),
                Shape::FirstAndRest => format!(
                    "First item: {}, remaining: {}",
                    show(bindings, item1)?,
                    show(bindings, rest)?
                ),
                Shape::Last => format!("Last item: {}", show(bindings, last_item)?),
                Shape::Other => "It's not a list or doesn't match other patterns".to_string(),
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
