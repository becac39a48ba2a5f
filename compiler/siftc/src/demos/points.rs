//! Class patterns on a registered `Point(x, y)`: positional and keyword forms.

use sift_eval::{dispatch_with, Arm, ArmList, MatchError, Pattern, Value};

use super::{show, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Location {
    Origin,
    YAxis,
    XAxis,
    Elsewhere,
    NotAPoint,
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let point = ctx.name("Point");
    let (x, y) = (ctx.name("x"), ctx.name("y"));
    let (x_pos, y_pos) = (ctx.name("x_pos"), ctx.name("y_pos"));
    let zero = || Pattern::literal(Value::int(0));

    let arms = ArmList::new([
        // Point(0, 0)
        Arm::new(Pattern::class(point, [zero(), zero()], []), Location::Origin),
        // Point(x=0, y=y_pos)
        Arm::new(
            Pattern::class(point, [], [(x, zero()), (y, Pattern::capture(y_pos))]),
            Location::YAxis,
        ),
        // Point(x=x_pos, y=0)
        Arm::new(
            Pattern::class(point, [], [(x, Pattern::capture(x_pos)), (y, zero())]),
            Location::XAxis,
        ),
        // Point(x=x_pos, y=y_pos)
        Arm::new(
            Pattern::class(
                point,
                [],
                [(x, Pattern::capture(x_pos)), (y, Pattern::capture(y_pos))],
            ),
            Location::Elsewhere,
        ),
        Arm::new(Pattern::Wildcard, Location::NotAPoint),
    ])?;

    let subjects = [
        ctx.point(0, 0),
        ctx.point(0, 5),
        ctx.point(10, 0),
        ctx.point(3, 4),
        Value::tuple(vec![Value::int(3), Value::int(4)]),
    ];
    for subject in &subjects {
        let line = dispatch_with(subject, &arms, &ctx.registry, |location, bindings| {
            Ok::<_, MatchError>(match location {
                Location::Origin => "The point is at the Origin".to_string(),
                Location::YAxis => {
                    format!("The point is on the Y-axis at y={}", show(bindings, y_pos)?)
                }
                Location::XAxis => {
                    format!("The point is on the X-axis at x={}", show(bindings, x_pos)?)
                }
                Location::Elsewhere => format!(
                    "The point is at ({}, {})",
                    show(bindings, x_pos)?,
                    show(bindings, y_pos)?
                ),
                Location::NotAPoint => "Not a Point object or doesn't match".to_string(),
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
