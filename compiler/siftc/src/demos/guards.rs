//! Guarded class patterns.

use sift_eval::{dispatch_with, Arm, ArmList, GuardExpr, MatchError, Pattern, Value};

use super::{show, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Placement {
    Diagonal,
    FirstQuadrant,
    Elsewhere,
    NotAPoint,
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let point = ctx.name("Point");
    let (x, y) = (ctx.name("x"), ctx.name("y"));
    // Point(x, y)
    let shape = || Pattern::class(point, [Pattern::capture(x), Pattern::capture(y)], []);
    let positive = |name| GuardExpr::gt(GuardExpr::binding(name), GuardExpr::constant(Value::int(0)));

    let arms = ArmList::new([
        Arm::guarded(
            shape(),
            GuardExpr::eq(GuardExpr::binding(x), GuardExpr::binding(y)),
            Placement::Diagonal,
        ),
        Arm::guarded(
            shape(),
            GuardExpr::and(positive(x), positive(y)),
            Placement::FirstQuadrant,
        ),
        Arm::new(shape(), Placement::Elsewhere),
        Arm::new(Pattern::Wildcard, Placement::NotAPoint),
    ])?;

    for (px, py) in [(5, 5), (2, 8), (-1, 3), (0, 0)] {
        let subject = ctx.point(px, py);
        let line = dispatch_with(&subject, &arms, &ctx.registry, |placement, bindings| {
            let at = || -> Result<String, MatchError> {
                Ok(format!("Point ({},{})", show(bindings, x)?, show(bindings, y)?))
            };
            Ok::<_, MatchError>(match placement {
                Placement::Diagonal => format!("{} is on the diagonal y=x", at()?),
                Placement::FirstQuadrant => format!("{} is in the first quadrant", at()?),
                Placement::Elsewhere => format!("{} is somewhere else", at()?),
                Placement::NotAPoint => "Input is not a Point".to_string(),
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
