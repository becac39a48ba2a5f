//! Builtin class patterns with `as` capture, and a capture fallback.

use sift_eval::{dispatch_with, Arm, ArmList, Bindings, MatchError, Pattern, Value};

use super::{show, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Kind {
    Str,
    Int,
    Other,
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let (s, i, x) = (ctx.name("s"), ctx.name("i"), ctx.name("x"));
    let arms = ArmList::new([
        Arm::new(Pattern::class(ctx.name("str"), [], []).named(s), Kind::Str),
        Arm::new(Pattern::class(ctx.name("int"), [], []).named(i), Kind::Int),
        Arm::new(Pattern::capture(x), Kind::Other),
    ])?;

    let subjects = [
        Value::string("Hello Python"),
        Value::int(123),
        Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]),
        Value::None,
    ];
    for subject in &subjects {
        let line = dispatch_with(subject, &arms, &ctx.registry, |kind, bindings: &Bindings| {
            Ok::<_, MatchError>(match kind {
                Kind::Str => format!("It's a string: '{}'", show(bindings, s)?),
                Kind::Int => format!("It's an integer: {}", show(bindings, i)?),
                Kind::Other => {
                    let value = bindings.require(x)?;
                    format!(
                        "It's something else: {} (Type: {})",
                        value.display_value(),
                        value.type_name_with(ctx.interner)
                    )
                }
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
