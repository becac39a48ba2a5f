//! Literal and or-of-literal arms with a wildcard default.

use sift_eval::{dispatch, Arm, ArmList, Pattern, Value};

use super::{DemoContext, DemoError};

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let status = |code: i64| Pattern::literal(Value::int(code));
    let arms = ArmList::new([
        Arm::new(status(200), "OK"),
        Arm::new(status(201), "Created"),
        Arm::new(status(400), "Bad Request"),
        Arm::new(status(404), "Not Found"),
        Arm::new(
            Pattern::one_of([500, 502, 503].map(Value::int)),
            "Server Error",
        ),
        Arm::new(Pattern::Wildcard, "Unknown status"),
    ])?;

    for code in [200, 404, 503, 302] {
        let selection = dispatch(&Value::int(code), &arms, &ctx.registry)?;
        ctx.emit(format!("Status {code}: {}", arms[selection.arm_index].action));
    }
    Ok(())
}
