//! Mapping patterns: literal values, captures, partial matches and `**rest`.

use sift_eval::{dispatch_with, Arm, ArmList, MatchError, Pattern, Value};

use super::{show, DemoContext, DemoError};

#[derive(Clone, Copy)]
enum Command {
    MoveAtSpeed,
    Move,
    Shoot,
    Quit,
    Generic,
    Empty,
    Unknown,
}

fn key(k: &str) -> Value {
    Value::string(k)
}

pub(super) fn run(ctx: &DemoContext<'_>) -> Result<(), DemoError> {
    let (dir, speed, p) = (ctx.name("dir"), ctx.name("speed"), ctx.name("p"));
    let (action, details) = (ctx.name("action"), ctx.name("details"));
    let is = |s: &str| Pattern::literal(Value::string(s));

    let arms = ArmList::new([
        Arm::new(
            Pattern::mapping([
                (key("action"), is("move")),
                (key("direction"), Pattern::capture(dir)),
                (key("speed"), Pattern::capture(speed)),
            ]),
            Command::MoveAtSpeed,
        ),
        Arm::new(
            Pattern::mapping([
                (key("action"), is("move")),
                (key("direction"), Pattern::capture(dir)),
            ]),
            Command::Move,
        ),
        Arm::new(
            Pattern::mapping([
                (key("action"), is("shoot")),
                (key("power"), Pattern::capture(p)),
            ]),
            Command::Shoot,
        ),
        Arm::new(Pattern::mapping([(key("action"), is("quit"))]), Command::Quit),
        Arm::new(
            Pattern::mapping_with_rest([(key("action"), Pattern::capture(action))], details),
            Command::Generic,
        ),
        Arm::new(Pattern::mapping([]), Command::Empty),
        Arm::new(Pattern::Wildcard, Command::Unknown),
    ])?;

    let subjects = [
        Value::str_map([
            ("action", Value::string("move")),
            ("direction", Value::string("north")),
            ("speed", Value::int(10)),
        ]),
        Value::str_map([
            ("action", Value::string("move")),
            ("direction", Value::string("south")),
        ]),
        Value::str_map([
            ("action", Value::string("shoot")),
            ("power", Value::int(95)),
            ("target", Value::string("enemy")),
        ]),
        Value::str_map([("action", Value::string("quit"))]),
        Value::str_map([
            ("operation", Value::string("load")),
            ("file", Value::string("data.txt")),
        ]),
        Value::str_map([]),
        Value::string("move north"),
    ];
    for subject in &subjects {
        let line = dispatch_with(subject, &arms, &ctx.registry, |command, bindings| {
            Ok::<_, MatchError>(match command {
                Command::MoveAtSpeed => format!(
                    "Moving {} at speed {}",
                    show(bindings, dir)?,
                    show(bindings, speed)?
                ),
                Command::Move => format!("Moving {} (default speed)", show(bindings, dir)?),
                Command::Shoot => format!("Shooting with power {}", show(bindings, p)?),
                Command::Quit => "Quitting...".to_string(),
                Command::Generic => format!(
                    "Performing action '{}' with details: {}",
                    show(bindings, action)?,
                    show(bindings, details)?
                ),
                Command::Empty => "Empty command".to_string(),
                Command::Unknown => "Unknown command structure or not a dictionary".to_string(),
            })
        })?;
        ctx.emit(line);
    }
    Ok(())
}
