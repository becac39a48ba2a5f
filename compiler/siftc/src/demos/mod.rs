//! The match-statement tutorial, expressed as arm tables.
//!
//! Each demonstration builds its [`ArmList`](sift_eval::ArmList) once, runs a
//! handful of subjects through the dispatcher and prints one line per
//! subject, the way the tutorial's functions do.

mod as_patterns;
mod commands;
mod describe;
mod guards;
mod http_status;
mod points;
mod sequences;

use sift_eval::{Bindings, ClassRegistry, DispatchError, MatchError, Name, ObjectValue, Value};
use sift_value::StringInterner;

use crate::output::Output;

/// A runnable demonstration.
pub struct Demo {
    /// Name used on the command line.
    pub name: &'static str,
    /// Section title printed as the first line.
    pub title: &'static str,
    body: fn(&DemoContext<'_>) -> Result<(), DemoError>,
}

impl Demo {
    /// Print the section header, then run the demonstration.
    pub fn run(&self, ctx: &DemoContext<'_>) -> Result<(), DemoError> {
        let _span = tracing::info_span!("demo", name = self.name).entered();
        ctx.emit(format!("--- {} ---", self.title));
        (self.body)(ctx)
    }
}

/// Every demonstration, in tutorial order.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "http-status",
        title: "Basic Match Example",
        body: http_status::run,
    },
    Demo {
        name: "describe",
        title: "Variable Capture Example",
        body: describe::run,
    },
    Demo {
        name: "sequences",
        title: "Sequence Pattern Example",
        body: sequences::run,
    },
    Demo {
        name: "commands",
        title: "Mapping Pattern Example",
        body: commands::run,
    },
    Demo {
        name: "points",
        title: "Class Pattern Example",
        body: points::run,
    },
    Demo {
        name: "guards",
        title: "Guard Example",
        body: guards::run,
    },
    Demo {
        name: "as-patterns",
        title: "AS Pattern Example",
        body: as_patterns::run,
    },
];

/// Look up a demonstration by command-line name.
pub fn find_demo(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// Failure inside a demonstration.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Match(#[from] MatchError),
}

impl From<DispatchError<MatchError>> for DemoError {
    fn from(err: DispatchError<MatchError>) -> Self {
        match err {
            DispatchError::Match(err) => DemoError::Match(err),
            DispatchError::Handler { arm_index, error } => DemoError::Match(error.in_arm(arm_index)),
        }
    }
}

impl DemoError {
    fn render(&self, interner: &StringInterner) -> String {
        match self {
            DemoError::Match(err) => err.render(interner),
        }
    }
}

/// Failure of [`run_demos`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("unknown demo `{name}` (try `siftc list`)")]
    UnknownDemo { name: String },
    #[error("demo `{demo}` failed: {message}")]
    Failed { demo: &'static str, message: String },
}

/// Run the named demonstrations in order, or all of them when `names` is
/// empty, separating sections with a blank line.
///
/// Every name is resolved before anything runs.
pub fn run_demos(names: &[String], out: &Output) -> Result<(), RunError> {
    let selected: Vec<&Demo> = if names.is_empty() {
        DEMOS.iter().collect()
    } else {
        names
            .iter()
            .map(|name| find_demo(name).ok_or_else(|| RunError::UnknownDemo { name: name.clone() }))
            .collect::<Result<_, _>>()?
    };

    let interner = StringInterner::new();
    let ctx = DemoContext::new(&interner, out);
    for (index, demo) in selected.into_iter().enumerate() {
        if index > 0 {
            ctx.emit("");
        }
        demo.run(&ctx).map_err(|err| RunError::Failed {
            demo: demo.name,
            message: err.render(&interner),
        })?;
    }
    Ok(())
}

/// Shared state for a demonstration run.
pub struct DemoContext<'a> {
    interner: &'a StringInterner,
    registry: ClassRegistry,
    out: &'a Output,
}

impl<'a> DemoContext<'a> {
    /// Create a context with the tutorial's `Point(x, y)` type registered.
    pub fn new(interner: &'a StringInterner, out: &'a Output) -> Self {
        let registry = ClassRegistry::new(interner).with_type(
            interner.intern("Point"),
            [interner.intern("x"), interner.intern("y")],
        );
        DemoContext {
            interner,
            registry,
            out,
        }
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn emit(&self, line: impl AsRef<str>) {
        self.out.println(line.as_ref());
    }

    /// `Point(x, y)`.
    fn point(&self, x: i64, y: i64) -> Value {
        Value::object(ObjectValue::new(
            self.name("Point"),
            [(self.name("x"), Value::int(x)), (self.name("y"), Value::int(y))],
        ))
    }
}

/// A bound value as an f-string would show it.
fn show(bindings: &Bindings, name: Name) -> Result<String, MatchError> {
    Ok(bindings.require(name)?.display_value())
}

/// Each string as a `Value`.
fn strings(items: &[&str]) -> Vec<Value> {
    items.iter().map(|s| Value::string(*s)).collect()
}
