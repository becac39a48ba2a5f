//! Where demonstration output goes.
//!
//! The binary writes to stdout; tests capture into a buffer and compare
//! line by line. Enum dispatch keeps the call sites free of trait objects.

use parking_lot::Mutex;

/// Line sink for demonstration output.
pub enum Output {
    /// Write each line to stdout.
    Stdout,
    /// Capture lines in memory.
    Buffer(Mutex<String>),
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout
    }

    pub fn buffer() -> Self {
        Output::Buffer(Mutex::new(String::new()))
    }

    /// Emit one line.
    pub fn println(&self, line: &str) {
        match self {
            Output::Stdout => println!("{line}"),
            Output::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far. Empty for stdout.
    pub fn captured(&self) -> String {
        match self {
            Output::Stdout => String::new(),
            Output::Buffer(buf) => buf.lock().clone(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.captured().lines().map(str::to_owned).collect()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}
