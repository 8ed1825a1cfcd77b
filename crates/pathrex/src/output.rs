use crate::runner::PathOutcome;
use pathrex_match::Matcher;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_regex(&mut self, matcher: &Matcher) -> io::Result<()> {
        self.set_bold();
        write!(self.stdout, "regex:")?;
        self.reset();
        writeln!(self.stdout, " {}", matcher.regex())?;

        self.set_bold();
        write!(self.stdout, "keys:")?;
        self.reset();
        if matcher.keys().is_empty() {
            self.set_dim();
            writeln!(self.stdout, " (none)")?;
            self.reset();
        } else {
            writeln!(self.stdout, " {}", matcher.keys().join(", "))?;
        }
        Ok(())
    }

    pub fn print_outcome(&mut self, outcome: &PathOutcome) -> io::Result<()> {
        if outcome.result.matched {
            self.set_color(Color::Green);
            write!(self.stdout, "✓")?;
        } else {
            self.set_color(Color::Red);
            write!(self.stdout, "✗")?;
        }
        self.reset();
        write!(self.stdout, " {}", outcome.path)?;

        for (key, value) in outcome.sorted_params() {
            self.set_dim();
            write!(self.stdout, " {}=", key)?;
            self.reset();
            write!(self.stdout, "{:?}", value)?;
        }
        writeln!(self.stdout)
    }

    pub fn print_json(&mut self, outcome: &PathOutcome) -> io::Result<()> {
        writeln!(self.stdout, "{}", outcome_json(outcome))
    }

    pub fn print_summary(&mut self, outcomes: &[PathOutcome]) -> io::Result<()> {
        let matched = outcomes.iter().filter(|o| o.result.matched).count();
        let total = outcomes.len();

        writeln!(self.stdout)?;
        if matched == total {
            self.set_color(Color::Green);
        } else {
            self.set_color(Color::Red);
        }
        write!(self.stdout, "{}/{}", matched, total)?;
        self.reset();
        writeln!(self.stdout, " paths matched")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

pub fn outcome_json(outcome: &PathOutcome) -> serde_json::Value {
    serde_json::json!({
        "path": outcome.path,
        "matched": outcome.result.matched,
        "params": outcome.result.params,
    })
}
