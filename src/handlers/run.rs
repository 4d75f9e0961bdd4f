//! One-shot run handler: executes a selection and renders the results panel
//! to stdout.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::printer::{render_outcome, TextPrinter};
use crate::runner::Runner;

pub struct RunHandler;

impl RunHandler {
    /// Runs one execution cycle. Failures are rendered, not returned: the
    /// result is `Err` only for I/O breakage outside the cycle itself.
    pub async fn run(
        selection: Option<&str>,
        scripts_dir: &Path,
        pretty: bool,
        color: bool,
    ) -> Result<()> {
        let cfg = Config::load();
        let mut runner = Runner::new(scripts_dir);

        // Loading indicator on stderr, only when someone is watching. The
        // no-selection path never shows it.
        let progress = selection
            .filter(|_| io::stderr().is_terminal())
            .map(|name| format!("Running {}…", name));
        if let Some(msg) = &progress {
            eprint!("{} ", msg.dimmed());
            let _ = io::stderr().flush();
        }

        let outcome = runner.execute(selection);

        // The indicator comes down on every settle path.
        if let Some(msg) = &progress {
            eprint!("\r{}\r", " ".repeat(UnicodeWidthStr::width(msg.as_str()) + 1));
            let _ = io::stderr().flush();
        }

        match outcome {
            Ok(outcome) => {
                let lines = render_outcome(&outcome, pretty);
                let header = TextPrinter {
                    color: cfg.default_color().filter(|_| color),
                };
                header.print(&lines[0]);
                for line in &lines[1..] {
                    println!("{}", line);
                }
            }
            Err(err) => {
                eprintln!("error: {}", err);
                let text = format!("Error: {}", err);
                if color {
                    println!("{}", text.red());
                } else {
                    println!("{}", text);
                }
            }
        }

        Ok(())
    }
}
