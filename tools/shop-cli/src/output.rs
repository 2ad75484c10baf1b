//! Terminal output for the CLI.
//!
//! Human-readable lines are suppressed in `--json` mode, where commands
//! print a single JSON document on stdout and errors as JSON on stderr.

use console::{measure_text_width, pad_str, style, Alignment, StyledObject};

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    /// Warnings go to stderr so quotes can be piped.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a JSON document, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print rows under a header. Columns are sized to their widest cell
    /// and columns after the first two are right-aligned (amounts).
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .chain(std::iter::once(measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        println!("  {}", style(layout(&header, &widths)).dim());
        for row in rows {
            println!("  {}", layout(row, &widths));
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn status(&self, icon: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", icon, msg);
        }
    }
}

fn layout(cells: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let align = if i < 2 { Alignment::Left } else { Alignment::Right };
            pad_str(cell, *width, align, None).into_owned()
        })
        .collect();
    line.join("  ").trim_end().to_string()
}
