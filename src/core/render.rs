//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, text

use colored::Colorize;

use crate::core::model::{Kind, ResultItem, ResultSet, Status};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            color: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Text => self.render_text(result_set),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown, failures first
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut failed = Vec::new();
        let mut passed = Vec::new();
        let mut other = Vec::new();

        for item in &result_set.items {
            match (item.kind, item.status) {
                (Kind::Check, Status::Fail) => failed.push(item),
                (Kind::Check, _) => passed.push(item),
                _ => other.push(item),
            }
        }

        if !failed.is_empty() {
            output.push_str("## Failed\n\n");
            for item in failed {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !passed.is_empty() {
            output.push_str("## Passed\n\n");
            for item in passed {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !other.is_empty() {
            output.push_str("## Notes\n\n");
            for item in other {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        let title = item
            .check
            .as_deref()
            .or(item.path.as_deref())
            .unwrap_or("readme");
        output.push_str(&format!("- **{}**", title));
        if let Some(excerpt) = &item.excerpt {
            output.push_str(&format!(": {}", excerpt));
        }
        output.push('\n');

        for violation in &item.violations {
            match violation.line {
                Some(line) => output.push_str(&format!(
                    "  - `{}` (line {}): {}\n",
                    violation.code, line, violation.message
                )),
                None => output.push_str(&format!(
                    "  - `{}`: {}\n",
                    violation.code, violation.message
                )),
            }
        }
    }

    /// Render as a terminal listing
    fn render_text(&self, result_set: &ResultSet) -> String {
        let mut lines = Vec::new();

        for item in &result_set.items {
            let marker = match item.status {
                Status::Pass => self.paint("PASS", Status::Pass),
                Status::Fail => self.paint("FAIL", Status::Fail),
                Status::Skip => self.paint("SKIP", Status::Skip),
            };
            let label = item
                .check
                .as_deref()
                .or(item.path.as_deref())
                .unwrap_or("readme");
            let mut line = format!("{} {}", marker, label);
            if let Some(excerpt) = &item.excerpt {
                line.push_str(&format!(" - {}", excerpt));
            }
            lines.push(line);

            for violation in &item.violations {
                let location = violation
                    .line
                    .map(|l| format!(":{}", l))
                    .unwrap_or_default();
                lines.push(format!(
                    "    {}{} {}",
                    violation.code, location, violation.message
                ));
            }
        }

        let checks: Vec<_> = result_set
            .items
            .iter()
            .filter(|i| i.kind == Kind::Check)
            .collect();
        if !checks.is_empty() {
            let failed = checks.iter().filter(|i| i.is_failure()).count();
            lines.push(format!(
                "\n{} checks, {} passed, {} failed",
                checks.len(),
                checks.len() - failed,
                failed
            ));
        }

        lines.join("\n")
    }

    fn paint(&self, label: &str, status: Status) -> String {
        if !self.config.color {
            return label.to_string();
        }
        match status {
            Status::Pass => label.green().bold().to_string(),
            Status::Fail => label.red().bold().to_string(),
            Status::Skip => label.yellow().to_string(),
        }
    }
}
