//! Rendering of keyword lists
//!
//! The TypeScript rendering is consumed by hand-written code downstream, so its
//! framing is fixed: a named `export const` declaration, one single-quoted
//! element per line with a trailing comma, and the closing bracket on its own
//! line.
//!
//! ```text
//! export const KEYWORDS = [
//!   'select',
//!   'from',
//! ]
//! ```

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Name of the generated list when none is configured
pub const DEFAULT_LIST_NAME: &str = "KEYWORDS";

/// Output syntax for the generated list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `export const NAME = [ ... ]`
    #[default]
    #[serde(alias = "ts")]
    Typescript,
    /// Pretty-printed JSON array of strings
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Typescript => "typescript",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typescript" | "ts" => Ok(OutputFormat::Typescript),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{}' (expected 'typescript' or 'json')",
                other
            )),
        }
    }
}

/// Knobs for [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub list_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            list_name: DEFAULT_LIST_NAME.to_string(),
        }
    }
}

/// Render keywords in the configured format
pub fn render(keywords: &[String], options: &RenderOptions) -> Result<String, serde_json::Error> {
    match options.format {
        OutputFormat::Typescript => Ok(render_typescript(keywords, &options.list_name)),
        OutputFormat::Json => render_json(keywords),
    }
}

/// Render keywords as an exported TypeScript array
pub fn render_typescript(keywords: &[String], list_name: &str) -> String {
    let mut out = format!("export const {} = [\n", list_name);
    for keyword in keywords {
        out.push_str("  '");
        out.push_str(keyword);
        out.push_str("',\n");
    }
    out.push_str("]\n");
    out
}

/// Render keywords as a JSON array
pub fn render_json(keywords: &[String]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(keywords)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_typescript_framing() {
        let rendered = render_typescript(&words(&["select", "from", "group by"]), "KEYWORDS");
        assert_eq!(
            rendered,
            "export const KEYWORDS = [\n  'select',\n  'from',\n  'group by',\n]\n"
        );
    }

    #[test]
    fn test_typescript_empty() {
        assert_eq!(
            render_typescript(&[], DEFAULT_LIST_NAME),
            "export const KEYWORDS = [\n]\n"
        );
    }

    #[test]
    fn test_typescript_custom_name() {
        let rendered = render_typescript(&words(&["a"]), "SQL_KEYWORDS");
        assert!(rendered.starts_with("export const SQL_KEYWORDS = [\n"));
    }

    #[test]
    fn test_json() {
        let rendered = render_json(&words(&["a", "a"])).unwrap();
        assert_eq!(rendered, "[\n  \"a\",\n  \"a\"\n]\n");
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            ..RenderOptions::default()
        };
        assert_eq!(render(&words(&["x"]), &options).unwrap(), "[\n  \"x\"\n]\n");
        assert_eq!(
            render(&words(&["x"]), &RenderOptions::default()).unwrap(),
            "export const KEYWORDS = [\n  'x',\n]\n"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("typescript".parse(), Ok(OutputFormat::Typescript));
        assert_eq!("ts".parse(), Ok(OutputFormat::Typescript));
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
