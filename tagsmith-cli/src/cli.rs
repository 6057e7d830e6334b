//! Command-line arguments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tagsmith::SerializerConfig;
use tagsmith::dom::BuildMode;

/// tagsmith - render JSON-described HTML documents safely
#[derive(Parser, Debug)]
#[command(name = "tagsmith")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a document
    tagsmith render page.json

    # Pretty-print with a doctype, reading from stdin
    tagsmith render --pretty --doctype -

    # Report deprecated elements and duplicate ids
    tagsmith lint page.json

    # List obsolete elements and their replacements
    tagsmith elements --deprecated
"#)]
pub struct Cli {
    /// Log more detail (-v for debug, -vv for trace); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON document to HTML
    Render(RenderArgs),
    /// Report deprecated constructs and duplicate ids
    Lint {
        /// JSON document, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// List the element catalog
    Elements {
        /// Only list obsolete elements, with their replacements
        #[arg(long)]
        deprecated: bool,
    },
}

/// Options of the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON document, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Put block-level children on their own indented lines
    #[arg(long)]
    pub pretty: bool,

    /// Indentation unit (implies --pretty)
    #[arg(long, value_name = "UNIT")]
    pub indent: Option<String>,

    /// Close void elements with " />"
    #[arg(long)]
    pub xhtml: bool,

    /// Start the output with <!DOCTYPE html>
    #[arg(long)]
    pub doctype: bool,

    /// Reject repeated attributes instead of keeping the last one
    #[arg(long)]
    pub strict: bool,

    /// Fail on documents nested deeper than N elements
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Serializer settings as JSON; flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also report lint findings on stderr
    #[arg(long)]
    pub lint: bool,
}

impl RenderArgs {
    /// Defaults, then the config file, then the flags.
    ///
    /// # Errors
    ///
    /// Fails if the config file cannot be read or parsed.
    pub fn serializer_config(&self) -> Result<SerializerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SerializerConfig::default(),
        };
        if self.pretty {
            config = config.pretty();
        }
        if let Some(indent) = &self.indent {
            config = config.with_indent(indent.as_str());
        }
        if self.xhtml {
            config = config.xhtml();
        }
        if self.doctype {
            config = config.with_doctype();
        }
        if let Some(limit) = self.max_depth {
            config = config.with_max_depth(limit);
        }
        Ok(config)
    }

    /// The duplicate attribute policy selected by `--strict`.
    #[must_use]
    pub const fn build_mode(&self) -> BuildMode {
        if self.strict {
            BuildMode::Strict
        } else {
            BuildMode::Lenient
        }
    }
}

fn load_config(path: &Path) -> Result<SerializerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use tagsmith::serializer::VoidStyle;

    use super::*;

    fn render_args(args: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(["tagsmith", "render"].iter().chain(args).copied()).unwrap();
        match cli.command {
            Command::Render(args) => args,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_render_defaults() {
        let args = render_args(&["page.json"]);
        assert_eq!(args.input, PathBuf::from("page.json"));
        assert_eq!(args.serializer_config().unwrap(), SerializerConfig::default());
        assert_eq!(args.build_mode(), BuildMode::Lenient);
    }

    #[test]
    fn test_render_flags() {
        let args = render_args(&[
            "--indent", "\t", "--xhtml", "--doctype", "--strict", "--max-depth", "64", "-",
        ]);
        let config = args.serializer_config().unwrap();
        assert!(config.pretty_print);
        assert_eq!(config.indent_unit, "\t");
        assert_eq!(config.void_style, VoidStyle::Xhtml);
        assert!(config.emit_doctype);
        assert_eq!(config.max_depth, Some(64));
        assert_eq!(args.build_mode(), BuildMode::Strict);
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = env::temp_dir().join(format!("tagsmith-cli-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "pretty_print": true, "indent_unit": "    ", "max_depth": 8 }"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let args = render_args(&["--config", &path_arg, "--max-depth", "3", "page.json"]);
        let config = args.serializer_config().unwrap();
        fs::remove_file(&path).unwrap();

        assert!(config.pretty_print);
        assert_eq!(config.indent_unit, "    ");
        assert_eq!(config.max_depth, Some(3));
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["tagsmith", "-vv", "elements", "--deprecated"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Elements { deprecated: true }));

        let cli = Cli::try_parse_from(["tagsmith", "lint", "page.json"]).unwrap();
        assert!(matches!(cli.command, Command::Lint { .. }));

        assert!(Cli::try_parse_from(["tagsmith", "render"]).is_err());
        assert!(Cli::try_parse_from(["tagsmith", "render", "--max-depth", "many", "x"]).is_err());
    }
}
