//! tagsmith CLI
//!
//! Renders and lints HTML documents described as JSON.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tagsmith::dom::BuildMode;
use tagsmith::dom::lint::{lint, report};
use tagsmith::html::Tag;
use tagsmith::{DocumentSpec, RenderOptions, render};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, RenderArgs};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render_command(&args),
        Command::Lint { input } => lint_command(&input),
        Command::Elements { deprecated } => {
            list_elements(deprecated);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr at `warn` by default; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("failed to read stdin");
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render_command(args: &RenderArgs) -> Result<ExitCode> {
    let json = read_input(&args.input)?;
    let options = RenderOptions {
        serializer: args.serializer_config()?,
        mode: args.build_mode(),
        lint: args.lint,
    };
    let rendered = render(&json, &options).with_context(|| format!("failed to render {}", args.input.display()))?;
    let reported = report(&rendered.diagnostics);
    tracing::debug!(
        input = %args.input.display(),
        bytes = rendered.html.len(),
        findings = rendered.diagnostics.len(),
        reported,
        "rendered document"
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered.html).with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered.html).context("failed to write stdout")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print every finding; exits with failure when there is any.
fn lint_command(input: &Path) -> Result<ExitCode> {
    let json = read_input(input)?;
    let nodes = DocumentSpec::parse(&json)
        .and_then(|document| document.into_nodes(BuildMode::Lenient))
        .with_context(|| format!("failed to load {}", input.display()))?;

    let diagnostics: Vec<_> = nodes.iter().flat_map(lint).collect();
    for diagnostic in &diagnostics {
        println!("{}: {diagnostic}", "warning".yellow().bold());
    }
    if diagnostics.is_empty() {
        println!("{} {}", "ok".green().bold(), input.display());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} finding(s) in {}", diagnostics.len(), input.display());
        Ok(ExitCode::FAILURE)
    }
}

fn list_elements(deprecated_only: bool) {
    for tag in Tag::ALL {
        let descriptor = tag.descriptor();
        match descriptor.deprecation() {
            Some(deprecation) => {
                println!("{:<12} {} {}", tag.name().dimmed(), "use".dimmed(), deprecation.replacement);
            }
            None if !deprecated_only => {
                let mut kinds = Vec::new();
                if descriptor.is_void() {
                    kinds.push("void");
                }
                if descriptor.is_raw_text() {
                    kinds.push("raw text");
                }
                println!("{:<12} {}", tag.name().green(), kinds.join(", "));
            }
            None => {}
        }
    }
}
