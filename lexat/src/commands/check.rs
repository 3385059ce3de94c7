//! Check command implementation.
//!
//! Scans each input with a diagnostic handler attached and reports every
//! lexical error with the offending source line underlined.

use std::path::{Path, PathBuf};

use lexa_scan::Scanner;
use lexa_util::{Diagnostic, Handler};
use rayon::prelude::*;
use tracing::debug;

use crate::commands::common::{display_name, read_input, snippet_for};
use crate::commands::Command;
use crate::config::Config;
use crate::error::{LexatError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// What checking one input found.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Input name used in rendered diagnostics.
    pub path: String,
    /// Tokens scanned before end of input.
    pub tokens: usize,
    /// Diagnostics in input order, each with a snippet.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Each diagnostic rendered against this input's name.
    pub fn render(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.render(&self.path)).collect()
    }
}

/// Check command handler.
pub struct CheckCommand<'c> {
    args: CheckArgs,
    config: &'c Config,
}

impl<'c> CheckCommand<'c> {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: &'c Config) -> Self {
        Self { args, config }
    }

    /// Check every input and return the reports in argument order.
    pub fn collect(&self) -> Result<Vec<FileReport>> {
        self.args
            .files
            .par_iter()
            .map(|path| check_file(path, self.config))
            .collect()
    }
}

impl Command for CheckCommand<'_> {
    fn name(&self) -> &'static str {
        "check"
    }

    fn execute(&self) -> Result<()> {
        let reports = self.collect()?;

        let mut errors = 0;
        let mut failed = 0;
        for report in &reports {
            for rendered in report.render() {
                eprintln!("{}", rendered);
            }
            let count = report.error_count();
            if count > 0 {
                errors += count;
                failed += 1;
            } else if self.args.verbose {
                eprintln!("✅ {}: {} token(s)", report.path, report.tokens);
            }
        }

        if errors > 0 {
            return Err(LexatError::LexicalErrors {
                errors,
                files: failed,
            });
        }
        Ok(())
    }
}

/// Scan one input into a report.
pub fn check_file(path: &Path, config: &Config) -> Result<FileReport> {
    let name = display_name(path);
    let source = read_input(path)?;
    let handler = Handler::new();

    let tokens = {
        let mut scanner: Scanner<'_, u32> = config.build_scanner();
        scanner.set_handler(&handler);
        scanner.set_input_name(name.clone());
        scanner.attach_buffer(&source);
        scanner.by_ref().count()
    };

    let diagnostics: Vec<Diagnostic> = handler
        .take()
        .into_iter()
        .map(|d| {
            let snippet = snippet_for(&source, d.span.start, d.span.end, d.span.line, d.span.column);
            d.with_snippet(snippet)
        })
        .collect();
    debug!(input = %name, tokens, diagnostics = diagnostics.len(), "checked");

    Ok(FileReport {
        path: name,
        tokens,
        diagnostics,
    })
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    let command = CheckCommand::new(args, config);
    debug!(command = command.name(), files = command.args.files.len(), "running");
    command.execute()
}
