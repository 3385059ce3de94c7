//! Dump command implementation.
//!
//! Streams each input through a scanner and prints every token, one per
//! line, or as JSON. Files are scanned in parallel and printed in argument
//! order.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use lexa_scan::Scanner;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{display_name, open_input, TokenRecord, STDIN_PATH};
use crate::commands::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the dump command.
#[derive(Debug, Clone, Default)]
pub struct DumpArgs {
    /// Files to scan; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Print JSON instead of text.
    pub json: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// The tokens of one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDump {
    /// Input name as given on the command line.
    pub path: String,
    /// Every token before end of input.
    pub tokens: Vec<TokenRecord>,
    /// Lexical errors the scanner counted.
    pub errors: u32,
}

/// Dump command handler.
pub struct DumpCommand<'c> {
    args: DumpArgs,
    config: &'c Config,
}

impl<'c> DumpCommand<'c> {
    /// Create a new DumpCommand.
    pub fn new(args: DumpArgs, config: &'c Config) -> Self {
        Self { args, config }
    }

    /// Scan every input and return the dumps in argument order.
    pub fn collect(&self) -> Result<Vec<FileDump>> {
        self.args
            .files
            .par_iter()
            .map(|path| dump_file(path, self.config))
            .collect()
    }

    /// Write `dumps` to `out` in the selected format.
    pub fn write(&self, dumps: &[FileDump], out: &mut impl Write) -> Result<()> {
        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, dumps)?;
            writeln!(out)?;
            return Ok(());
        }

        let headers = dumps.len() > 1;
        for (i, dump) in dumps.iter().enumerate() {
            if headers {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "==> {} <==", dump.path)?;
            }
            for record in &dump.tokens {
                writeln!(out, "{}", record.to_line())?;
            }
        }
        Ok(())
    }
}

impl Command for DumpCommand<'_> {
    fn name(&self) -> &'static str {
        "dump"
    }

    fn execute(&self) -> Result<()> {
        let start_time = Instant::now();
        let dumps = self.collect()?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write(&dumps, &mut out)?;
        out.flush()?;

        if self.args.verbose {
            let tokens: usize = dumps.iter().map(|d| d.tokens.len()).sum();
            eprintln!(
                "✅ Scanned {} token(s) in {} file(s) in {:.2}s",
                tokens,
                dumps.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Ok(())
    }
}

/// Scan one input as a stream.
pub fn dump_file(path: &Path, config: &Config) -> Result<FileDump> {
    let name = display_name(path);
    let mut scanner: Scanner<'_, u32> = config.build_scanner();
    scanner.set_input_name(name.clone());

    if path.as_os_str() == STDIN_PATH {
        scanner.attach_reader(std::io::stdin());
    } else {
        scanner.attach_file(open_input(path)?);
    }

    let tokens: Vec<TokenRecord> = scanner
        .by_ref()
        .map(|token| TokenRecord::from_token(&token, config))
        .collect();
    debug!(input = %name, tokens = tokens.len(), "dumped");

    Ok(FileDump {
        path: name,
        tokens,
        errors: scanner.error_count(),
    })
}

/// Run the dump command.
pub fn run_dump(args: DumpArgs, config: &Config) -> Result<()> {
    let command = DumpCommand::new(args, config);
    debug!(command = command.name(), files = command.args.files.len(), "running");
    command.execute()
}
