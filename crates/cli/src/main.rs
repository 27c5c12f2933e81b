//! tracegraph shell
//!
//! Interactive editor for weighted node graphs and the paths traced over
//! them. Type `help` at the prompt for the command list.

mod commands;
mod format;
mod shell;

use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rustyline::error::ReadlineError;
use tracegraph_core::EditorConfig;
use tracegraph_executor::Project;

use shell::{ConsoleNotifier, Flow, Shell};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Editor configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project document to open on start
    #[arg(short, long)]
    import: Option<PathBuf>,

    /// Reference image size, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_dimensions)]
    image: Option<(u32, u32)>,

    /// Run commands from a file instead of prompting; stops at the first failure
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Log level (overrides the configuration file)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match EditorConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("(error) {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EditorConfig::default(),
    };

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let level: tracing::Level = match level.parse() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("(error) unknown log level '{}'", level);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let project = match Project::with_notifier(config, ConsoleNotifier) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("(error) {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut shell = Shell::new(project);
    let mut stdout = io::stdout();

    if let Some((width, height)) = args.image {
        if shell.run_line(&format!("image {} {}", width, height), &mut stdout) == Flow::Failed {
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = &args.import {
        let line = format!("import '{}'", path.display());
        if shell.run_line(&line, &mut stdout) == Flow::Failed {
            return ExitCode::FAILURE;
        }
    }

    match &args.script {
        Some(path) => run_script(&mut shell, path),
        None if io::stdin().is_terminal() => run_prompt(&mut shell),
        None => run_lines(&mut shell, io::stdin().lock()),
    }
}

fn run_script(shell: &mut Shell, path: &Path) -> ExitCode {
    match std::fs::File::open(path) {
        Ok(file) => run_lines(shell, io::BufReader::new(file)),
        Err(e) => {
            eprintln!("(error) {}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_lines(shell: &mut Shell, input: impl BufRead) -> ExitCode {
    let mut stdout = io::stdout();
    for (n, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) line {}: {}", n + 1, e);
                return ExitCode::FAILURE;
            }
        };
        match shell.run_line(&line, &mut stdout) {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Failed => {
                tracing::error!(target: "tracegraph::cli", line = n + 1, "Stopping at failed line");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_prompt(shell: &mut Shell) -> ExitCode {
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) cannot start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = io::stdout();
    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if shell.run_line(&line, &mut stdout) == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("bad width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("bad height '{}'", h))?;
    Ok((w, h))
}
