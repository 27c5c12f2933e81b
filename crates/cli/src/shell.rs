//! Line-at-a-time driver shared by the prompt and script modes.

use std::io::Write;

use tracegraph_executor::{Command, Level, Notice, Notifier, Project};

use crate::commands::{parse_line, LineError, Step};
use crate::format::{prompt_for, render};

/// Prints notices to stderr, tagged with their kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match (notice.level, notice.kind) {
            (Level::Error, Some(kind)) => eprintln!("(error) {}: {}", kind, notice.message),
            (Level::Error, None) => eprintln!("(error) {}", notice.message),
            (Level::Warning, _) => eprintln!("(warning) {}", notice.message),
        }
    }
}

/// What the caller should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The line ran (or was blank).
    Continue,
    /// The line was rejected.
    Failed,
    /// The user asked to leave.
    Quit,
}

/// Runs shell lines against one project.
pub struct Shell {
    project: Project,
}

impl Shell {
    /// Wrap a project.
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// The project being edited.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Prompt text for the current session state.
    pub fn prompt(&self) -> String {
        prompt_for(self.project.editor().edit_state())
    }

    /// Parse and run one line, writing results to `out`.
    ///
    /// Executor failures are reported by the project's notifier; parse and
    /// file errors are written to stderr here.
    pub fn run_line(&mut self, line: &str, out: &mut impl Write) -> Flow {
        let step = match parse_line(line) {
            Ok(Some(step)) => step,
            Ok(None) => return Flow::Continue,
            Err(LineError::Help(text)) => {
                let _ = write!(out, "{}", text);
                return Flow::Continue;
            }
            Err(LineError::Invalid(text)) => {
                eprint!("{}", text);
                if !text.ends_with('\n') {
                    eprintln!();
                }
                return Flow::Failed;
            }
        };
        match step {
            Step::Quit => Flow::Quit,
            Step::Run(cmd) => self.run(cmd, out),
            Step::Import(file) => match std::fs::read_to_string(&file) {
                Ok(json) => self.run(Command::ImportJson { json }, out),
                Err(e) => {
                    eprintln!("(error) Io: {}: {}", file.display(), e);
                    Flow::Failed
                }
            },
            Step::Export(None) => self.run(Command::ExportJson, out),
            Step::Export(Some(file)) => match self.project.save_file(&file) {
                Ok(()) => {
                    let _ = writeln!(out, "saved {}", file.display());
                    Flow::Continue
                }
                Err(tracegraph_executor::Error::Io { reason }) => {
                    eprintln!("(error) Io: {}: {}", file.display(), reason);
                    Flow::Failed
                }
                Err(_) => Flow::Failed,
            },
        }
    }

    fn run(&mut self, cmd: Command, out: &mut impl Write) -> Flow {
        tracing::debug!(target: "tracegraph::cli", command = cmd.name(), "Running");
        match self.project.executor_mut().execute(cmd) {
            Ok(output) => {
                let _ = writeln!(out, "{}", render(&output));
                Flow::Continue
            }
            Err(_) => Flow::Failed,
        }
    }
}
