//! Typed API over the executor.
//!
//! [`Project`] wraps an [`Executor`] and turns each command into an
//! ordinary method with a concrete return type.
//!
//! ```no_run
//! use tracegraph_executor::Project;
//!
//! let mut project = Project::new();
//! let a = project.add_node(10.0, 10.0)?;
//! let b = project.add_node(50.0, 10.0)?;
//! project.add_edge(&a.id, &b.id)?;
//! let path = project.begin_path(&a.id)?;
//! project.adjacent_extend(&b.id)?;
//! assert_eq!(project.editor().paths().get(&path.path_id).unwrap().len(), 2);
//! # Ok::<(), tracegraph_executor::Error>(())
//! ```

mod graph;
mod lifecycle;
mod paths;

use tracegraph_core::EditorConfig;
use tracegraph_engine::Editor;

use crate::convert::convert_result;
use crate::notify::Notifier;
use crate::Executor;

/// One editing project driven through commands.
#[derive(Debug, Default)]
pub struct Project {
    executor: Executor,
}

impl Project {
    /// Empty project with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty project with a custom configuration.
    pub fn with_config(config: EditorConfig) -> crate::Result<Self> {
        let editor = convert_result(Editor::new(config))?;
        Ok(Self {
            executor: Executor::new(editor),
        })
    }

    /// Empty project reporting to a custom notification sink.
    pub fn with_notifier(
        config: EditorConfig,
        notifier: impl Notifier + 'static,
    ) -> crate::Result<Self> {
        let editor = convert_result(Editor::new(config))?;
        Ok(Self {
            executor: Executor::with_notifier(editor, notifier),
        })
    }

    /// Read access to the editor state.
    pub fn editor(&self) -> &Editor {
        self.executor.editor()
    }

    /// The underlying executor, for raw commands.
    pub fn executor_mut(&mut self) -> &mut Executor {
        &mut self.executor
    }
}
