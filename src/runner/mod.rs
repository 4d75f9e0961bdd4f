//! Runner: orchestrates selection → load → resolve entry point → invoke.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::script::ScriptHost;

/// Everything that can fail in one execution cycle. Every kind is handled
/// the same way at the top level: logged, rendered as a single notification,
/// never propagated past the handler.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no algorithm selected")]
    NoSelection,
    #[error("failed to load {path}: {reason}")]
    LoadFailure { path: String, reason: String },
    #[error("no entry point found for `{selection}`; expected the script to define one of: {joined}", joined = .probed.join(", "))]
    EntryPointNotFound { selection: String, probed: Vec<String> },
    #[error("algorithm `{selection}` failed: {reason}")]
    Invocation { selection: String, reason: String },
}

/// Outcome of a successful execution cycle.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub selection: String,
    /// Entry-point name the probe settled on.
    pub entry: String,
    /// `None` when the entry point returned unit.
    pub value: Option<Value>,
}

/// One runner per session. Owns the script host, and with it the
/// loaded-script registry; state lives until the process exits.
pub struct Runner {
    host: ScriptHost,
}

impl Runner {
    pub fn new(scripts_dir: &Path) -> Self {
        Self {
            host: ScriptHost::new(scripts_dir),
        }
    }

    /// Run one execution cycle: `Idle → Loading → (Executing | Failed) → Idle`.
    ///
    /// A missing or blank selection fails with [`RunError::NoSelection`]
    /// before anything touches the file system.
    pub fn execute(&mut self, selection: Option<&str>) -> Result<RunOutcome, RunError> {
        let selection = match selection {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(RunError::NoSelection),
        };

        self.host.load(selection)?;
        let entry = self.host.resolve_entry(selection)?;
        let value = self.host.invoke(selection, &entry)?;

        Ok(RunOutcome {
            selection: selection.to_string(),
            entry,
            value,
        })
    }

    pub fn scripts_dir(&self) -> &Path {
        self.host.scripts_dir()
    }
}
