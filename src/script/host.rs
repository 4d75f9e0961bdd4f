//! Rhai script host: owns the engine, the persistent scope, and the
//! loaded-script registry.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use rhai::{CallFnOptions, Dynamic, Engine, Scope, AST};
use serde_json::Value;

use crate::runner::RunError;
use crate::script;

pub struct ScriptHost {
    engine: Engine,
    /// Shared by every loaded script, like a page's global namespace.
    scope: Scope<'static>,
    scripts_dir: PathBuf,
    /// File names whose load settled successfully. Never pruned.
    loaded: HashSet<String>,
    /// Compiled scripts keyed by selection.
    compiled: HashMap<String, AST>,
}

impl ScriptHost {
    pub fn new(scripts_dir: impl AsRef<Path>) -> Self {
        Self {
            engine: Engine::new(),
            scope: Scope::new(),
            scripts_dir: scripts_dir.as_ref().to_path_buf(),
            loaded: HashSet::new(),
            compiled: HashMap::new(),
        }
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    pub fn is_loaded(&self, selection: &str) -> bool {
        self.loaded.contains(&script::script_file_name(selection))
    }

    /// Load the script for `selection` unless this session already has it.
    ///
    /// A load attempt settles exactly once. On success the file name enters
    /// the registry and later calls return without touching the file system;
    /// on failure nothing is registered and a later call retries from
    /// scratch.
    pub fn load(&mut self, selection: &str) -> Result<(), RunError> {
        let file_name = script::script_file_name(selection);
        if self.loaded.contains(&file_name) {
            return Ok(());
        }

        // A previous failed attempt may have left a stale compiled entry.
        self.compiled.remove(selection);

        let path = self.scripts_dir.join(&file_name);
        let source = fs::read_to_string(&path).map_err(|e| RunError::LoadFailure {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let ast = self.engine.compile(&source).map_err(|e| RunError::LoadFailure {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        // Script-tag semantics: top-level statements run once, at load time,
        // against the persistent scope.
        self.engine
            .run_ast_with_scope(&mut self.scope, &ast)
            .map_err(|e| RunError::LoadFailure {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        self.compiled.insert(selection.to_string(), ast);
        self.loaded.insert(file_name);
        Ok(())
    }

    /// Probe the candidate names in priority order and return the first one
    /// the loaded script defines as a zero-parameter function.
    pub fn resolve_entry(&self, selection: &str) -> Result<String, RunError> {
        let ast = self.compiled.get(selection).ok_or_else(|| RunError::LoadFailure {
            path: script::script_file_name(selection),
            reason: "script not loaded".to_string(),
        })?;

        let candidates = script::entry_candidates(selection);
        for name in &candidates {
            let defined = ast
                .iter_functions()
                .any(|f| f.name == name.as_str() && f.params.is_empty());
            if defined {
                return Ok(name.clone());
            }
        }

        Err(RunError::EntryPointNotFound {
            selection: selection.to_string(),
            probed: candidates,
        })
    }

    /// Invoke `entry` from the script loaded for `selection` and convert its
    /// return value. Unit maps to `None`; anything else crosses the engine
    /// boundary through serde.
    pub fn invoke(&mut self, selection: &str, entry: &str) -> Result<Option<Value>, RunError> {
        let ast = self.compiled.get(selection).ok_or_else(|| RunError::LoadFailure {
            path: script::script_file_name(selection),
            reason: "script not loaded".to_string(),
        })?;

        // Top-level statements already ran at load time; only the function
        // body executes here.
        let options = CallFnOptions::new().eval_ast(false);
        let result = self
            .engine
            .call_fn_with_options::<Dynamic>(options, &mut self.scope, ast, entry, ())
            .map_err(|e| RunError::Invocation {
                selection: selection.to_string(),
                reason: e.to_string(),
            })?;

        if result.is_unit() {
            return Ok(None);
        }

        let value: Value =
            rhai::serde::from_dynamic(&result).map_err(|e| RunError::Invocation {
                selection: selection.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(value))
    }
}
