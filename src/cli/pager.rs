//! Launching the user's pager or editor
//!
//! Thin terminal glue around the interactive runner mode. The chosen tool
//! owns the terminal until it exits.

use std::env;
use std::path::Path;

use crate::error::Result;
use crate::runner::{BindMode, CommandRunner};

const FALLBACK_TOOL: &str = "less";

/// Open `path` in `$PAGER`, falling back to `less`.
pub fn open_in_pager(runner: &dyn CommandRunner, path: &Path) -> Result<()> {
    open_in(runner, path, &env::var("PAGER").unwrap_or_else(|_| FALLBACK_TOOL.to_string()))
}

/// Open `path` in `$EDITOR`, falling back to `less`.
pub fn open_in_editor(runner: &dyn CommandRunner, path: &Path) -> Result<()> {
    open_in(runner, path, &env::var("EDITOR").unwrap_or_else(|_| FALLBACK_TOOL.to_string()))
}

fn open_in(runner: &dyn CommandRunner, path: &Path, tool: &str) -> Result<()> {
    let argv = vec![tool.to_string(), path.display().to_string()];
    runner.run(&argv, BindMode::Interactive)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::ScriptedRunner;
    use std::path::PathBuf;

    #[test]
    fn test_pager_honors_env_var() {
        env::set_var("PAGER", "my-pager");
        let runner = ScriptedRunner::absent();
        open_in_pager(&runner, &PathBuf::from("/tmp/config")).unwrap();
        let calls = runner.calls.borrow();
        assert_eq!(calls[0], vec!["my-pager", "/tmp/config"]);
        env::remove_var("PAGER");
    }

    #[test]
    fn test_editor_falls_back_to_less() {
        env::remove_var("EDITOR");
        let runner = ScriptedRunner::absent();
        open_in_editor(&runner, &PathBuf::from("/tmp/config")).unwrap();
        let calls = runner.calls.borrow();
        assert_eq!(calls[0][0], "less");
    }
}
