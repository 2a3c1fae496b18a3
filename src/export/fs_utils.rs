// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Check that an export target can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force`, interactive → ask for confirmation
/// - file exists, no `force`, not interactive → refuse
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
