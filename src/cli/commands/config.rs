use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_keys;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::env;
use std::process::Command;

/// `--editor`, then `$EDITOR`, then `$VISUAL`, then the platform default.
fn resolve_editor(requested: Option<&str>) -> String {
    requested
        .map(str::to_string)
        .or_else(|| env::var("EDITOR").ok())
        .or_else(|| env::var("VISUAL").ok())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let missing = missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing key '{key}' (default applies)"));
                }
            }
        }

        if *edit_config {
            if !path.exists() {
                cfg.save()?;
            }
            let editor = resolve_editor(editor.as_deref());
            log::debug!("editing {} with {editor}", path.display());

            let status = Command::new(&editor)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("cannot start editor '{editor}': {e}")))?;
            if !status.success() {
                return Err(AppError::Config(format!("editor '{editor}' exited with {status}")));
            }

            // reject edits that no longer parse
            Config::load()?;
            success(format!("Configuration edited with '{editor}'"));
        }
    }

    Ok(())
}
