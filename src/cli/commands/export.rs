use crate::cli::commands::common::{audit, load_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::state::ClientState;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        format,
        file,
        force,
    } = cmd
    {
        let client = ClientState::load();
        let state = load_state(cfg, &client, filters)?;
        let rows = state.visible_rows();

        let path = ExportLogic::resolve_path(file.as_deref(), &cfg.export_dir(), *format);
        let written = ExportLogic::export(&rows, *format, &path, *force)?;

        audit(
            cfg,
            "export",
            &path.display().to_string(),
            &format!("{written} row(s) as {}", format.as_str()),
        );
    }
    Ok(())
}
