use crate::cli::commands::common::audit;
use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, SourceKind};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::state::ClientState;
use crate::ui::messages::{field, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite record store and its migrations
///  - the client state file
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { admin } = &cli.command {
        let cfg = Config::init_all(cli.db.clone(), admin.clone())?;

        println!("⚙️  Initializing opsdash…");
        field("Config file", Config::config_file().display());
        field("Database", &cfg.database);

        if cfg.source == SourceKind::Sqlite {
            DbPool::new(&cfg.database)?;
            success(format!("Record store ready at {}", &cfg.database));
        }

        let state_file = ClientState::default_file();
        if !state_file.exists() {
            ClientState::default().save_to(&state_file)?;
        }

        if cfg.admin_email.trim().is_empty() {
            warning("No admin email configured yet: rerun with --admin <email> to enable sign-in.");
        }

        audit(&cfg, "init", "opsdash", &format!("Initialized at {}", cfg.database));
        success("opsdash initialization completed!");
    }
    Ok(())
}
