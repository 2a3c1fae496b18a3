use crate::cli::commands::common::{audit, identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::IdentityProvider;
use crate::state::ClientState;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, token } = cmd {
        cfg.require_admin_email()?;
        let provider = identity(cfg);

        if let Some(email) = email {
            provider.send_login_link(email)?;
            audit(cfg, "login_link", email, "Sign-in link issued");
            success(format!("Sign-in link sent to {email}."));
            info(format!(
                "Open {} and run `opsdash login --token <token>`.",
                provider.outbox_file().display()
            ));
        } else if let Some(token) = token {
            let session = provider.verify_link(token)?;

            let mut client = ClientState::load();
            client.session_gate = true;
            client.save()?;

            audit(cfg, "login", &session.user.email, "Signed in");
            success(format!("Signed in as {}.", session.user.email));
        }
    }
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let provider = identity(cfg);
    let who = provider.get_session()?.map(|s| s.user.email);
    provider.sign_out()?;

    let mut client = ClientState::load();
    client.session_gate = false;
    client.save()?;

    if let Some(email) = who {
        audit(cfg, "logout", &email, "Signed out");
        success(format!("Signed out {email}."));
    } else {
        info("No active session.");
    }
    Ok(())
}
