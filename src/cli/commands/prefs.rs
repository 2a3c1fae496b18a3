use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::state::{ClientState, Theme};
use crate::ui::messages::{field, success};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Prefs {
        theme,
        property,
        reset,
    } = cmd
    {
        let mut client = if *reset {
            // the gate flag belongs to the session, not to the preferences
            let gate = ClientState::load().session_gate;
            ClientState {
                session_gate: gate,
                ..ClientState::default()
            }
        } else {
            ClientState::load()
        };

        if let Some(t) = theme {
            client.theme = Theme::from_str_opt(t)
                .ok_or_else(|| AppError::Config(format!("unknown theme '{t}'")))?;
        }
        if let Some(p) = property {
            client.property_filter = p.trim().to_string();
        }

        if *reset || theme.is_some() || property.is_some() {
            client.save()?;
            success("Preferences saved.");
        }

        field("Theme", client.theme.as_str());
        field("Property", &client.property_filter);
    }
    Ok(())
}
