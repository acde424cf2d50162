//! Executes one parsed command against a [`TrailFlow`] and returns the JSON
//! value to print.

use crate::{CliError, Commands, Result as CliResult};

use mt_config::Config;
use mt_core::{Kiosk, SystemClock};
use mt_store::{
    FileSlotStorage, MemorySlotStorage, SessionRepository, SlotStorage, UserRepository,
};
use mt_trail::{FlowError, IdentityGenerator, QrPayload, TrailFlow};

use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde_json::{Value, json};

pub struct App {
    flow: TrailFlow,
}

impl App {
    pub fn new(flow: TrailFlow) -> Self {
        Self { flow }
    }

    /// Wires a flow to file-backed slots under the configured storage dir.
    ///
    /// Session-scoped slots live in memory and end with the process.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let storage_path = config.storage_path()?;
        debug!("Using slot storage at {}", storage_path.display());

        let local: Arc<dyn SlotStorage> =
            Arc::new(FileSlotStorage::new(storage_path, config.storage.quota()));
        let session: Arc<dyn SlotStorage> = Arc::new(MemorySlotStorage::new());

        let flow = TrailFlow::new(
            UserRepository::new(local.clone()),
            SessionRepository::new(local, session),
            IdentityGenerator::new(config.identity.max_trail_id_attempts),
            Arc::new(SystemClock),
            config.registration.min_name_length,
        );

        Ok(Self::new(flow))
    }

    pub fn execute(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Register { name, email } => {
                self.flow.show_register();
                let user = self.flow.register(&name, &email)?;
                let qr = QrPayload::for_user(&user);
                let qr_json = qr.to_json().map_err(CliError::from_json)?;

                Ok(json!({
                    "user": to_value(&user)?,
                    "qr": {
                        "payload": qr_json,
                        "filename": qr.download_filename(),
                    },
                }))
            }
            Commands::Login { trail_id } => {
                self.flow.show_login();
                let user = self.flow.login(&trail_id)?;
                to_value(&user)
            }
            Commands::Logout => {
                self.flow.logout()?;
                Ok(json!({ "signedOut": true }))
            }
            Commands::Whoami => to_value(&self.flow.current_user()?),
            Commands::Dashboard => to_value(&self.flow.dashboard()?),
            Commands::Complete { kiosk } => {
                let kiosk = Kiosk::from_str(kiosk.trim()).map_err(FlowError::from)?;
                let user = self.flow.record_completion(kiosk)?;
                to_value(&user)
            }
            Commands::Users => to_value(&self.flow.users().list().map_err(FlowError::from)?),
        }
    }
}

/// Renders a command result for stdout.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    output.map_err(CliError::from_json)
}

#[track_caller]
fn to_value(value: &impl serde::Serialize) -> CliResult<Value> {
    serde_json::to_value(value).map_err(CliError::from_json)
}
