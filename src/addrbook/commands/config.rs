use crate::commands::{CmdMessage, CmdResult};
use crate::config::AppConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings. Changes are written back when `config_dir` is
/// known, and only kept for this session otherwise.
pub fn run(
    config: &mut AppConfig,
    config_dir: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            updated.set(&key, &value)?;
            match config_dir {
                Some(dir) => {
                    updated.save(dir)?;
                    result.add_message(CmdMessage::success(format!(
                        "{} set to {}",
                        key, value
                    )));
                }
                None => result.add_message(CmdMessage::warning(format!(
                    "{} set to {} for this session only (no config directory)",
                    key, value
                ))),
            }
            *config = updated;
        }
    }

    Ok(result.with_config(config.clone()))
}
