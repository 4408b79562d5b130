use crate::config::{BookConfig, KEYS};
use crate::error::{BookError, Result};
use log::warn;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Runs a config action against `<config_dir>/config.json`.
///
/// Returns the affected `(key, value)` pairs. `Set` on an unreadable
/// `config.json` starts over from defaults and rewrites the file.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<Vec<(String, String)>> {
    let mut config = match (BookConfig::load(config_dir), &action) {
        (Err(BookError::CorruptFormat(reason)), ConfigAction::Set(..)) => {
            warn!("event=config_reset module=commands status=recovered reason={reason}");
            BookConfig::default()
        }
        (loaded, _) => loaded?,
    };
    match action {
        ConfigAction::ShowAll => KEYS
            .iter()
            .map(|key| Ok((key.to_string(), config.get(key)?)))
            .collect(),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            Ok(vec![(key, value)])
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let value = config.get(&key)?;
            Ok(vec![(key, value)])
        }
    }
}
