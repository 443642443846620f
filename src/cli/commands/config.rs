//! `unirecords config` handler

use crate::args::ConfigSubcommand;
use crate::terminal::TerminalView;
use uni_records::app::View;
use uni_records::config::Config;
use uni_records::core::database::CorruptPolicy;
use uni_records::info;

/// Run a config subcommand against the loaded configuration
///
/// `set` and `unset` write the config file; `reset` removes it after
/// confirmation.
///
/// # Errors
/// Returns a message for unknown keys, rejected values and failed writes
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    let mut view = TerminalView::new(false);
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(&mut view, config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
            view.display(&value);
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            view.display_success(&format!("Set {key} = {value}"));
            if let Some(note) = storage_note(&key, config) {
                view.display(&note);
            }
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            let restored = config.get(&key).unwrap_or_default();
            view.display_success(&format!("Restored {key} to default \"{restored}\""));
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut view),
    }
}

fn show_all<V: View>(view: &mut V, config: &Config) {
    let data_path = config.storage.data_path();
    let state = if data_path.exists() {
        "exists"
    } else {
        "created on first use"
    };
    view.display(&format!(
        "\n=== Configuration ({}) ===\n\n{config}\nStudent store: {} ({state})\n{}",
        Config::get_config_file_path().display(),
        data_path.display(),
        policy_description(config.storage.on_corrupt)
    ));
}

/// Extra context printed after changing a storage setting
fn storage_note(key: &str, config: &Config) -> Option<String> {
    match key {
        "data_file" | "data-file" => Some(format!(
            "Student store: {}",
            config.storage.data_path().display()
        )),
        "on_corrupt" | "on-corrupt" => Some(policy_description(config.storage.on_corrupt)),
        _ => None,
    }
}

fn policy_description(policy: CorruptPolicy) -> String {
    match policy {
        CorruptPolicy::Empty => {
            "Unreadable data file: read as empty (next write replaces it)".to_string()
        }
        CorruptPolicy::Error => "Unreadable data file: stop with an error".to_string(),
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Saved config to {}", Config::get_config_file_path().display());
    Ok(())
}

fn reset<V: View>(view: &mut V) -> Result<(), String> {
    let config_file = Config::get_config_file_path();
    if !config_file.exists() {
        view.display_success("Config is already at defaults");
        return Ok(());
    }
    if !view.confirm_action("Reset configuration to defaults?") {
        view.display("Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    info!("Removed config file {}", config_file.display());
    view.display_success("Config reset to defaults");
    Ok(())
}
