mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{BrokerSettings, DeviceSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the broker and device configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        broker: BrokerSettings {
            url: partial
                .broker
                .as_ref()
                .and_then(|b| b.url.clone())
                .unwrap_or(default.broker.url),
        },
        device: DeviceSettings {
            id: partial
                .device
                .as_ref()
                .and_then(|d| d.id.clone())
                .unwrap_or(default.device.id),
            topic: partial
                .device
                .as_ref()
                .and_then(|d| d.topic.clone())
                .unwrap_or(default.device.topic),
            qos: partial
                .device
                .as_ref()
                .and_then(|d| d.qos)
                .unwrap_or(default.device.qos),
        },
    })
}

#[cfg(test)]
mod tests;
