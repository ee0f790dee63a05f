use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for both the broker connection and the simulated device.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub device: DeviceSettings,
}

/// Configuration settings for the broker connection.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    /// WebSocket endpoint the publish client connects to.
    pub url: String,
}

/// Configuration settings for the simulated device.
///
/// The defaults reproduce the fixed values the entry point publishes with.
#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    pub id: String,
    pub topic: String,
    pub qos: u8,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub device: Option<PartialDeviceSettings>,
}

/// Partial broker settings.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub url: Option<String>,
}

/// Partial device settings.
#[derive(Debug, Deserialize)]
pub struct PartialDeviceSettings {
    pub id: Option<String>,
    pub topic: Option<String>,
    pub qos: Option<u8>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                url: "ws://127.0.0.1:8080".to_string(),
            },
            device: DeviceSettings {
                id: "sensor-001".to_string(),
                topic: "iot/data".to_string(),
                qos: 0,
            },
        }
    }
}
