use super::{Settings, load_config};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.broker.url, "ws://127.0.0.1:8080");
    assert_eq!(settings.device.id, "sensor-001");
    assert_eq!(settings.device.topic, "iot/data");
    assert_eq!(settings.device.qos, 0);
}

#[test]
#[serial]
fn test_load_config_from_file_overrides_defaults() {
    // Create a temporary directory and set it as current dir so load_config
    // will pick up config/default.toml from there.
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    let toml = r#"
        [broker]
        url = "ws://broker.internal:9090"

        [device]
        id = "sensor-007"
        topic = "iot/test"
        qos = 1
    "#;
    fs::create_dir_all("config").expect("create config dir");
    fs::write("config/default.toml", toml).expect("write config file");

    let settings = load_config().expect("load config");
    assert_eq!(settings.broker.url, "ws://broker.internal:9090");
    assert_eq!(settings.device.id, "sensor-007");
    assert_eq!(settings.device.topic, "iot/test");
    assert_eq!(settings.device.qos, 1);

    env::set_current_dir(orig).expect("restore current dir");
}

#[test]
#[serial]
fn test_load_config_from_env_overrides_defaults() {
    temp_env::with_vars(
        [
            ("BROKER_URL", Some("ws://10.0.0.5:8080")),
            ("DEVICE_TOPIC", Some("iot/env")),
        ],
        || {
            let settings = load_config().expect("load config");
            assert_eq!(settings.broker.url, "ws://10.0.0.5:8080");
            assert_eq!(settings.device.topic, "iot/env");
            // untouched fields keep their defaults
            assert_eq!(settings.device.id, "sensor-001");
            assert_eq!(settings.device.qos, 0);
        },
    );
}
