//! Unit tests for the `TxError` and `HalError` enums and their `Display` output.

use temphygro_tx::error::TxError;
use temphygro_tx::radio::hal::{check_bcm_pin, HalError, MAX_BCM_PIN};

/// Tests that the `TemperatureOutOfRange` variant is correctly formatted.
#[test]
fn test_temperature_out_of_range_error() {
    let err = TxError::TemperatureOutOfRange(123.5);
    assert_eq!(
        err.to_string(),
        "Temperature out of range: 123.5 °C (encodable: -99.9..=99.9)"
    );
}

/// Tests that the `HumidityOutOfRange` variant is correctly formatted.
#[test]
fn test_humidity_out_of_range_error() {
    let err = TxError::HumidityOutOfRange(-1.0);
    assert_eq!(
        err.to_string(),
        "Humidity out of range: -1 % (encodable: 0.0..=99.9)"
    );
}

/// Tests that the `InvalidAddress` variant is correctly formatted.
#[test]
fn test_invalid_address_error() {
    let err = TxError::InvalidAddress(12);
    assert_eq!(err.to_string(), "Invalid address: 12 (expected 0..=7)");
}

/// Tests that HAL errors convert and keep their message.
#[test]
fn test_hal_error_conversion() {
    let err: TxError = HalError::PinUnavailable(17).into();
    assert!(matches!(err, TxError::Hal(HalError::PinUnavailable(17))));
    assert_eq!(err.to_string(), "Hardware error: GPIO pin 17 is unavailable");
}

/// Tests that the `Gpio` HAL variant is correctly formatted.
#[test]
fn test_gpio_error() {
    let err = HalError::Gpio("permission denied".to_string());
    assert_eq!(err.to_string(), "GPIO operation error: permission denied");
}

/// Tests that I/O errors convert into `ConfigIo`.
#[test]
fn test_config_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: TxError = io.into();
    assert!(matches!(err, TxError::ConfigIo(_)));
    assert_eq!(err.to_string(), "Configuration I/O error: missing");
}

/// Tests that JSON errors convert into `ConfigParse`.
#[test]
fn test_config_parse_error_conversion() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TxError = json.into();
    assert!(matches!(err, TxError::ConfigParse(_)));
    assert!(err.to_string().starts_with("Configuration parse error: "));
}

/// Tests that the `Other` variant is correctly formatted.
#[test]
fn test_other_error() {
    let err = TxError::Other("Test error message".to_string());
    assert_eq!(err.to_string(), "Other error: Test error message");
}

/// Tests that pins off the GPIO header are rejected with `InvalidConfig`.
#[test]
fn test_invalid_pin_config_error() {
    assert!(check_bcm_pin(17).is_ok());
    assert!(check_bcm_pin(MAX_BCM_PIN).is_ok());

    let err = check_bcm_pin(40).unwrap_err();
    assert!(matches!(err, HalError::InvalidConfig(_)));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: GPIO 40 is not a header pin (expected 0..=27)"
    );
}
