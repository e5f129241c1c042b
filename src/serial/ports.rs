//! Serial port discovery
//!
//! Wraps `serialport::available_ports` into a display-friendly list and
//! flags ports whose USB description matches common hobbyist
//! microcontroller bridges.

use serialport::SerialPortType;

use crate::serial::error::{Result, SerialError};

/// USB description keywords marking a likely sensor device
const DEVICE_KEYWORDS: &[&str] = &["arduino", "ch340", "cp210", "ftdi", "usb-serial", "usb serial"];

/// One discovered serial port
#[derive(Debug, Clone)]
pub struct PortInfo {
    /// System name (`/dev/ttyUSB0`, `COM3`, ...)
    pub name: String,
    /// Human-readable description from the USB descriptor, if any
    pub description: String,
    /// Hardware identification (VID:PID and serial number for USB)
    pub hardware_id: String,
    /// Description matched a known microcontroller bridge
    pub likely_device: bool,
}

/// Enumerate serial ports on the system.
pub fn discover() -> Result<Vec<PortInfo>> {
    let ports = serialport::available_ports().map_err(SerialError::Enumeration)?;

    Ok(ports
        .into_iter()
        .map(|p| {
            let (description, hardware_id) = describe(&p.port_type);
            let likely_device = is_likely_device(&description);
            PortInfo {
                name: p.port_name,
                description,
                hardware_id,
                likely_device,
            }
        })
        .collect())
}

/// Description and hardware ID strings for a port type.
fn describe(port_type: &SerialPortType) -> (String, String) {
    match port_type {
        SerialPortType::UsbPort(usb) => {
            let description = usb
                .product
                .clone()
                .or_else(|| usb.manufacturer.clone())
                .unwrap_or_else(|| "USB serial device".to_string());
            let mut hardware_id = format!("USB VID:PID={:04x}:{:04x}", usb.vid, usb.pid);
            if let Some(serial) = &usb.serial_number {
                hardware_id.push_str(&format!(" SN={}", serial));
            }
            (description, hardware_id)
        }
        SerialPortType::PciPort => ("PCI serial port".to_string(), "n/a".to_string()),
        SerialPortType::BluetoothPort => ("Bluetooth serial port".to_string(), "n/a".to_string()),
        SerialPortType::Unknown => ("Unknown serial port".to_string(), "n/a".to_string()),
    }
}

/// Match the description against known microcontroller bridge chips.
pub fn is_likely_device(description: &str) -> bool {
    let description = description.to_lowercase();
    DEVICE_KEYWORDS.iter().any(|kw| description.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likely_device_keywords() {
        assert!(is_likely_device("Arduino Uno"));
        assert!(is_likely_device("USB2.0-Serial CH340"));
        assert!(is_likely_device("CP2102N USB to UART Bridge Controller"));
        assert!(is_likely_device("FTDI FT232R"));
        assert!(is_likely_device("Generic USB-Serial adapter"));
    }

    #[test]
    fn test_unlikely_devices() {
        assert!(!is_likely_device("PCI serial port"));
        assert!(!is_likely_device("Bluetooth serial port"));
        assert!(!is_likely_device("Internal modem"));
        assert!(!is_likely_device(""));
    }

    #[test]
    fn test_describe_usb_port() {
        let usb = SerialPortType::UsbPort(serialport::UsbPortInfo {
            vid: 0x2341,
            pid: 0x0043,
            serial_number: Some("85736323".to_string()),
            manufacturer: Some("Arduino LLC".to_string()),
            product: Some("Arduino Uno".to_string()),
        });

        let (description, hardware_id) = describe(&usb);
        assert_eq!(description, "Arduino Uno");
        assert_eq!(hardware_id, "USB VID:PID=2341:0043 SN=85736323");
    }

    #[test]
    fn test_describe_usb_port_without_product_falls_back() {
        let usb = SerialPortType::UsbPort(serialport::UsbPortInfo {
            vid: 0x1a86,
            pid: 0x7523,
            serial_number: None,
            manufacturer: Some("QinHeng Electronics".to_string()),
            product: None,
        });

        let (description, hardware_id) = describe(&usb);
        assert_eq!(description, "QinHeng Electronics");
        assert_eq!(hardware_id, "USB VID:PID=1a86:7523");
    }
}
