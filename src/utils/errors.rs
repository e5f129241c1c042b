//! User-Friendly Error Formatting
//!
//! Provides user-friendly error messages with troubleshooting hints
//! for common error scenarios.

use std::fmt::Write;

/// Format error for user consumption
///
/// Takes technical error and produces user-friendly message with
/// troubleshooting steps and context.
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        &mut output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(&mut output).ok();

    // Analyze error and provide context
    let error_msg = error.to_string();

    if error_msg.contains("Permission denied") {
        format_permission_error(&mut output);
    } else if error_msg.contains("No serial ports") || error_msg.contains("No port selected") {
        format_no_ports_error(&mut output);
    } else if error_msg.contains("Failed to open") || error_msg.contains("No data received") {
        format_port_error(&mut output);
    } else if error_msg.contains("config") || error_msg.contains("Config") {
        format_config_error(&mut output);
    } else {
        format_generic_error(&mut output, &error_msg);
    }

    // Technical details
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Technical Details:").ok();
    writeln!(&mut output).ok();
    writeln!(&mut output, "{:#}", error).ok();
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "Run with --verbose for detailed logs: airmouse-viz -vv"
    )
    .ok();

    output
}

fn format_permission_error(output: &mut String) {
    writeln!(output, "Serial Port Permission Error").ok();
    writeln!(output).ok();
    writeln!(output, "The port exists but this user may not open it.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Not a member of the serial group").ok();
    writeln!(output, "     → Linux: sudo usermod -aG dialout $USER").ok();
    writeln!(output, "     → Log out and log back in afterwards").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Another program holds the port").ok();
    writeln!(
        output,
        "     → Close serial monitors (Arduino IDE, minicom, screen)"
    )
    .ok();
}

fn format_no_ports_error(output: &mut String) {
    writeln!(output, "No Serial Port Available").ok();
    writeln!(output).ok();
    writeln!(output, "No usable serial port was found or selected.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Device not plugged in").ok();
    writeln!(output, "     → Check the USB cable (some cables are power-only)").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Driver not installed").ok();
    writeln!(
        output,
        "     → CH340/CP210x boards need their bridge driver on some systems"
    )
    .ok();
    writeln!(output).ok();
    writeln!(output, "  3. Port known but not listed").ok();
    writeln!(
        output,
        "     → Pass it explicitly: airmouse-viz /dev/ttyUSB0"
    )
    .ok();
}

fn format_port_error(output: &mut String) {
    writeln!(output, "Serial Connection Error").ok();
    writeln!(output).ok();
    writeln!(output, "The port could not be opened or stayed silent.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Wrong port selected").ok();
    writeln!(output, "     → Run: airmouse-viz --list-ports").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Firmware not streaming").ok();
    writeln!(
        output,
        "     → Verify the device prints JSON lines in a serial monitor"
    )
    .ok();
    writeln!(output).ok();
    writeln!(output, "  3. Baud rate mismatch").ok();
    writeln!(output, "     → Default is 115200; override with --baud").ok();
}

fn format_config_error(output: &mut String) {
    writeln!(output, "Configuration Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with the configuration file.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Invalid TOML syntax").ok();
    writeln!(output, "     → Check for typos, missing quotes, etc.").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Out-of-range values").ok();
    writeln!(
        output,
        "     → The message below names the offending field"
    )
    .ok();
}

fn format_generic_error(output: &mut String, error: &str) {
    writeln!(output, "Visualizer Error").ok();
    writeln!(output).ok();
    writeln!(output, "Error: {}", error).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_user_error() {
        let error = anyhow::anyhow!("Failed to open /dev/ttyUSB0: resource busy");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("Serial Connection Error"));
        assert!(formatted.contains("/dev/ttyUSB0"));
    }

    #[test]
    fn test_no_ports_error_formatting() {
        let error = anyhow::anyhow!("No serial ports found");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("No Serial Port Available"));
        assert!(formatted.contains("--list-ports") || formatted.contains("ttyUSB0"));
    }

    #[test]
    fn test_permission_error_formatting() {
        let error = anyhow::anyhow!("Failed to open /dev/ttyACM0: Permission denied");
        let formatted = format_user_error(&error);
        assert!(formatted.contains("Permission"));
        assert!(formatted.contains("dialout"));
    }
}
