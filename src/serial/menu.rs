//! Interactive port selection menu
//!
//! Console workflow for picking a serial port when none is configured:
//! list discovered ports (flagging likely sensor devices), let the user
//! pick by number, refresh the list, or quit. A chosen port is probed
//! before it is accepted.

use std::io::{BufRead, Write};
use std::time::Duration;

use tracing::info;

use crate::config::SerialConfig;
use crate::serial::error::{Result, SerialError};
use crate::serial::ports::{self, PortInfo};
use crate::serial::probe::probe_port;

/// Parsed user input at the menu prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the listed ports
    Port(usize),
    /// Re-enumerate and show the list again
    Refresh,
    /// Abort selection
    Quit,
}

impl MenuChoice {
    /// Parse a prompt line against a list of `port_count` ports.
    ///
    /// Accepts a 1-based port number, `r` to refresh, `q` to quit.
    pub fn parse(input: &str, port_count: usize) -> Option<Self> {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "q" => Some(Self::Quit),
            "r" => Some(Self::Refresh),
            _ => {
                let number: usize = input.parse().ok()?;
                if (1..=port_count).contains(&number) {
                    Some(Self::Port(number - 1))
                } else {
                    None
                }
            }
        }
    }
}

/// Render the discovered port list for the console.
fn render_port_list(ports: &[PortInfo]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    writeln!(out, "\nFound {} available port(s):\n", ports.len()).ok();

    for (i, port) in ports.iter().enumerate() {
        let marker = if port.likely_device {
            "[LIKELY DEVICE]"
        } else {
            "               "
        };
        writeln!(out, "{:2}. {} {}", i + 1, marker, port.name).ok();
        writeln!(out, "     Description: {}", port.description).ok();
        writeln!(out, "     Hardware ID: {}", port.hardware_id).ok();
        writeln!(out).ok();
    }

    out
}

/// Run the interactive selection loop until a port passes its probe.
///
/// Reads choices from stdin; EOF behaves like `q`.
pub fn select_port(config: &SerialConfig) -> Result<String> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    select_port_with(config, || lines.next().transpose().unwrap_or(None))
}

/// Selection loop with an injectable input source (testable without a tty).
pub(crate) fn select_port_with<F>(config: &SerialConfig, mut next_line: F) -> Result<String>
where
    F: FnMut() -> Option<String>,
{
    let probe_timeout = Duration::from_millis(config.probe_timeout_ms);

    loop {
        println!("\n{}", "═".repeat(50));
        println!("  Cursor Visualizer - Serial Port Selection");
        println!("{}", "═".repeat(50));

        let ports = ports::discover()?;
        if ports.is_empty() {
            eprintln!("✗ No serial ports found.");
            eprintln!("  Make sure the device is connected and drivers are installed.");
            return Err(SerialError::NoPortsFound);
        }

        print!("{}", render_port_list(&ports));

        loop {
            println!("Options:");
            println!("  - Enter number (1-{}) to select a port", ports.len());
            println!("  - Enter 'r' to refresh the port list");
            println!("  - Enter 'q' to quit");
            print!("\nSelect port (1-{}) or option: ", ports.len());
            std::io::stdout().flush().ok();

            let Some(input) = next_line() else {
                return Err(SerialError::NoPortSelected);
            };

            match MenuChoice::parse(&input, ports.len()) {
                Some(MenuChoice::Quit) => return Err(SerialError::NoPortSelected),
                Some(MenuChoice::Refresh) => break,
                Some(MenuChoice::Port(index)) => {
                    let name = &ports[index].name;
                    println!("\nTesting connection to {}...", name);

                    match probe_port(name, config.baud_rate, probe_timeout) {
                        Ok(()) => {
                            println!("✓ Port {} is working", name);
                            info!("Selected serial port {}", name);
                            return Ok(name.clone());
                        }
                        Err(e) => {
                            println!("✗ Could not connect to {}: {}", name, e);
                            println!("Try another port or check the device connection.");
                        }
                    }
                }
                None => println!("✗ Invalid input. Please try again."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_numbers() {
        assert_eq!(MenuChoice::parse("1", 3), Some(MenuChoice::Port(0)));
        assert_eq!(MenuChoice::parse("3", 3), Some(MenuChoice::Port(2)));
        assert_eq!(MenuChoice::parse(" 2 ", 3), Some(MenuChoice::Port(1)));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(MenuChoice::parse("0", 3), None);
        assert_eq!(MenuChoice::parse("4", 3), None);
        assert_eq!(MenuChoice::parse("1", 0), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(MenuChoice::parse("q", 3), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("Q", 3), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("r", 3), Some(MenuChoice::Refresh));
        assert_eq!(MenuChoice::parse("R\n", 3), Some(MenuChoice::Refresh));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(MenuChoice::parse("", 3), None);
        assert_eq!(MenuChoice::parse("x", 3), None);
        assert_eq!(MenuChoice::parse("1.5", 3), None);
        assert_eq!(MenuChoice::parse("-1", 3), None);
    }

    #[test]
    fn test_render_port_list_marks_likely_devices() {
        let ports = vec![
            PortInfo {
                name: "/dev/ttyUSB0".to_string(),
                description: "CH340 serial converter".to_string(),
                hardware_id: "USB VID:PID=1a86:7523".to_string(),
                likely_device: true,
            },
            PortInfo {
                name: "/dev/ttyS0".to_string(),
                description: "PCI serial port".to_string(),
                hardware_id: "n/a".to_string(),
                likely_device: false,
            },
        ];

        let rendered = render_port_list(&ports);
        assert!(rendered.contains("Found 2 available port(s)"));
        assert!(rendered.contains("[LIKELY DEVICE] /dev/ttyUSB0"));
        assert!(rendered.contains("Description: CH340 serial converter"));
        assert!(!rendered.contains("[LIKELY DEVICE] /dev/ttyS0"));
    }
}
