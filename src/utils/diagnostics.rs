//! Startup diagnostics
//!
//! One-shot environment summary logged at startup, so bug reports carry
//! the platform and what the port enumeration saw.

use tracing::{info, warn};

/// Log platform and serial environment information.
pub fn log_startup_diagnostics() {
    info!(
        "Platform: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    match crate::serial::discover() {
        Ok(ports) => {
            let likely = ports.iter().filter(|p| p.likely_device).count();
            info!(
                "Serial ports visible: {} ({} likely device(s))",
                ports.len(),
                likely
            );
            for port in &ports {
                info!("  {} - {}", port.name, port.description);
            }
        }
        Err(e) => warn!("Port enumeration failed during diagnostics: {}", e),
    }
}
