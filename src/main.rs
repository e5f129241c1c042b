//! airmouse-viz - Motion-Sensor Cursor Visualizer
//!
//! Entry point for the visualizer binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use iced::Size;
use serialport::SerialPort;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airmouse_viz::config::Config;
use airmouse_viz::serial::{self, SerialReader};
use airmouse_viz::stats::SessionStats;
use airmouse_viz::utils;
use airmouse_viz::viz::VisualizerApp;

/// Command-line arguments for airmouse-viz
#[derive(Parser, Debug)]
#[command(name = "airmouse-viz")]
#[command(version, about = "Motion-sensor cursor visualizer", long_about = None)]
pub struct Args {
    /// Serial port (shows the selection menu when omitted)
    pub port: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Baud rate override
    #[arg(short, long, env = "AIRMOUSE_BAUD")]
    pub baud: Option<u32>,

    /// List available serial ports and exit
    #[arg(long)]
    pub list_ports: bool,

    /// Fail instead of prompting when no port is configured
    #[arg(long)]
    pub no_menu: bool,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "pretty")]
    pub log_format: String,

    /// Write logs to file (in addition to stdout)
    #[arg(long)]
    pub log_file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first so its log level can seed the filter
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let (config, config_err) = match Config::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&args, &config)?;

    info!("════════════════════════════════════════════════════════");
    info!("  airmouse-viz v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {}  Commit: {}", env!("BUILD_DATE"), env!("GIT_HASH"));
    info!("════════════════════════════════════════════════════════");

    match config_err {
        Some(e) if config_path.exists() => {
            warn!("Failed to load config: {:#}, using defaults", e);
        }
        Some(_) => {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    let config = config.with_overrides(args.port.clone(), args.baud);
    config.validate()?;

    utils::log_startup_diagnostics();

    if args.list_ports {
        return list_ports();
    }

    let (port_name, port) = match connect(&config, args.no_menu) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("{}", utils::format_user_error(&e));
            return Err(e);
        }
    };

    let (tx, rx) = crossbeam_channel::bounded(config.serial.channel_capacity);
    let mut reader = SerialReader::spawn(port, tx, rx.clone());
    let stats = SessionStats::new();

    info!("Hold the device button and move it to control the cursor");

    let window_size = Size::new(config.display.width as f32, config.display.height as f32);
    let boot_config = config.clone();
    let boot_port = port_name.clone();
    let boot_stats = stats.clone();

    let result = iced::application(
        move || {
            VisualizerApp::new(
                boot_config.clone(),
                boot_port.clone(),
                rx.clone(),
                boot_stats.clone(),
            )
        },
        VisualizerApp::update,
        VisualizerApp::view,
    )
    .title("Air Mouse Cursor Visualizer")
    .window_size(window_size)
    .centered()
    .antialiasing(true)
    .subscription(VisualizerApp::subscription)
    .run();

    reader.stop();

    let snapshot = stats.snapshot();
    info!(
        "Session summary: {}",
        serde_json::to_string(&snapshot).unwrap_or_default()
    );

    if let Err(e) = result {
        let e = anyhow::Error::from(e);
        eprintln!("{}", utils::format_user_error(&e));
        return Err(e);
    }

    info!("Visualizer closed");
    Ok(())
}

/// Pick and open the serial port.
///
/// An explicitly configured port is tried first; failures fall back to
/// the interactive menu (matching the original tool), unless the menu is
/// disabled. The menu loop repeats until a port opens or the user quits.
fn connect(config: &Config, no_menu: bool) -> Result<(String, Box<dyn SerialPort>)> {
    if let Some(port) = &config.serial.port {
        match serial::open_port(port, &config.serial) {
            Ok(conn) => return Ok((port.clone(), conn)),
            Err(e) if no_menu => return Err(e.into()),
            Err(e) => {
                warn!("Failed to open {}: {}", port, e);
                println!("Could not open {}. Trying port selection...", port);
            }
        }
    } else if no_menu {
        anyhow::bail!("No serial port configured and the menu is disabled (--no-menu)");
    }

    loop {
        let port = serial::select_port(&config.serial)?;
        match serial::open_port(&port, &config.serial) {
            Ok(conn) => return Ok((port, conn)),
            Err(e) => {
                warn!("Failed to open {}: {}", port, e);
                println!("Could not open {}. Trying port selection again...", port);
            }
        }
    }
}

/// Print discovered ports and exit (--list-ports).
fn list_ports() -> Result<()> {
    let ports = serial::discover()?;

    if ports.is_empty() {
        println!("No serial ports found.");
        return Ok(());
    }

    println!("Found {} port(s):", ports.len());
    for port in &ports {
        let marker = if port.likely_device { "*" } else { " " };
        println!(
            "{} {}  {}  [{}]",
            marker, port.name, port.description, port.hardware_id
        );
    }
    println!("\n(* = likely sensor device)");

    Ok(())
}

fn init_logging(args: &Args, config: &Config) -> Result<()> {
    use std::fs::File;

    let log_level = match args.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Full detail for this crate; the GPU stack underneath iced is a firehose
        tracing_subscriber::EnvFilter::new(format!(
            "airmouse_viz={level},wgpu_core=warn,wgpu_hal=warn,naga=warn,warn",
            level = log_level
        ))
    });

    // If log file is specified, write to both stdout and file
    if let Some(log_file_path) = &args.log_file {
        let file = File::create(log_file_path)?;

        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path);
    } else {
        // Stdout only
        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().compact())
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer())
                    .init();
            }
        }
    }

    Ok(())
}
