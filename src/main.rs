use boxglue::{Backend, EngineError, LayoutConfig, RecordingBackend, Ship, State, sample};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Packs a sample fraction and prints the backend calls it ships as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "boxglue", version)]
struct Args {
    /// Layout configuration (JSON) to use instead of the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Numerator text
    #[arg(long, default_value = "xy")]
    numerator: String,

    /// Denominator text
    #[arg(long, default_value = "z")]
    denominator: String,

    /// Horizontal origin of the shipped box
    #[arg(long, default_value_t = 0.0)]
    x: f64,

    /// Vertical origin of the shipped box
    #[arg(long, default_value_t = 0.0)]
    y: f64,
}

fn main() -> Result<(), EngineError> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    log::info!("Using font {} at {} dpi", config.font, config.dpi);

    let backend = Arc::new(RecordingBackend::new());
    let state = State::from_config(backend.clone(), &config);
    let root = sample::fraction(&state, &args.numerator, &args.denominator)?;
    log::debug!(
        "Sample box is {:.3} wide, {:.3} high, {:.3} deep",
        root.width(),
        root.height(),
        root.depth()
    );

    log::info!("Shipping to {}", backend.name());
    Ship::new().call(args.x, args.y, &root);

    let mut out = io::stdout().lock();
    for call in backend.take_calls() {
        serde_json::to_writer(&mut out, &call)?;
        writeln!(out)?;
    }
    Ok(())
}
