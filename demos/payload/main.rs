//! Tentform payload demo: builds the reference tent and prints the request
//! body for the model-generation service.
//!
//! Usage:
//! ```text
//! cargo run --example payload                 # semi-ellipse profile
//! cargo run --example payload -- circular     # circular profile
//! cargo run --example payload -- parametric   # parametric profile
//! ```

use tentform::geometry::{ArcFamily, Dimensions};
use tentform::operations::{BuildTent, TentConfig};
use tentform::payload::{PayloadOptions, TentPayload};
use tentform::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for tentform.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tentform=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tentform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let family = match std::env::args().nth(1).as_deref() {
        Some("circular") => ArcFamily::Circular,
        Some("parametric") => ArcFamily::Parametric,
        _ => ArcFamily::SemiEllipse,
    };

    let dims = Dimensions::from_centimeters(140.0, 230.0, 120.0)?;
    let geometry = BuildTent::new(dims)
        .with_config(TentConfig::default().with_arc_family(family))
        .execute()?;

    eprintln!("{}", geometry.length_label("m"));
    eprintln!("{}", geometry.area_label("m"));

    let options = PayloadOptions::default().with_pattern_walls(true);
    let payload = TentPayload::from_geometry(&geometry, options)?;
    println!("{}", payload.to_json()?);
    Ok(())
}
