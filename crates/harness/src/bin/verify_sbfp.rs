//! Exhaustive SBFP verification
//!
//! Sweeps every bit pattern through decode/encode, checks the special-value
//! operator tables, then round-trips a few samples with the encoder
//! configured from the environment (`SBFP_NON_FINITE`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sbfp::{EncodeConfig, Encoder};
use sbfp_harness::{sample_round_trip, verify};

const SAMPLES: [f64; 8] = [0.0, 1.0, -2.5, 0.1, 3.14159, 65504.0, 1e-6, 1e5];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbfp=info,sbfp_harness=info,verify_sbfp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let report = verify()?;
    tracing::info!(
        total = report.total(),
        exact = report.exact,
        canonical_nans = report.canonical_nans,
        normalized_zeros = report.normalized_zeros,
        "All bit patterns verified"
    );
    tracing::info!("Special-value operator tables verified");

    let config = EncodeConfig::from_env();
    tracing::info!(non_finite = ?config.non_finite, "Encoding samples");

    let encoder = Encoder::new(config);
    for (input, decoded) in sample_round_trip(&SAMPLES, &encoder)? {
        tracing::info!(input, decoded, error = input - decoded, "sample");
    }

    Ok(())
}
