mod ui;

use clap::Parser;
use eframe::egui;
use mural_core::{column_travel, single_travel, CARD_HEIGHT, MURALS};
use ui::DoubleTickerApp;

#[derive(Debug, Parser)]
#[command(
    name = "doble-ticker",
    about = "Two mural columns chained to a real scrollbar",
    version
)]
struct Cli {
    /// Vertical slot per card, in logical pixels.
    #[arg(long, default_value_t = CARD_HEIGHT)]
    card_height: f32,

    /// Print the mural catalog as JSON and exit.
    #[arg(long)]
    dump_catalog: bool,
}

/// A card slot must be a strictly positive, finite pixel count; anything
/// else would collapse the travel distances to zero or worse.
fn validate_card_height(card_height: f32) -> anyhow::Result<f32> {
    anyhow::ensure!(
        card_height.is_finite() && card_height > 0.0,
        "--card-height must be a positive number of pixels, got {card_height}"
    );
    Ok(card_height)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.dump_catalog {
        println!("{}", serde_json::to_string_pretty(&MURALS)?);
        return Ok(());
    }

    let card_height = validate_card_height(cli.card_height)?;

    tracing::info!(
        card_height,
        travel = single_travel(card_height),
        column_travel = column_travel(card_height),
        "starting double ticker"
    );

    let app = DoubleTickerApp::new(card_height)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Doble ticker")
            .with_inner_size([1180.0, 860.0])
            .with_min_inner_size([760.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Doble ticker",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{validate_card_height, Cli};
    use clap::{CommandFactory as _, Parser as _};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn card_height_defaults_and_overrides() {
        let cli = Cli::parse_from(["doble-ticker"]);
        assert_eq!(cli.card_height, mural_core::CARD_HEIGHT);
        assert!(!cli.dump_catalog);

        let cli = Cli::parse_from(["doble-ticker", "--card-height", "120"]);
        assert_eq!(cli.card_height, 120.0);
    }

    #[test]
    fn accepts_positive_card_heights() {
        assert_eq!(validate_card_height(228.0).unwrap(), 228.0);
        assert_eq!(validate_card_height(0.5).unwrap(), 0.5);
    }

    #[test]
    fn rejects_non_positive_card_heights() {
        for bad in [0.0, -1.0, -228.0] {
            let err = validate_card_height(bad).unwrap_err();
            assert!(err.to_string().contains("positive"), "{err}");
        }
    }

    #[test]
    fn rejects_non_finite_card_heights() {
        assert!(validate_card_height(f32::NAN).is_err());
        assert!(validate_card_height(f32::INFINITY).is_err());
        assert!(validate_card_height(f32::NEG_INFINITY).is_err());
    }
}
