use std::io::Write;

use chromalens::{Color, ColorSpace, Conversions, ParseError};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chromalens")]
#[command(about = "Print the hex, Display-P3 and OKLCH notations of colors")]
struct Cli {
    /// Colors as #RGB, #RGBA, #RRGGBB, #RRGGBBAA, rgb(R, G, B) or rgba(R, G, B, A)
    #[arg(required = true)]
    colors: Vec<String>,

    /// Only print this notation: HEX, P3 or OKLCH
    #[arg(short, long)]
    target: Option<ColorSpace>,

    /// Print one JSON object per color
    #[arg(long, conflicts_with = "target")]
    json: bool,
}

/// Everything printed for one input color.
#[derive(Serialize, Debug)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    conversions: Conversions,
    in_srgb_gamut: bool,
}

impl<'a> Report<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let color: Color = input.parse()?;
        Ok(Self {
            input,
            conversions: Conversions::of(&color),
            in_srgb_gamut: color.is_in_srgb_gamut(),
        })
    }

    fn render(&self, cli: &Cli) -> anyhow::Result<String> {
        if cli.json {
            return Ok(serde_json::to_string(self)?);
        }

        if let Some(target) = cli.target {
            return Ok(self.conversions.get(target).to_string());
        }

        let lines: Vec<String> = ColorSpace::ALL
            .iter()
            .map(|&space| format!("{:<6}{}", space, self.conversions.get(space)))
            .collect();
        Ok(lines.join("\n"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromalens=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    let mut rejected = 0;

    for input in &cli.colors {
        match Report::new(input) {
            Ok(report) => writeln!(stdout, "{}", report.render(&cli)?)?,
            Err(err) => {
                tracing::error!(%err, "Skipping color");
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        anyhow::bail!("{rejected} of {} colors could not be parsed", cli.colors.len());
    }

    Ok(())
}
