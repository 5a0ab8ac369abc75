//! Pallet load planner CLI

mod report;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use palletizer::{
    LoadHeightPreset, MaterialData, PackingPolicy, PalletConfig, PalletPacker, Planner,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palletizer")]
#[command(about = "Plan how uniform boxes are layered on a pallet")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the load for one box type
    #[command(group(ArgGroup::new("json_out").args(["json", "output"]).multiple(true)))]
    Plan {
        /// Box length in mm
        #[arg(short, long)]
        length: f64,

        /// Box width in mm
        #[arg(short, long)]
        width: f64,

        /// Box height in mm
        #[arg(short = 'H', long)]
        height: f64,

        /// Display name for the box
        #[arg(short, long, default_value = "box")]
        name: String,

        /// Pallet length in mm
        #[arg(long, default_value_t = PalletConfig::STANDARD_LENGTH)]
        pallet_length: f64,

        /// Pallet width in mm
        #[arg(long, default_value_t = PalletConfig::STANDARD_WIDTH)]
        pallet_width: f64,

        /// Pallet deck height in mm
        #[arg(long, default_value_t = PalletConfig::STANDARD_DECK_HEIGHT)]
        pallet_height: f64,

        /// Load ceiling preset
        #[arg(short, long, value_enum, default_value = "standard")]
        preset: PresetArg,

        /// Explicit load ceiling in mm, overriding the preset
        #[arg(short, long)]
        max_load_height: Option<f64>,

        /// Stack pattern A on every layer
        #[arg(long)]
        no_cross_stacking: bool,

        /// Print the plan as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Only include summary numbers in JSON output (needs --json or --output)
        #[arg(long, requires = "json_out")]
        summary: bool,

        /// Output file for the plan (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List load ceiling presets for the standard pallet
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    /// 1350 mm of goods
    Standard,
    /// 700 mm of goods
    Low,
}

impl From<PresetArg> for LoadHeightPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Standard => LoadHeightPreset::Standard,
            PresetArg::Low => LoadHeightPreset::Low,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => {
            let pallet = PalletConfig::standard();
            println!("{}:", pallet.name);
            println!("====================================");
            for preset in LoadHeightPreset::ALL {
                println!("  - {:?}: {} mm", preset, preset.max_load_height());
            }
        }

        Commands::Plan {
            length,
            width,
            height,
            name,
            pallet_length,
            pallet_width,
            pallet_height,
            preset,
            max_load_height,
            no_cross_stacking,
            json,
            summary,
            output,
        } => {
            let material = MaterialData::new(name, length, width, height);

            let ceiling = max_load_height
                .unwrap_or_else(|| LoadHeightPreset::from(preset).max_load_height());
            let pallet = if pallet_length == PalletConfig::STANDARD_LENGTH
                && pallet_width == PalletConfig::STANDARD_WIDTH
            {
                PalletConfig::standard()
                    .with_deck_height(pallet_height)
                    .with_max_load_height(ceiling)
            } else {
                PalletConfig::new(pallet_length, pallet_width, pallet_height, ceiling)
            };

            let policy = PackingPolicy::new().with_cross_stacking(!no_cross_stacking);
            let packer = PalletPacker::new(policy);

            log::info!("Planning '{}' on '{}'", material.name, pallet.name);
            let result = packer.try_plan(&material, &pallet)?;

            if json {
                let text = if summary {
                    serde_json::to_string_pretty(&result.summary())?
                } else {
                    serde_json::to_string_pretty(&result)?
                };
                println!("{}", text);
            } else {
                report::print_report(&result, &pallet);
            }

            if let Some(path) = output {
                if summary {
                    report::save_json(&result.summary(), &path)?;
                } else {
                    report::save_json(&result, &path)?;
                }
                println!("Plan saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
