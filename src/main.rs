// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use procam::app::AppModel;
use procam::i18n;
use procam::media::{AspectRatio, ColorGrade, Filter};
use procam::scene::SceneType;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "procam")]
#[command(about = "Professional camera with scene presets and an editing suite")]
#[command(version = env!("PROCAM_BUILD_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available cameras
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Take a photo without opening a window
    Photo {
        /// Camera index to use (from 'procam list')
        #[arg(short, long)]
        camera: Option<usize>,

        /// Scene preset applied to exposure and white balance
        #[arg(short, long, default_value = "auto")]
        scene: SceneType,

        #[arg(short, long, default_value = "none")]
        filter: Filter,

        #[arg(short, long, default_value = "none")]
        grade: ColorGrade,

        /// Framing: 16:9, 2.39:1, 1:1 or 4:3
        #[arg(short, long, default_value = "16:9")]
        aspect: AspectRatio,

        /// Output file or directory (default: ~/Pictures/ProCam)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides the default, e.g. RUST_LOG=procam=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,procam=info")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { json }) => cli::list_cameras(json)?,
        Some(Commands::Photo {
            camera,
            scene,
            filter,
            grade,
            aspect,
            output,
        }) => cli::take_photo(cli::PhotoOptions {
            camera,
            scene,
            filter,
            grade,
            aspect,
            output,
        })?,
        None => run_gui()?,
    }

    Ok(())
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(480.0),
    );

    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
