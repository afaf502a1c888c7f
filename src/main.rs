use anyhow::{Context as _, anyhow};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use inkboard::config::Config;
use inkboard::draw::{ActionLog, BoardSurface, Theme};
use inkboard::session;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Replayable whiteboard drawing core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a saved board to a PNG image
    Render {
        /// Board file to load (whiteboard-state.json)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// PNG file to write
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Surface width in pixels
        #[arg(long, default_value_t = 1280)]
        width: i32,

        /// Surface height in pixels
        #[arg(long, default_value_t = 720)]
        height: i32,

        /// Background theme (light or dark)
        #[arg(long, default_value = "light")]
        theme: String,
    },
    /// Summarize the actions in a saved board
    Inspect {
        /// Board file to load
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Render {
            input,
            output,
            width,
            height,
            theme,
        } => {
            let theme = Theme::from_str(&theme)
                .map_err(|()| anyhow!("unknown theme '{theme}' (expected light or dark)"))?;

            let actions = session::load_board(&input, &config.storage)?;
            let mut log = ActionLog::new();
            log.replace_all(actions);

            let mut surface = BoardSurface::new(width, height)
                .map_err(|err| anyhow!("failed to create {width}x{height} surface: {err}"))?;
            surface
                .repaint(&log, theme, &config)
                .map_err(|err| anyhow!("failed to render board: {err}"))?;

            let mut file = File::create(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            surface
                .write_png(&mut file)
                .with_context(|| format!("failed to write PNG to {}", output.display()))?;

            println!(
                "Rendered {} actions to {} ({width}x{height})",
                log.len(),
                output.display()
            );
        }
        Command::Inspect { input } => {
            let actions = session::load_board(&input, &config.storage)?;

            let mut by_tool: BTreeMap<String, usize> = BTreeMap::new();
            for action in &actions {
                let name = serde_json::to_value(action.tool)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_else(|| format!("{:?}", action.tool));
                *by_tool.entry(name).or_default() += 1;
            }

            println!("{}: {} action(s)", input.display(), actions.len());
            for (tool, count) in &by_tool {
                println!("  {tool}: {count}");
            }
        }
    }

    Ok(())
}
