use anyhow::Context;
use clap::{ArgAction, ArgGroup, ArgMatches, CommandFactory, FromArgMatches, Parser};
use snooker_table::layout::LayoutReport;
use snooker_table::{Canvas, Config, assets, output};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snooker-table")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SNOOKER_TABLE_GIT_HASH"), ")"),
    about = "Render a snooker table diagram to PNG"
)]
#[command(group(ArgGroup::new("overlays").args(["guides", "balls"]).multiple(true)))]
struct Cli {
    /// Output PNG path (defaults to the [output] template in the config)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/snooker-table/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Draw the helper guides overlay
    #[arg(long, short = 'g', action = ArgAction::Count)]
    guides: u8,

    /// Draw the colours and the red rack
    #[arg(long, short = 'b', action = ArgAction::Count)]
    balls: u8,

    /// Directory containing corner-pocket.png and center-pocket.png
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Print the computed layout as JSON instead of rendering
    #[arg(long, action = ArgAction::SetTrue)]
    print_layout: bool,

    /// Write the documented example config and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "print_layout")]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Guides,
    Balls,
}

/// Returns the overlay triggers in command-line order.
fn overlay_triggers(matches: &ArgMatches) -> Vec<Overlay> {
    matches
        .get_many::<clap::Id>("overlays")
        .into_iter()
        .flatten()
        .filter_map(|id| match id.as_str() {
            "guides" => Some(Overlay::Guides),
            "balls" => Some(Overlay::Balls),
            _ => None,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                log::error!("Config file {} does not exist", path.display());
                return Err(anyhow::anyhow!("Config file not found"));
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };

    if let Some(dir) = cli.assets {
        config.assets.directory = dir;
    }

    if cli.print_layout {
        let report = LayoutReport::new(&config.table);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let pockets = assets::load_pocket_images_blocking(&config.assets)?;
    let mut canvas = Canvas::new(&config.table, &pockets).context("Failed to create canvas")?;

    log::debug!(
        "{} guides and {} balls triggers requested",
        cli.guides, cli.balls
    );
    // Overlays stack in the order the triggers were given
    for trigger in overlay_triggers(&matches) {
        match trigger {
            Overlay::Guides => {
                if canvas.show_guides() {
                    log::info!("Drew helper guides");
                }
            }
            Overlay::Balls => {
                if canvas.show_balls() {
                    log::info!("Drew colours and reds");
                }
            }
        }
    }

    let path = cli
        .output
        .unwrap_or_else(|| output::default_output_path(&config.output));
    let written = output::save_png(&canvas, &path)?;
    println!("{}", written.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers(args: &[&str]) -> Vec<Overlay> {
        let matches = Cli::command()
            .try_get_matches_from(std::iter::once("snooker-table").chain(args.iter().copied()))
            .unwrap();
        overlay_triggers(&matches)
    }

    #[test]
    fn overlay_triggers_follow_argument_order() {
        assert_eq!(triggers(&["-b", "-g"]), vec![Overlay::Balls, Overlay::Guides]);
        assert_eq!(triggers(&["--guides", "--balls"]), vec![Overlay::Guides, Overlay::Balls]);
        assert_eq!(
            triggers(&["-gbg"]),
            vec![Overlay::Guides, Overlay::Balls, Overlay::Guides]
        );
        assert!(triggers(&["--print-layout"]).is_empty());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
