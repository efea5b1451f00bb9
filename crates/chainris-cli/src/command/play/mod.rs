use std::path::PathBuf;

use chainris_engine::{PairSeed, Palette};

use crate::{
    command::play::{app::PlayApp, scoreboard::Scoreboard},
    highscore::HighScoreStore,
    tui::Tui,
};

mod app;
mod scoreboard;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Number of colors (4 or 5); other counts play with 4. Shows a menu when omitted
    #[clap(long)]
    colors: Option<usize>,
    /// Seed for the pair sequence (32 hex digits)
    #[clap(long)]
    seed: Option<PairSeed>,
    /// High score file (defaults to $HOME/.chainris/highscore.json)
    #[clap(long)]
    high_score_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        colors,
        seed,
        high_score_file,
    } = arg;

    let palette = colors.map(|count| {
        let palette = Palette::from_color_count(count);
        if palette.color_count() != count {
            eprintln!(
                "Warning: {count} colors are not supported, playing with {}",
                palette.color_count()
            );
        }
        palette
    });
    let scoreboard = Scoreboard::load(HighScoreStore::open(high_score_file.clone()));

    let mut app = PlayApp::new(palette, *seed, scoreboard);
    Tui::new().run(&mut app)?;

    for notice in app.into_notices() {
        eprintln!("{notice}");
    }
    Ok(())
}
