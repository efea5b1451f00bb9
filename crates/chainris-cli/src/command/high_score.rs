use std::path::PathBuf;

use anyhow::Context as _;

use crate::highscore::HighScoreStore;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HighScoreArg {
    #[command(subcommand)]
    action: HighScoreAction,
    /// High score file (defaults to $HOME/.chainris/highscore.json)
    #[clap(long, global = true)]
    high_score_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum HighScoreAction {
    /// Print the stored record
    Show,
    /// Delete the stored record
    Reset,
}

pub(crate) fn run(arg: &HighScoreArg) -> anyhow::Result<()> {
    let HighScoreArg {
        action,
        high_score_file,
    } = arg;

    let store = HighScoreStore::open(high_score_file.clone());
    let location = store
        .path()
        .map_or_else(|| "<none>".to_owned(), |path| path.display().to_string());

    match action {
        HighScoreAction::Show => {
            let record = store
                .load()
                .with_context(|| format!("Failed to load high score from {location}"))?;
            println!("Score:  {}", record.score);
            println!("Level:  {}", record.level);
            println!("Chains: {}", record.chains);
            if let Some(recorded_at) = record.recorded_at {
                println!("Date:   {}", recorded_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        HighScoreAction::Reset => {
            let removed = store
                .reset()
                .with_context(|| format!("Failed to reset high score at {location}"))?;
            if removed {
                eprintln!("Removed {location}");
            } else {
                eprintln!("No high score stored at {location}");
            }
        }
    }
    Ok(())
}
