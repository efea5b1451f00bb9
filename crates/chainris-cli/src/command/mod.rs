use clap::{Parser, Subcommand};

use self::{high_score::HighScoreArg, play::PlayArg};

mod high_score;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Show or reset the stored high score
    HighScore(#[clap(flatten)] HighScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::HighScore(arg) => high_score::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_play_is_default() {
        let args = CommandArgs::try_parse_from(["chainris"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let result = CommandArgs::try_parse_from(["chainris", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
