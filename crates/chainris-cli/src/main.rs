mod command;
mod highscore;
mod input;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
