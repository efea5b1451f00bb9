use chainris_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::view::widgets::{BoardDisplay, PairDisplay, SessionStatsDisplay, color, style};

/// Board, next pair and statistics of a session side by side.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    high_score: usize,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            high_score: 0,
        }
    }

    pub fn high_score(self, high_score: usize) -> Self {
        Self { high_score, ..self }
    }

    /// Height needed to show everything.
    pub fn height(&self) -> u16 {
        BoardDisplay::new(self.session.board())
            .block(Block::bordered())
            .height()
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let state = self.session.session_state();
        let border = match state {
            SessionState::Playing if !self.session.game_state().is_normal() => color::CYAN,
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(Padding::horizontal(1))
                .border_style(border)
                .style(style::DEFAULT)
        };

        let board = BoardDisplay::new(self.session.board())
            .falling_piece(self.session.falling_piece())
            .ghost(self.session.landing_position())
            .block(Block::bordered().border_style(border).style(style::DEFAULT));
        let next = PairDisplay::new(self.session.next_pair()).block(panel("NEXT"));
        let stats = SessionStatsDisplay::new(self.session)
            .high_score(self.high_score)
            .block(panel("STATS"));

        let [stats_column, board_column, next_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [stats_area] = stats_column.layout(&Layout::vertical([Constraint::Length(
            stats.height(),
        )]));
        let [board_area] = board_column.layout(&Layout::vertical([Constraint::Length(
            board.height(),
        )]));
        let [next_area, chain_area] = next_column.layout(
            &Layout::vertical([Constraint::Length(next.height()), Constraint::Length(1)])
                .spacing(1),
        );

        let board_width = board.width();
        stats.render(stats_area, buf);
        board.render(board_area, buf);
        next.render(next_area, buf);

        let depth = self.session.chain_depth();
        if depth > 0 {
            Line::styled(format!("{depth} CHAIN!"), style::CHAIN)
                .centered()
                .render(chain_area, buf);
        }

        let banner = match state {
            SessionState::Playing => return,
            SessionState::Paused => ("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)),
            SessionState::GameOver => ("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)),
        };
        render_banner(banner, board_area, board_width, buf);
    }
}

/// Three-row banner across the middle of the board.
fn render_banner((text, style): (&str, Style), board_area: Rect, width: u16, buf: &mut Buffer) {
    let area = board_area.centered(Constraint::Length(width), Constraint::Length(3));
    let block = Block::new().style(style);
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    Text::styled(text, style)
        .centered()
        .render(inner.centered_vertically(Constraint::Length(1)), buf);
}
