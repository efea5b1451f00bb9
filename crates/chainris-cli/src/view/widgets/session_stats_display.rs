use std::iter;

use chainris_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

pub struct SessionStatsDisplay<'a> {
    session: &'a GameSession,
    high_score: usize,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            high_score: 0,
            block: None,
        }
    }

    /// Best score to show next to the current one.
    pub fn high_score(self, high_score: usize) -> Self {
        Self { high_score, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = fn(&SessionStatsDisplay<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(|this| this.session.stats().score().to_string()),
    Row::FullLabel("HIGH SCORE:"),
    Row::FullValue(|this| usize::max(this.high_score, this.session.stats().score()).to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", |this| this.session.stats().level().to_string()),
    Row::LabelValue("CHAINS:", |this| {
        this.session.stats().cleared_chains().to_string()
    }),
    Row::LabelValue("MAX:", |this| this.session.stats().max_chain().to_string()),
    Row::LabelValue("PAIRS:", |this| {
        this.session.stats().completed_pairs().to_string()
    }),
];

impl SessionStatsDisplay<'_> {
    fn render_row(&self, row: Row, area: Rect, buf: &mut Buffer) {
        let (label, value) = match row {
            Row::Empty => return,
            Row::FullLabel(label) => (Some(label), None),
            Row::FullValue(value) => (None, Some(value(self))),
            Row::LabelValue(label, value) => (Some(label), Some(value(self))),
        };
        if let Some(label) = label {
            Line::styled(label, style::DEFAULT)
                .left_aligned()
                .render(area, buf);
        }
        // Values share the line with their label, flushed right.
        if let Some(value) = value {
            Line::styled(value, style::DEFAULT)
                .right_aligned()
                .render(area, buf);
        }
    }
}

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        for (&row, y) in iter::zip(ROWS, inner.top()..inner.bottom()) {
            self.render_row(row, Rect { y, height: 1, ..inner }, buf);
        }
    }
}
