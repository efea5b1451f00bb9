use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::widgets::style;

/// Keys and what they do, e.g. `(&["Z", "X"], "Rotate")`.
pub type KeyBinding = (&'static [&'static str], &'static str);

/// One-line help such as `←/→ Move | P Pause`.
#[derive(Debug)]
pub struct KeyBindingDisplay {
    bindings: &'static [KeyBinding],
}

impl KeyBindingDisplay {
    pub fn new(bindings: &'static [KeyBinding]) -> Self {
        Self { bindings }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![];
        for (i, &(keys, desc)) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::HINT));
            }
            for (j, &key) in keys.iter().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", style::HINT));
                }
                spans.push(Span::styled(key, style::KEY));
            }
            spans.push(Span::styled(format!(" {desc}"), style::DEFAULT));
        }
        spans
    }
}

impl Widget for KeyBindingDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.spans()).centered().render(area, buf);
    }
}
