use crate::ui::blog::BlogState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, blog: &BlogState) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(MUTED);

        let line = Line::from(vec![
            Span::styled("  Блог", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(blog.active_category.clone(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("статьи: {}", blog.visible().len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
