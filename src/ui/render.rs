use crate::ui::app::App;
use crate::ui::blog::{BlogState, CommentField, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{ACCENT, ACCENT_ALT, GLOBAL_BORDER, MUTED, SELECTION_BG, TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Lines per article entry in the list (title, excerpt, meta, separator).
const ENTRY_HEIGHT: usize = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let blog = app.blog();

    frame.render_widget(Header::new().widget(blog), header);
    frame.render_widget(Clear, body);
    match blog.screen {
        Screen::List => draw_list(frame, blog, body),
        Screen::Detail { .. } => draw_detail(frame, blog, body),
    }
    frame.render_widget(Footer::new().widget(&blog.screen, footer), footer);
}

fn draw_list(frame: &mut Frame<'_>, blog: &BlogState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    frame.render_widget(categories_bar(blog), chunks[0]);

    let visible = blog.visible();
    if visible.is_empty() {
        let empty = Paragraph::new("Нет статей в этой категории")
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_rect(60, 20, chunks[1]));
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (idx, article) in visible.iter().enumerate() {
        let selected = idx == blog.list_selection;
        let marker = if selected { " ▸ " } else { "   " };
        let mut title = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                article.title.clone(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);
        let mut excerpt = Line::from(Span::styled(
            format!("   {}", article.excerpt),
            Style::default().fg(MUTED),
        ));
        let mut meta = Line::from(vec![
            Span::styled(
                format!("   [{}]", article.category),
                Style::default().fg(ACCENT_ALT),
            ),
            Span::styled(
                format!("  {}  ·  {}", article.date, article.read_time),
                Style::default().fg(MUTED),
            ),
            Span::styled(
                format!("  💬 {}", article.comments.len()),
                Style::default().fg(MUTED),
            ),
        ]);
        if selected {
            let highlight = Style::default().bg(SELECTION_BG);
            title = title.style(highlight);
            excerpt = excerpt.style(highlight);
            meta = meta.style(highlight);
        }
        lines.push(title);
        lines.push(excerpt);
        lines.push(meta);
        lines.push(Line::from(""));
    }

    // Keep the selected entry inside the viewport.
    let inner_height = chunks[1].height.saturating_sub(2) as usize;
    let entry_bottom = (blog.list_selection + 1) * ENTRY_HEIGHT;
    let scroll = entry_bottom.saturating_sub(inner_height) as u16;

    let list = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(list, chunks[1]);
}

fn categories_bar(blog: &BlogState) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, category) in blog.store.categories().iter().enumerate() {
        let style = if *category == blog.active_category {
            Style::default()
                .fg(ACCENT)
                .bg(SELECTION_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} {} ", idx + 1, category), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn draw_detail(frame: &mut Frame<'_>, blog: &BlogState, area: Rect) {
    let Some(article) = blog.open_article() else {
        // Unreachable through normal navigation; never worth a crash.
        let not_found = Paragraph::new("Статья не найдена")
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(not_found, centered_rect(50, 20, area));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let article_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" [{}]", article.category),
                Style::default().fg(ACCENT_ALT),
            ),
            Span::styled(
                format!("  {}  ·  {}", article.date, article.read_time),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", article.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", article.excerpt),
            Style::default().fg(TEXT),
        )),
    ];
    let card = Paragraph::new(article_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(card, chunks[0]);

    let mut comment_lines: Vec<Line> = Vec::new();
    if article.comments.is_empty() {
        comment_lines.push(Line::from(Span::styled(
            " Пока нет комментариев",
            Style::default().fg(MUTED),
        )));
    }
    for comment in &article.comments {
        comment_lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", comment.author),
                Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", comment.date), Style::default().fg(MUTED)),
        ]));
        comment_lines.push(Line::from(Span::styled(
            format!(" {}", comment.text),
            Style::default().fg(TEXT),
        )));
        comment_lines.push(Line::from(""));
    }

    // Newest comments stay in view.
    let inner_height = chunks[1].height.saturating_sub(2) as usize;
    let scroll = comment_lines.len().saturating_sub(inner_height) as u16;

    let comments = Paragraph::new(comment_lines).scroll((scroll, 0)).block(
        Block::default()
            .title(Span::styled(
                format!("Комментарии ({})", article.comments.len()),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(comments, chunks[1]);

    let form_lines = vec![
        field_line(
            "Ваше имя:    ",
            &blog.author_draft,
            blog.comment_focus == CommentField::Author,
        ),
        field_line(
            "Комментарий: ",
            &blog.text_draft,
            blog.comment_focus == CommentField::Text,
        ),
    ];
    let form = Paragraph::new(form_lines).block(
        Block::default()
            .title(Span::styled(
                "Добавить комментарий",
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(form, chunks[2]);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(TEXT)
    } else {
        Style::default().fg(MUTED)
    };
    let cursor = if focused { "█" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {label}"), Style::default().fg(MUTED)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}
