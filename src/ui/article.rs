//! Full-screen article view: story body, comment thread, compose form.

use crate::app::{App, ComposeField, ComposeState};
use crate::storage::Comment;
use crate::util::wrap_text;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the article view for the currently open story.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.open_article.as_deref() else {
        return;
    };

    let Some(article) = app.catalog.find(id) else {
        render_not_found(f, app, area);
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        article.title.clone(),
        app.style("article_heading"),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{} · {} · {}",
            article.author, article.date, article.category
        ),
        app.style("article_meta"),
    )));
    lines.push(Line::from(""));

    for paragraph in &article.content {
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(wrapped, app.style("article_body"))));
        }
        lines.push(Line::from(""));
    }

    // Comment thread, oldest first
    lines.push(Line::from(Span::styled(
        format!("Comments ({})", app.comments.len()),
        app.style("article_heading"),
    )));
    lines.push(Line::from(""));

    if app.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet. Press c to write one.",
            app.style("article_meta"),
        )));
    } else {
        for comment in &app.comments {
            push_comment(&mut lines, app, comment, width);
        }
    }

    let scroll = app.scroll_offset.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(" Story "),
        );
    f.render_widget(paragraph, area);

    if let Some(form) = &app.compose {
        render_compose_overlay(f, app, form, area);
    }
}

fn push_comment(lines: &mut Vec<Line>, app: &App, comment: &Comment, width: usize) {
    lines.push(Line::from(vec![
        Span::styled(comment.author.clone(), app.style("comment_author")),
        Span::styled(
            format!("  {}", format_timestamp(comment.timestamp)),
            app.style("comment_timestamp"),
        ),
    ]));
    for wrapped in wrap_text(&comment.text, width) {
        lines.push(Line::from(Span::styled(wrapped, app.style("comment_text"))));
    }
    lines.push(Line::from(""));
}

/// Format a millisecond epoch timestamp in the reader's local time zone.
fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_default()
}

/// Unknown article id: the share-link equivalent of a 404.
fn render_not_found(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Story not found", app.style("not_found"))),
        Line::from(""),
        Line::from(Span::styled(
            "The story you are looking for does not exist or was removed.",
            app.style("article_meta"),
        )),
        Line::from(Span::styled(
            "Press b or Esc to go back to the front page.",
            app.style("article_meta"),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(" Story "),
        );
    f.render_widget(paragraph, area);
}

/// Render the comment compose form as a centered overlay.
fn render_compose_overlay(f: &mut Frame, app: &App, form: &ComposeState, area: Rect) {
    let width = 60u16.min(area.width.saturating_sub(4));
    let height = 8u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let author_marker = if form.field == ComposeField::Author {
        "> "
    } else {
        "  "
    };
    let text_marker = if form.field == ComposeField::Text {
        "> "
    } else {
        "  "
    };
    let author_cursor = if form.field == ComposeField::Author {
        "_"
    } else {
        ""
    };
    let text_cursor = if form.field == ComposeField::Text {
        "_"
    } else {
        ""
    };

    let text = format!(
        "{}Name: {}{}\n{}Comment: {}{}\n\n(Tab) Switch field  (Enter) Post  (Esc) Cancel",
        author_marker, form.author, author_cursor, text_marker, form.text, text_cursor
    );

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(" Add a Comment "),
        )
        .style(app.style("article_body"));

    f.render_widget(paragraph, overlay);
}
