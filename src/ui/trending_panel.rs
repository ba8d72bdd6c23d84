//! Trending topics sidebar.

use crate::app::{App, Focus};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the trending panel. While the updater is mid-cycle the whole panel
/// renders dimmed, standing in for the fade the refresh animation implies.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Trending;
    let inner_width = area.width.saturating_sub(6) as usize;

    let dim = app.style("trending_updating");

    let items: Vec<ListItem> = app
        .trending
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let rank_style = if app.trending_updating {
                dim
            } else {
                app.style("trending_rank")
            };
            let title_style = if app.trending_updating {
                dim
            } else {
                app.style("trending_title")
            };
            let views_style = if app.trending_updating {
                dim
            } else {
                app.style("trending_views")
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), rank_style),
                    Span::styled(
                        truncate_to_width(&topic.title, inner_width).into_owned(),
                        title_style,
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {} reading now", topic.views),
                    views_style,
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let title = if app.trending_updating {
        " Trending (updating…) "
    } else {
        " Trending "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(list, area);
}
