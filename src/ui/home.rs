//! Home view widgets: hero banner, category filter bar, and feed cards.

use crate::app::{App, Focus};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the hero banner for the featured story.
pub fn render_hero(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let hero = app.catalog.hero();
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![Line::from(vec![
        Span::styled(" FEATURED ", app.style("hero_tag")),
        Span::raw("  "),
        Span::styled(
            truncate_to_width(&hero.title, inner_width.saturating_sub(12)).into_owned(),
            app.style("hero_title"),
        ),
    ])];
    lines.push(Line::from(Span::styled(
        truncate_to_width(&hero.excerpt, inner_width).into_owned(),
        app.style("card_excerpt"),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} · {} · {}", hero.author, hero.date, hero.category),
        app.style("hero_meta"),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border"))
            .title(" Daily Chronicle "),
    );
    f.render_widget(paragraph, area);
}

/// Render the one-line category filter bar, with the live search input
/// appended when search mode is active.
pub fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, category) in app.categories.iter().enumerate() {
        let style = if i == app.selected_category {
            app.style("filter_active")
        } else {
            app.style("filter_normal")
        };
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }

    if app.search_mode {
        spans.push(Span::styled(
            format!("  Search: {}_", app.search_input),
            app.style("filter_active"),
        ));
    } else if !app.feed.query().is_empty() {
        spans.push(Span::styled(
            format!("  Filter: \"{}\"", app.feed.query()),
            app.style("card_category"),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the feed card list with its "showing X of Y" footer line.
pub fn render_cards(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Feed;
    let view = app.feed.view();
    let card_width = area.width.saturating_sub(4) as usize;

    let mut items: Vec<ListItem> = Vec::new();

    if view.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "No stories match your filters",
            app.style("not_found"),
        ))));
    } else {
        for (i, article) in view.items().iter().enumerate() {
            let title_style = if is_focused && i == app.selected_card {
                app.style("card_selected")
            } else {
                app.style("card_title")
            };

            let mut lines = vec![Line::from(Span::styled(
                truncate_to_width(&article.title, card_width).into_owned(),
                title_style,
            ))];
            lines.push(Line::from(vec![
                Span::styled(article.category.clone(), app.style("card_category")),
                Span::styled(
                    format!("  {} · {}", article.author, article.date),
                    app.style("card_meta"),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                truncate_to_width(&article.excerpt, card_width).into_owned(),
                app.style("card_excerpt"),
            )));
            lines.push(Line::from(""));

            items.push(ListItem::new(lines));
        }

        // Footer line inside the list so it scrolls with the cards
        let footer = if view.has_more() {
            format!(
                "Showing {} of {} — press m for more",
                view.visible(),
                view.total()
            )
        } else {
            format!("Showing all {} stories", view.total())
        };
        items.push(ListItem::new(Line::from(Span::styled(
            footer,
            app.style("card_meta"),
        ))));
    }

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Top Stories "),
    );

    f.render_widget(list, area);
}
