use crate::app::{App, View};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.compose.is_some() {
        Cow::Borrowed("[Tab]switch field [Enter]post [Esc]cancel")
    } else if app.search_mode {
        Cow::Borrowed("Type to search | ESC cancel | ENTER confirm")
    } else {
        match app.view {
            View::Home => Cow::Borrowed(
                "[j/k]move [Enter]open [m]ore [[/]]category [/]search [Tab]focus [T]heme [?]help [q]uit",
            ),
            View::Article => {
                Cow::Borrowed("[b]ack [j/k]scroll [c]omment [y]share [T]heme [q]uit")
            }
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
