//! Keyboard input handling.
//!
//! Text-entry modes (search, compose) capture printable keys directly;
//! everything else dispatches through the keybinding registry.

use crate::app::{App, Focus, View};
use crate::keybindings::Action as KeyAction;
use crate::util::MAX_SEARCH_QUERY_LENGTH;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::loop_runner::Action;

/// Lines moved by a page scroll in the article view.
const PAGE_SCROLL: usize = 10;

/// Caps on compose form inputs.
const MAX_AUTHOR_LENGTH: usize = 50;
const MAX_COMMENT_LENGTH: usize = 500;

/// Top-level key dispatch.
pub async fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // Text-entry modes swallow printable input before registry dispatch
    if app.compose.is_some() {
        return handle_compose_input(app, code).await;
    }
    if app.search_mode {
        return handle_search_input(app, code, modifiers);
    }

    // Help overlay: close keys only, everything else is swallowed
    if app.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return Ok(Action::Continue);
    }

    let Some(action) = app.keybindings.action_for_key(code, modifiers, app.context()) else {
        return Ok(Action::Continue);
    };

    match action {
        KeyAction::Quit => return Ok(Action::Quit),
        KeyAction::NavDown => app.nav_down(),
        KeyAction::NavUp => app.nav_up(),
        KeyAction::CycleFocus => app.cycle_focus(),
        KeyAction::Select => {
            if app.view == View::Home && app.focus == Focus::Feed {
                app.open_selected().await?;
            }
        }
        KeyAction::Back => match app.view {
            View::Article => app.close_article(),
            View::Home => {
                // Esc on Home clears an applied search filter, if any
                if !app.feed.query().is_empty() || !app.search_input.is_empty() {
                    app.exit_search();
                }
            }
        },
        KeyAction::EnterSearch => app.enter_search(),
        KeyAction::ExitSearch => app.exit_search(),
        KeyAction::CommitSearch => app.commit_search(),
        KeyAction::LoadMore => app.load_more(),
        KeyAction::NextCategory => app.next_category(),
        KeyAction::PrevCategory => app.prev_category(),
        KeyAction::CycleTheme => {
            let name = app.cycle_theme();
            let stored = app.theme_variant.storage_name();
            if let Err(e) = app.db.set_preference("theme.variant", stored).await {
                tracing::warn!(error = %e, "Failed to persist theme preference");
            }
            app.set_status(format!("Theme: {}", name));
        }
        KeyAction::ShareLink => app.share_current(),
        KeyAction::Compose => app.start_compose(),
        KeyAction::ShowHelp => app.show_help = true,
        KeyAction::ScrollDown => app.scroll_down(1),
        KeyAction::ScrollUp => app.scroll_up(1),
        KeyAction::PageDown => app.scroll_down(PAGE_SCROLL),
        KeyAction::PageUp => app.scroll_up(PAGE_SCROLL),
    }

    Ok(Action::Continue)
}

/// Keys while the comment compose form is open.
async fn handle_compose_input(app: &mut App, code: KeyCode) -> Result<Action> {
    match code {
        KeyCode::Esc => app.cancel_compose(),
        KeyCode::Tab => {
            if let Some(form) = app.compose.as_mut() {
                form.toggle_field();
            }
        }
        KeyCode::Enter => app.submit_comment().await?,
        KeyCode::Backspace => {
            if let Some(form) = app.compose.as_mut() {
                form.active_input().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.compose.as_mut() {
                let limit = match form.field {
                    crate::app::ComposeField::Author => MAX_AUTHOR_LENGTH,
                    crate::app::ComposeField::Text => MAX_COMMENT_LENGTH,
                };
                let input = form.active_input();
                if input.chars().count() < limit {
                    input.push(c);
                }
            }
        }
        _ => {}
    }
    Ok(Action::Continue)
}

/// Keys while the search input is live.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    match code {
        KeyCode::Esc => app.exit_search(),
        KeyCode::Enter => app.commit_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
            app.queue_search();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if app.search_input.chars().count() >= MAX_SEARCH_QUERY_LENGTH {
                app.set_status(format!(
                    "Search query too long (max {} chars)",
                    MAX_SEARCH_QUERY_LENGTH
                ));
            } else {
                app.search_input.push(c);
                app.queue_search();
            }
        }
        _ => {}
    }
    Ok(Action::Continue)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::Database;
    use crate::theme::ThemeVariant;

    async fn test_app() -> App {
        let db = Database::open(":memory:").await.unwrap();
        App::new(db, Config::default(), ThemeVariant::Dark)
    }

    async fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE).await.unwrap()
    }

    #[tokio::test]
    async fn q_quits_from_home() {
        let mut app = test_app().await;
        assert!(matches!(press(&mut app, KeyCode::Char('q')).await, Action::Quit));
    }

    #[tokio::test]
    async fn enter_opens_selected_card() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('j')).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.view, View::Article);
        assert_eq!(app.open_article.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn search_typing_is_captured() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('/')).await;
        assert!(app.search_mode);

        for c in "mars".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        assert_eq!(app.search_input, "mars");
        assert!(app.pending_search.is_some());

        // 'q' is input text while searching, not quit
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')).await,
            Action::Continue
        ));
        assert_eq!(app.search_input, "marsq");
    }

    #[tokio::test]
    async fn search_esc_clears_filter() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('/')).await;
        for c in "mars".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        press(&mut app, KeyCode::Esc).await;
        assert!(!app.search_mode);
        assert!(app.search_input.is_empty());
        assert_eq!(app.feed.view().total(), 6);
    }

    #[tokio::test]
    async fn compose_captures_text_and_submits() {
        let mut app = test_app().await;
        app.open_article("1").await.unwrap();
        press(&mut app, KeyCode::Char('c')).await;
        assert!(app.compose.is_some());

        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        press(&mut app, KeyCode::Tab).await;
        for c in "Nice".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        press(&mut app, KeyCode::Enter).await;

        assert!(app.compose.is_none());
        assert_eq!(app.comments.len(), 1);
        assert_eq!(app.comments[0].author, "Ada");
        assert_eq!(app.comments[0].text, "Nice");
    }

    #[tokio::test]
    async fn compose_esc_discards() {
        let mut app = test_app().await;
        app.open_article("1").await.unwrap();
        press(&mut app, KeyCode::Char('c')).await;
        press(&mut app, KeyCode::Char('x')).await;
        press(&mut app, KeyCode::Esc).await;

        assert!(app.compose.is_none());
        assert!(app.comments.is_empty());
        // Still in the article view after discarding
        assert_eq!(app.view, View::Article);
    }

    #[tokio::test]
    async fn help_overlay_swallows_keys() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('?')).await;
        assert!(app.show_help);

        // Navigation keys do nothing while help is open
        press(&mut app, KeyCode::Char('j')).await;
        assert_eq!(app.selected_card, 0);

        press(&mut app, KeyCode::Char('?')).await;
        assert!(!app.show_help);
    }

    #[tokio::test]
    async fn theme_key_persists_preference() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('T')).await;
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert_eq!(
            app.db.get_preference("theme.variant").await.unwrap(),
            Some("light".to_string())
        );
    }

    #[tokio::test]
    async fn esc_on_home_clears_applied_search() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('/')).await;
        for c in "mars".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        press(&mut app, KeyCode::Enter).await; // commit, filter applied
        assert!(app.feed.view().total() < 6);

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.feed.view().total(), 6);
    }

    #[tokio::test]
    async fn back_closes_article() {
        let mut app = test_app().await;
        app.open_article("3").await.unwrap();
        press(&mut app, KeyCode::Char('b')).await;
        assert_eq!(app.view, View::Home);
    }

    #[tokio::test]
    async fn load_more_key() {
        let mut app = test_app().await;
        press(&mut app, KeyCode::Char('m')).await;
        assert_eq!(app.feed.view().visible(), 6);
    }
}
