//! Rendering logic for the application
//!
//! Lays out the title bar, the navigation pane, the current page and the
//! footer, then draws overlays (color dialog, notice) on top.

use super::core::App;
use super::state::{Focus, Page};
use crate::tui::constants::{
    FOOTER_HEIGHT, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, NAV_WIDTH, TITLE_BAR_HEIGHT,
};
use crate::tui::keybindings::KeyContext;
use crate::tui::views::{self, helpers::render_too_small};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let size = (area.width, area.height);
        if self.ui_state.cached_terminal_size != Some(size) {
            tracing::debug!("Terminal size is now {}x{}", size.0, size.1);
            self.ui_state.cached_terminal_size = Some(size);
        }

        f.render_widget(Block::default().style(self.theme.window_style()), area);

        if area.width < MIN_TERMINAL_WIDTH || area.height < MIN_TERMINAL_HEIGHT {
            render_too_small(f, area, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, &self.theme);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        views::render_title_bar(f, rows[0], self.mica_active, &self.theme);
        views::render_navigation(
            f,
            columns[0],
            self.ui_state.page,
            self.ui_state.focus == Focus::Navigation,
            &self.theme,
        );

        let content = columns[1];
        match self.ui_state.page {
            Page::Home => views::render_home(f, content, &self.theme),
            Page::Settings => {
                self.settings.scroll_to_selection(content.height);
                views::render_settings(
                    f,
                    content,
                    &self.settings,
                    &self.store,
                    &self.theme,
                    self.ui_state.focus == Focus::Content,
                );
            }
        }

        views::render_footer(f, rows[2], self.key_context(), &self.theme);

        if let Some(dialog) = self.settings.dialog() {
            views::render_color_dialog(f, area, dialog, &self.theme);
        }
        if let Some(notification) = &self.ui_state.notification {
            views::render_info_bar(f, rows[1], notification, &self.theme);
        }
    }

    fn key_context(&self) -> KeyContext {
        if self.settings.dialog().is_some() {
            KeyContext::Dialog
        } else {
            match self.ui_state.focus {
                Focus::Navigation => KeyContext::Navigation,
                Focus::Content => KeyContext::Content,
            }
        }
    }
}
