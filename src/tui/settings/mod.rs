//! Settings page
//!
//! Owns the card groups, the keyboard selection and the style sheet of the
//! page. The page subscribes to the configuration store on construction and
//! reacts to theme changes by reloading its style sheet, and to restart-only
//! changes by raising the restart notice.

pub mod cards;
pub mod color_dialog;

use crate::config::{
    Appearance, ConfigEvent, ConfigStore, ItemChange, MicaEnabledItem, StyleSheet,
    StyleSheetError, StyleSheetSource, ThemeColorItem, ThemeMode, ThemeModeItem,
};
use crate::host::HostCapabilities;
use crate::links::{self, FEEDBACK_URL, HELP_URL, LinkOpener};
use crate::tui::constants::{CARD_HEIGHT, GROUP_TITLE_HEIGHT, PAGE_HEADING_HEIGHT};
use crate::tui::notification::Notification;
use cards::{
    CardAction, CardControl, ColorCard, HyperlinkCard, OptionsCard, PushCard, SettingCard,
    SettingCardGroup, SwitchCard,
};
use color_dialog::ColorDialog;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc::Receiver;

/// One vertical slot of the page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    Heading,
    GroupTitle { group: usize },
    Card { group: usize, card: usize, index: usize },
}

impl PageRow {
    pub fn height(&self) -> u16 {
        match self {
            PageRow::Heading => PAGE_HEADING_HEIGHT,
            PageRow::GroupTitle { .. } => GROUP_TITLE_HEIGHT,
            PageRow::Card { .. } => CARD_HEIGHT,
        }
    }
}

pub struct SettingsView {
    groups: Vec<SettingCardGroup>,
    selected: usize,
    scroll_offset: u16,
    style: StyleSheet,
    dialog: Option<ColorDialog>,
    events: Receiver<ConfigEvent>,
}

impl SettingsView {
    /// Build the page and load the style sheet for the current theme
    pub fn new(
        store: &mut ConfigStore,
        host: &dyn HostCapabilities,
        styles: &dyn StyleSheetSource,
    ) -> Result<Self, StyleSheetError> {
        let appearance = Appearance::resolve(store.get(ThemeModeItem), host.prefers_dark());
        let style = styles.load(appearance)?;

        let mut mica = SettingCard::new(
            "◐",
            "Mica effect",
            "Apply semi transparent to windows and surfaces",
            CardControl::Switch(SwitchCard {
                item: MicaEnabledItem,
            }),
        );
        if !host.supports_mica() {
            tracing::debug!("Mica is not supported on this host, disabling its card");
            mica = mica.disabled();
        }

        let personalization = SettingCardGroup {
            title: "Personalization",
            cards: vec![
                mica,
                SettingCard::new(
                    "◑",
                    "Application theme",
                    "Change the appearance of your application",
                    CardControl::Options(OptionsCard {
                        item: ThemeModeItem,
                        options: ThemeMode::ALL.iter().map(|m| (*m, m.label())).collect(),
                    }),
                ),
                SettingCard::new(
                    "◆",
                    "Theme color",
                    "Change the theme color of your application",
                    CardControl::Color(ColorCard {
                        item: ThemeColorItem,
                    }),
                ),
            ],
        };

        let about = SettingCardGroup {
            title: "About",
            cards: vec![
                SettingCard::new(
                    "?",
                    "Help",
                    "Discover new features and learn useful tips about the application",
                    CardControl::Hyperlink(HyperlinkCard {
                        text: "Open help page",
                        url: HELP_URL,
                    }),
                ),
                SettingCard::new(
                    "✉",
                    "Provide feedback",
                    "Help us improve the application by providing feedback",
                    CardControl::Push(PushCard {
                        text: "Provide feedback",
                        action: CardAction::OpenUrl(FEEDBACK_URL),
                    }),
                ),
                SettingCard::new(
                    "ℹ",
                    "About",
                    links::about_text(),
                    CardControl::Push(PushCard {
                        text: "Check update",
                        action: CardAction::CheckUpdate,
                    }),
                ),
            ],
        };

        Ok(Self {
            groups: vec![personalization, about],
            selected: 0,
            scroll_offset: 0,
            style,
            dialog: None,
            events: store.subscribe(),
        })
    }

    pub fn groups(&self) -> &[SettingCardGroup] {
        &self.groups
    }

    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    pub fn dialog(&self) -> Option<&ColorDialog> {
        self.dialog.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn cards(&self) -> impl Iterator<Item = &SettingCard> {
        self.groups.iter().flat_map(|g| g.cards.iter())
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    pub fn selected_card(&self) -> Option<&SettingCard> {
        self.cards().nth(self.selected)
    }

    /// Card with the given title
    pub fn card(&self, title: &str) -> Option<&SettingCard> {
        self.cards().find(|c| c.title == title)
    }

    /// Move the selection to the card with the given title
    pub fn select_card(&mut self, title: &str) -> bool {
        let found = self.cards().position(|c| c.title == title);
        match found {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.card_count() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Close the color dialog; `false` when none was open
    pub fn close_dialog(&mut self) -> bool {
        self.dialog.take().is_some()
    }

    /// Handle a key while the page has focus
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        store: &mut ConfigStore,
        opener: &dyn LinkOpener,
    ) -> bool {
        if self.dialog.is_some() {
            self.handle_dialog_key(key, store);
            return true;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.card_count().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(store, opener),
            KeyCode::Left | KeyCode::Char('h') => self.change(store, false),
            KeyCode::Right | KeyCode::Char('l') => self.change(store, true),
            _ => return false,
        }
        true
    }

    fn activate(&mut self, store: &mut ConfigStore, opener: &dyn LinkOpener) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if !card.enabled {
            tracing::debug!("Ignoring activation of disabled card '{}'", card.title);
            return;
        }

        match card.control.clone() {
            CardControl::Switch(switch) => {
                switch.toggle(store);
            }
            CardControl::Options(options) => {
                options.select_next(store);
            }
            CardControl::Color(color) => {
                self.dialog = Some(ColorDialog::new(&color.current(store)));
            }
            CardControl::Hyperlink(link) => opener.open(link.url),
            CardControl::Push(push) => match push.action {
                CardAction::OpenUrl(url) => opener.open(url),
                CardAction::CheckUpdate => tracing::debug!("Update check requested"),
            },
        }
    }

    /// Left/right on the selected card
    fn change(&mut self, store: &mut ConfigStore, forward: bool) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if !card.enabled {
            return;
        }

        match card.control.clone() {
            CardControl::Switch(switch) => {
                if switch.is_checked(store) != forward {
                    switch.toggle(store);
                }
            }
            CardControl::Options(options) => {
                if forward {
                    options.select_next(store);
                } else {
                    options.select_previous(store);
                }
            }
            CardControl::Color(color) => {
                if forward {
                    self.dialog = Some(ColorDialog::new(&color.current(store)));
                } else {
                    color.use_default(store);
                }
            }
            CardControl::Hyperlink(_) | CardControl::Push(_) => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, store: &mut ConfigStore) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.dialog = None,
            KeyCode::Enter => {
                let color_card = ColorCard {
                    item: ThemeColorItem,
                };
                let candidate = dialog.candidate();
                if !color_card.is_valid(store, &candidate) {
                    tracing::debug!("Color dialog refused {}", candidate);
                    dialog.reject();
                } else if color_card.apply(store, candidate) {
                    self.dialog = None;
                }
            }
            KeyCode::Left => dialog.previous_preset(),
            KeyCode::Right | KeyCode::Tab => dialog.next_preset(),
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) => {
                dialog.push_char(c);
            }
            _ => {}
        }
    }

    /// Drain pending configuration events
    ///
    /// Reloads the style sheet once per theme change and returns the notices
    /// the page wants shown.
    pub fn process_events(
        &mut self,
        host: &dyn HostCapabilities,
        styles: &dyn StyleSheetSource,
    ) -> Vec<Notification> {
        let mut notices = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            match event {
                ConfigEvent::Changed(ItemChange::ThemeMode(mode)) => {
                    let appearance = Appearance::resolve(mode, host.prefers_dark());
                    if let Err(e) = self.reload_style(appearance, styles) {
                        tracing::warn!("Keeping previous style sheet: {}", e);
                        notices.push(Notification::error("Style sheet", e.to_string()));
                    }
                }
                ConfigEvent::RestartRequired => notices.push(Notification::restart_required()),
                ConfigEvent::Changed(_) => {}
            }
        }
        notices
    }

    fn reload_style(
        &mut self,
        appearance: Appearance,
        styles: &dyn StyleSheetSource,
    ) -> Result<(), StyleSheetError> {
        self.style = styles.load(appearance)?;
        tracing::debug!("Settings style sheet reloaded for {} theme", appearance.as_str());
        Ok(())
    }

    /// Page layout as `(top, row)` pairs in page coordinates
    pub fn rows(&self) -> Vec<(u16, PageRow)> {
        let mut rows = Vec::new();
        let mut y = 0;
        let mut push = |row: PageRow| {
            rows.push((y, row));
            y += row.height();
        };

        push(PageRow::Heading);
        let mut index = 0;
        for (group, g) in self.groups.iter().enumerate() {
            push(PageRow::GroupTitle { group });
            for card in 0..g.cards.len() {
                push(PageRow::Card { group, card, index });
                index += 1;
            }
        }
        rows
    }

    /// Adjust the scroll offset so the selected card fits in `viewport` rows
    pub fn scroll_to_selection(&mut self, viewport: u16) {
        let rows = self.rows();
        let Some(&(card_top, row)) = rows
            .iter()
            .find(|(_, row)| matches!(row, PageRow::Card { index, .. } if *index == self.selected))
        else {
            return;
        };

        // Keep the group title in view with the first card of a group
        let top = match row {
            _ if self.selected == 0 => 0,
            PageRow::Card { card: 0, .. } => card_top.saturating_sub(GROUP_TITLE_HEIGHT),
            _ => card_top,
        };
        let bottom = card_top + CARD_HEIGHT;

        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + viewport {
            self.scroll_offset = bottom.saturating_sub(viewport).min(card_top);
        }
    }
}
