//! Picker screen: the panel in a bordered box plus a help line

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use multiselect::{FuzzyFilter, PanelCommand, PanelContext, PanelProps, PanelState, SelectPanel};
use multiselect_core::{format_key_for_display, Component, EventKind, Keybindings};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{PickerAction, PickerState};

pub struct PickerUi {
    panel: SelectPanel<String>,
}

impl PickerUi {
    pub fn new(keybindings: Keybindings<PanelContext>) -> Self {
        Self {
            panel: SelectPanel::with_keybindings(keybindings),
        }
    }

    pub fn panel(&self) -> &SelectPanel<String> {
        &self.panel
    }

    fn props(state: &PickerState) -> PanelProps<'_, String, PickerAction> {
        PanelProps {
            options: &state.options,
            selected: &state.selected,
            config: &state.panel,
            filter: &FuzzyFilter,
            item_renderer: None,
            is_focused: true,
            on_selected_changed: PickerAction::SelectionDidChange,
        }
    }

    /// Keys the picker claims before the panel sees them
    fn host_key(&self, key: &KeyEvent) -> Option<PickerAction> {
        let searching = self.panel.search_has_focus();
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(PickerAction::Cancel),
            // the panel leaves alt+arrows alone for the host
            (KeyCode::Up | KeyCode::Down, KeyModifiers::ALT) => Some(PickerAction::Confirm),
            (KeyCode::Esc, _) if !searching || self.panel.search_text().is_empty() => {
                Some(PickerAction::Confirm)
            }
            (KeyCode::Char('q'), KeyModifiers::NONE) if !searching => Some(PickerAction::Confirm),
            _ => None,
        }
    }

    pub fn map_event(&mut self, event: &EventKind, state: &PickerState) -> Vec<PickerAction> {
        if let EventKind::Resize(width, height) = event {
            return vec![PickerAction::UiTerminalResize(*width, *height)];
        }
        if let Some(key) = event.as_key() {
            if key.kind != KeyEventKind::Press {
                return Vec::new();
            }
            if let Some(action) = self.host_key(key) {
                return vec![action];
            }
        }

        Component::<PickerAction>::handle_event(&mut self.panel, event, Self::props(state))
            .into_iter()
            .collect()
    }

    pub fn render(&mut self, frame: &mut Frame, state: &PickerState) {
        let [main, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let title = format!(" {} of {} selected ", state.selected.len(), state.options.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(main);
        frame.render_widget(block, main);

        Component::<PickerAction>::render(&mut self.panel, frame, inner, Self::props(state));

        let help = Paragraph::new(help_text(self.panel.keybindings(), state.panel.has_search))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, help_area);
    }

    /// Changes made by the panel itself (search text, focus) need a redraw too
    pub fn needs_render(&self, before: &PanelState) -> bool {
        self.panel.state() != before
    }
}

fn binding(
    keybindings: &Keybindings<PanelContext>,
    command: PanelCommand,
    context: PanelContext,
) -> Option<String> {
    keybindings
        .get_first_keybinding(command.command(), context)
        .map(format_key_for_display)
}

pub fn help_text(keybindings: &Keybindings<PanelContext>, has_search: bool) -> String {
    let mut parts = vec!["↑/↓: move".to_string()];
    if let Some(key) = binding(keybindings, PanelCommand::ToggleRow, PanelContext::List) {
        parts.push(format!("{}: toggle", key));
    }
    if has_search {
        let search = binding(
            keybindings,
            PanelCommand::ToggleSearchFocus,
            PanelContext::List,
        );
        if let Some(key) = search {
            parts.push(format!("{}: search", key));
        }
        if let Some(key) = binding(keybindings, PanelCommand::ClearSearch, PanelContext::Search) {
            parts.push(format!("{}: clear", key));
        }
    }
    parts.push("q/Esc: done".to_string());
    parts.push("^C: cancel".to_string());
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiselect::{default_keybindings, PanelConfig, SelectOption};
    use multiselect_core::testing::{key, RenderHarness};

    fn state() -> PickerState {
        PickerState::new(
            ["Oak", "Pine", "Birch"]
                .iter()
                .map(|l| SelectOption::from_label(*l))
                .collect(),
            PanelConfig::default(),
        )
    }

    fn press(ui: &mut PickerUi, state: &PickerState, spec: &str) -> Vec<PickerAction> {
        ui.map_event(&EventKind::Key(key(spec)), state)
    }

    #[test]
    fn test_help_text_uses_bindings() {
        let text = help_text(&default_keybindings(), true);
        assert!(text.contains("Space: toggle"));
        assert!(text.contains("Tab: search"));
        assert!(text.contains("Esc: clear"));

        let text = help_text(&default_keybindings(), false);
        assert!(!text.contains("search"));
    }

    #[test]
    fn test_quit_keys() {
        let state = state();
        let mut ui = PickerUi::new(default_keybindings());

        assert_eq!(press(&mut ui, &state, "q"), vec![PickerAction::Confirm]);
        assert_eq!(press(&mut ui, &state, "esc"), vec![PickerAction::Confirm]);
        assert_eq!(press(&mut ui, &state, "alt+up"), vec![PickerAction::Confirm]);
        assert_eq!(press(&mut ui, &state, "ctrl+c"), vec![PickerAction::Cancel]);
    }

    #[test]
    fn test_q_and_esc_while_searching() {
        let state = state();
        let mut ui = PickerUi::new(default_keybindings());

        press(&mut ui, &state, "tab");
        assert!(press(&mut ui, &state, "q").is_empty());
        assert_eq!(ui.panel().search_text(), "q");

        // first esc clears the search, the second one leaves
        assert!(press(&mut ui, &state, "esc").is_empty());
        assert_eq!(ui.panel().search_text(), "");
        assert_eq!(press(&mut ui, &state, "esc"), vec![PickerAction::Confirm]);
    }

    #[test]
    fn test_toggle_through_panel() {
        let state = state();
        let mut ui = PickerUi::new(default_keybindings());

        press(&mut ui, &state, "down");
        assert_eq!(
            press(&mut ui, &state, "space"),
            vec![PickerAction::SelectionDidChange(vec!["Oak".into()])]
        );
    }

    #[test]
    fn test_render_title_and_help() {
        let mut state = state();
        state.selected = vec!["Pine".into()];
        let mut ui = PickerUi::new(default_keybindings());
        let mut render = RenderHarness::new(80, 10);

        let output = render.render_to_string_plain(|frame| ui.render(frame, &state));
        assert!(output.contains("1 of 3 selected"));
        assert!(output.contains("[x] Pine"));
        assert!(output.contains("q/Esc: done"));
    }
}
