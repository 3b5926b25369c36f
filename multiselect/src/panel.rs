//! The open panel of a multi-select dropdown
//!
//! [`SelectPanel`] ties together a search box, a select-all row and the
//! filtered option list under one focus cursor. The host owns the options and
//! the selection and passes them in [`PanelProps`] on every call; the panel
//! owns the search text, search focus and focus cursor, kept in a small store
//! and changed only through [`reducer`](crate::reducer::reducer).
//!
//! Visible rows are numbered with the select-all row at 0 and the filtered
//! options at `1..=N`. The cursor stays inside that range: navigation steps
//! within it, and every event or render first pulls it back in when the host
//! supplied fewer options than before.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use multiselect_core::{
    Component, EventKind, KeyOutcome, Keybindings, LoggingMiddleware, StoreWithMiddleware,
};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    Frame,
};
use tracing::debug;

use crate::action::PanelAction;
use crate::config::PanelConfig;
use crate::filter::FilterOptions;
use crate::focus;
use crate::item::{DefaultItemRenderer, ItemRenderer, Row, RowEvent, RowView};
use crate::keys::{default_keybindings, PanelCommand, PanelContext};
use crate::list::{toggle_selection, OptionList, OptionListProps};
use crate::option::{all_values, SelectOption};
use crate::reducer::reducer;
use crate::search::{SearchInput, SearchInputProps};
use crate::state::PanelState;

/// Height of the bordered search box
const SEARCH_HEIGHT: u16 = 3;

/// Everything the host supplies on each call
pub struct PanelProps<'a, T, A> {
    /// Full option catalog, in catalog order
    pub options: &'a [SelectOption<T>],
    /// Currently selected values
    pub selected: &'a [T],
    pub config: &'a PanelConfig,
    pub filter: &'a dyn FilterOptions<T>,
    /// Row renderer; `None` uses [`DefaultItemRenderer`]
    pub item_renderer: Option<&'a dyn ItemRenderer<T>>,
    /// Whether the panel receives input at all
    pub is_focused: bool,
    /// Builds the host action proposing a new selection
    pub on_selected_changed: fn(Vec<T>) -> A,
}

impl<T, A> Clone for PanelProps<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for PanelProps<'_, T, A> {}

/// Keys the navigation state machine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Other,
}

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            _ => NavKey::Other,
        }
    }
}

/// Interaction controller for the panel
pub struct SelectPanel<T> {
    store: StoreWithMiddleware<PanelState, PanelAction, LoggingMiddleware>,
    keybindings: Keybindings<PanelContext>,
    search: SearchInput,
    list: OptionList<T>,
    search_area: Option<Rect>,
    select_all_area: Rect,
}

impl<T> Default for SelectPanel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectPanel<T> {
    /// A freshly opened panel: empty search, select-all row focused
    pub fn new() -> Self {
        Self::with_keybindings(default_keybindings())
    }

    pub fn with_keybindings(keybindings: Keybindings<PanelContext>) -> Self {
        Self {
            store: StoreWithMiddleware::new(
                PanelState::default(),
                reducer,
                LoggingMiddleware::new("select_panel"),
            ),
            keybindings,
            search: SearchInput::new(),
            list: OptionList::new(),
            search_area: None,
            select_all_area: Rect::default(),
        }
    }

    pub fn keybindings(&self) -> &Keybindings<PanelContext> {
        &self.keybindings
    }

    pub fn state(&self) -> &PanelState {
        self.store.state()
    }

    pub fn search_text(&self) -> &str {
        &self.store.state().search_text
    }

    pub fn search_has_focus(&self) -> bool {
        self.store.state().search_has_focus
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.store.state().focus_index
    }

    /// Replace the search text; the focus cursor is reset
    pub fn handle_search_change(&mut self, text: impl Into<String>) -> bool {
        self.store.dispatch(PanelAction::SearchChange(text.into()))
    }

    /// Empty the search text, leaving the focus cursor where it is
    pub fn clear_search(&mut self) -> bool {
        self.store.dispatch(PanelAction::SearchClear)
    }

    /// Focus the clicked row (0 = select-all)
    pub fn handle_item_clicked(&mut self, row: usize) -> bool {
        self.store.dispatch(PanelAction::ItemClick(row))
    }

    /// Record search box focus; the focus cursor is reset either way
    pub fn handle_search_focus(&mut self, has_focus: bool) -> bool {
        let changed = self.store.dispatch(PanelAction::SearchFocus(has_focus));
        if has_focus {
            let text = &self.store.state().search_text;
            self.search.move_to_end(text);
        }
        changed
    }

    /// Whether every option counts as selected
    ///
    /// Compares lengths only: values in `selected` that are not options, or
    /// duplicates, still count.
    pub fn all_are_selected<A>(&self, props: PanelProps<'_, T, A>) -> bool {
        props.options.len() == props.selected.len()
    }

    /// Options matching the current search text, in display order
    pub fn filtered_options<'a, A>(&self, props: PanelProps<'a, T, A>) -> Vec<&'a SelectOption<T>> {
        props
            .filter
            .filter_options(props.options, &self.store.state().search_text)
    }

    /// Move the focus cursor by `offset` rows within `0..=N`
    ///
    /// `N` is the number of options passing the current filter. No focus
    /// counts as one row above select-all.
    pub fn update_focus<A>(&mut self, offset: isize, props: PanelProps<'_, T, A>) -> bool {
        let option_count = self.filtered_options(props).len();
        self.store.dispatch(PanelAction::FocusMove {
            offset,
            option_count,
        })
    }

    /// Pull the focus cursor back inside `0..=N` for the options in `props`
    pub fn clamp_focus<A>(&mut self, props: PanelProps<'_, T, A>) -> bool {
        let option_count = self.filtered_options(props).len();
        if focus::fit(self.focus_index(), option_count) == self.focus_index() {
            return false;
        }
        self.store.dispatch(PanelAction::FocusClamp { option_count })
    }

    /// Focus cursor as it applies to the options in `props`
    fn focus_for<A>(&self, props: PanelProps<'_, T, A>) -> Option<usize> {
        focus::fit(self.focus_index(), self.filtered_options(props).len())
    }

    /// Navigation state machine
    ///
    /// Up and Down move the cursor and are consumed. With Alt held they are
    /// left alone and not consumed, so the host can use them (e.g. to close
    /// the dropdown). Every other key is ignored.
    pub fn handle_key_down<A>(
        &mut self,
        key: NavKey,
        alt_held: bool,
        props: PanelProps<'_, T, A>,
    ) -> KeyOutcome {
        if alt_held {
            return KeyOutcome::Ignored;
        }
        match key {
            NavKey::Up => {
                self.update_focus(-1, props);
                KeyOutcome::Consumed
            }
            NavKey::Down => {
                self.update_focus(1, props);
                KeyOutcome::Consumed
            }
            NavKey::Other => KeyOutcome::Ignored,
        }
    }

    pub fn handle_key_event<A>(
        &mut self,
        key: &KeyEvent,
        props: PanelProps<'_, T, A>,
    ) -> KeyOutcome {
        let alt_held = key.modifiers.contains(KeyModifiers::ALT);
        self.handle_key_down(NavKey::from(key.code), alt_held, props)
    }

    fn context(&self) -> PanelContext {
        if self.search_has_focus() {
            PanelContext::Search
        } else {
            PanelContext::List
        }
    }

    /// The rows as they would be rendered now
    pub fn rows<'a, A>(&self, props: PanelProps<'a, T, A>) -> Vec<RowView<'a, T>>
    where
        T: PartialEq,
    {
        let focus = self.focus_for(props);
        let disabled = props.config.disabled;

        let mut rows = Vec::with_capacity(props.options.len() + 1);
        rows.push(RowView {
            row: Row::SelectAll {
                label: &props.config.select_all_label,
            },
            focused: focus == Some(0),
            checked: self.all_are_selected(props),
            disabled,
        });
        rows.extend(
            self.filtered_options(props)
                .into_iter()
                .enumerate()
                .map(|(index, option)| RowView {
                    row: Row::Item { index, option },
                    focused: focus == Some(index + 1),
                    checked: option.is_selected(props.selected),
                    disabled,
                }),
        );
        rows
    }
}

impl<T: Clone + PartialEq> SelectPanel<T> {
    /// Propose selecting every option, in catalog order
    pub fn select_all<A>(&self, props: PanelProps<'_, T, A>) -> A {
        let values = all_values(props.options);
        debug!(count = values.len(), "select all");
        (props.on_selected_changed)(values)
    }

    /// Propose an empty selection
    pub fn select_none<A>(&self, props: PanelProps<'_, T, A>) -> A {
        debug!("select none");
        (props.on_selected_changed)(Vec::new())
    }

    /// What the select-all checkbox does when toggled
    pub fn select_all_changed<A>(&self, checked: bool, props: PanelProps<'_, T, A>) -> A {
        if checked {
            self.select_all(props)
        } else {
            self.select_none(props)
        }
    }

    /// Intent for setting the checkbox of `row` to `checked`
    ///
    /// `None` when the panel is disabled or `row` is past the filtered list.
    pub fn toggle_row<A>(
        &self,
        row: usize,
        checked: bool,
        props: PanelProps<'_, T, A>,
    ) -> Option<A> {
        if props.config.disabled {
            return None;
        }
        if row == 0 {
            return Some(self.select_all_changed(checked, props));
        }

        let filtered = self.filtered_options(props);
        let option = filtered.get(row - 1)?;
        debug!(row, checked, "option toggled");
        Some((props.on_selected_changed)(toggle_selection(
            props.selected,
            &option.value,
            checked,
        )))
    }

    /// Flip the checkbox of the focused row
    pub fn toggle_focused<A>(&self, props: PanelProps<'_, T, A>) -> Option<A> {
        let row = self.focus_for(props)?;
        let checked = if row == 0 {
            self.all_are_selected(props)
        } else {
            self.filtered_options(props).get(row - 1)?.is_selected(props.selected)
        };
        self.toggle_row(row, !checked, props)
    }

    /// Apply an event reported by a row
    pub fn handle_row_event<A>(
        &mut self,
        row: usize,
        event: RowEvent,
        props: PanelProps<'_, T, A>,
    ) -> Option<A> {
        match event {
            RowEvent::Toggled(checked) => self.toggle_row(row, checked, props),
            RowEvent::Clicked => {
                self.handle_item_clicked(row);
                None
            }
        }
    }

    fn route_key<A>(&mut self, key: &KeyEvent, props: PanelProps<'_, T, A>) -> Vec<A> {
        if self.handle_key_event(key, props).is_consumed() {
            return Vec::new();
        }

        let command = self
            .keybindings
            .get_command(key, self.context())
            .and_then(PanelCommand::from_command);

        match command {
            Some(PanelCommand::ToggleRow) => {
                return self.toggle_focused(props).into_iter().collect()
            }
            Some(PanelCommand::ToggleSearchFocus) => {
                if props.config.has_search {
                    let has_focus = !self.search_has_focus();
                    self.handle_search_focus(has_focus);
                }
                return Vec::new();
            }
            Some(PanelCommand::ClearSearch) => {
                self.clear_search();
                return Vec::new();
            }
            None => {}
        }

        if props.config.has_search && self.search_has_focus() {
            let state = self.store.state();
            let changes: Vec<String> = Component::<String>::handle_event(
                &mut self.search,
                &EventKind::Key(*key),
                SearchInputProps {
                    value: &state.search_text,
                    placeholder: &props.config.search_placeholder,
                    has_focus: true,
                    theme: &props.config.theme,
                    on_change: |text| text,
                },
            )
            .into_iter()
            .collect();
            for text in changes {
                self.handle_search_change(text);
            }
        }
        Vec::new()
    }

    fn route_mouse<A>(&mut self, mouse: &MouseEvent, props: PanelProps<'_, T, A>) -> Vec<A>
    where
        T: 'static,
    {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.search_area.is_some_and(|area| area.contains(position)) {
            self.handle_search_focus(true);
            return Vec::new();
        }

        let row_events: Vec<(usize, RowEvent)> = if self.select_all_area.contains(position) {
            let checked = self.all_are_selected(props);
            vec![(0, RowEvent::Toggled(!checked)), (0, RowEvent::Clicked)]
        } else {
            let filtered = self.filtered_options(props);
            if self.list.item_at(mouse.column, mouse.row, filtered.len()).is_none() {
                return Vec::new();
            }
            Component::<(usize, RowEvent)>::handle_event(
                &mut self.list,
                &EventKind::Mouse(*mouse),
                OptionListProps {
                    items: &filtered,
                    selected: props.selected,
                    focus: None,
                    disabled: props.config.disabled,
                    theme: &props.config.theme,
                    renderer: &DefaultItemRenderer,
                    on_row_event: |index, event| (index + 1, event),
                },
            )
            .into_iter()
            .collect()
        };

        if self.search_has_focus() {
            self.handle_search_focus(false);
        }
        row_events
            .into_iter()
            .filter_map(|(row, event)| self.handle_row_event(row, event, props))
            .collect()
    }
}

impl<T: Clone + PartialEq + 'static, A> Component<A> for SelectPanel<T> {
    type Props<'a> = PanelProps<'a, T, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return Vec::new();
        }
        self.clamp_focus(props);

        match event {
            EventKind::Key(key) => self.route_key(key, props),
            EventKind::Mouse(mouse) => self.route_mouse(mouse, props),
            EventKind::Scroll { delta, .. } => {
                self.update_focus(*delta, props);
                Vec::new()
            }
            EventKind::Resize(..) => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_focus(props);
        let config = props.config;
        let renderer: &dyn ItemRenderer<T> = props.item_renderer.unwrap_or(&DefaultItemRenderer);

        let (search_area, select_all_area, list_area) = if config.has_search {
            let [search, select_all, list] = Layout::vertical([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);
            (Some(search), select_all, list)
        } else {
            let [select_all, list] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            (None, select_all, list)
        };
        self.search_area = search_area;
        self.select_all_area = select_all_area;

        if let Some(search_area) = search_area {
            let state = self.store.state();
            Component::<String>::render(
                &mut self.search,
                frame,
                search_area,
                SearchInputProps {
                    value: &state.search_text,
                    placeholder: &config.search_placeholder,
                    has_focus: state.search_has_focus && props.is_focused,
                    theme: &config.theme,
                    on_change: |text| text,
                },
            );
        }

        let focus = self.focus_index();
        let select_all = RowView {
            row: Row::SelectAll {
                label: &config.select_all_label,
            },
            focused: focus == Some(0),
            checked: self.all_are_selected(props),
            disabled: config.disabled,
        };
        frame.render_widget(renderer.render_row(&select_all, &config.theme), select_all_area);

        let filtered = self.filtered_options(props);
        Component::<()>::render(
            &mut self.list,
            frame,
            list_area,
            OptionListProps {
                items: &filtered,
                selected: props.selected,
                focus: focus.and_then(|row| row.checked_sub(1)),
                disabled: config.disabled,
                theme: &config.theme,
                renderer,
                on_row_event: |_, _| (),
            },
        );
    }
}
