//! Scrollable list of filtered options

use std::marker::PhantomData;

use crossterm::event::{MouseButton, MouseEventKind};
use multiselect_core::{Component, EventKind};
use ratatui::{
    layout::{Position, Rect},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::item::{ItemRenderer, Row, RowEvent, RowView};
use crate::option::SelectOption;
use crate::theme::PanelTheme;

pub const EMPTY_MESSAGE: &str = "No matches";

/// Props for [`OptionList`]
pub struct OptionListProps<'a, T, A> {
    /// Filtered options, in display order
    pub items: &'a [&'a SelectOption<T>],
    pub selected: &'a [T],
    /// Focused position within `items` (not counting the select-all row)
    pub focus: Option<usize>,
    pub disabled: bool,
    pub theme: &'a PanelTheme,
    pub renderer: &'a dyn ItemRenderer<T>,
    /// Builds the action for an event on the item at the given position
    pub on_row_event: fn(usize, RowEvent) -> A,
}

/// The option rows below the select-all row
///
/// Keeps the scroll offset and the last rendered area, which mouse clicks are
/// hit-tested against.
pub struct OptionList<T> {
    scroll_offset: usize,
    area: Rect,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for OptionList<T> {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            area: Rect::default(),
            _marker: PhantomData,
        }
    }
}

impl<T> OptionList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep `focus` inside a viewport of `viewport_height` rows
    fn ensure_visible(&mut self, focus: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if focus < self.scroll_offset {
            self.scroll_offset = focus;
        } else if focus >= self.scroll_offset + viewport_height {
            self.scroll_offset = focus.saturating_sub(viewport_height - 1);
        }
    }

    /// Item position under a screen cell, if any
    pub fn item_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + (row - self.area.y) as usize;
        (index < len).then_some(index)
    }
}

/// The selection after toggling one option
///
/// Checking appends `value`; unchecking removes its first occurrence.
/// `selected` itself is left alone.
pub fn toggle_selection<T: Clone + PartialEq>(selected: &[T], value: &T, checked: bool) -> Vec<T> {
    let mut next = selected.to_vec();
    if checked {
        next.push(value.clone());
    } else if let Some(pos) = next.iter().position(|v| v == value) {
        next.remove(pos);
    }
    next
}

impl<T: PartialEq + 'static, A> Component<A> for OptionList<T> {
    type Props<'a> = OptionListProps<'a, T, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Mouse(mouse) = event else {
            return Vec::new();
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = self.item_at(mouse.column, mouse.row, props.items.len()) else {
            return Vec::new();
        };

        let checked = props.items[index].is_selected(props.selected);
        vec![
            (props.on_row_event)(index, RowEvent::Toggled(!checked)),
            (props.on_row_event)(index, RowEvent::Clicked),
        ]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        if props.items.is_empty() {
            self.scroll_offset = 0;
            frame.render_widget(Paragraph::new(EMPTY_MESSAGE).style(props.theme.empty), area);
            return;
        }

        let viewport_height = area.height as usize;
        let last = props.items.len() - 1;
        self.scroll_offset = self.scroll_offset.min(last);
        if let Some(focus) = props.focus {
            self.ensure_visible(focus.min(last), viewport_height);
        }

        let items: Vec<ListItem> = props
            .items
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let view = RowView {
                    row: Row::Item { index, option },
                    focused: props.focus == Some(index),
                    checked: option.is_selected(props.selected),
                    disabled: props.disabled,
                };
                ListItem::new(props.renderer.render_row(&view, props.theme))
            })
            .collect();

        let mut state = ListState::default().with_offset(self.scroll_offset);
        frame.render_stateful_widget(List::new(items), area, &mut state);
        self.scroll_offset = state.offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::DefaultItemRenderer;
    use multiselect_core::testing::{click, key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Row(usize, RowEvent),
    }

    type Props<'a> = OptionListProps<'a, u32, TestAction>;

    fn fruit() -> Vec<SelectOption<u32>> {
        ["Apple", "Banana", "Cherry", "Damson", "Elder"]
            .iter()
            .zip(1..)
            .map(|(label, value)| SelectOption::new(*label, value))
            .collect()
    }

    fn props<'a>(
        items: &'a [&'a SelectOption<u32>],
        selected: &'a [u32],
        focus: Option<usize>,
        theme: &'a PanelTheme,
    ) -> Props<'a> {
        OptionListProps {
            items,
            selected,
            focus,
            disabled: false,
            theme,
            renderer: &DefaultItemRenderer,
            on_row_event: TestAction::Row,
        }
    }

    fn draw(render: &mut RenderHarness, list: &mut OptionList<u32>, props: Props<'_>) -> String {
        render.render_to_string_plain(|frame| {
            Component::<TestAction>::render(list, frame, frame.area(), props);
        })
    }

    fn events(list: &mut OptionList<u32>, event: EventKind, props: Props<'_>) -> Vec<TestAction> {
        Component::<TestAction>::handle_event(list, &event, props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_toggle_selection_appends_and_removes_first() {
        assert_eq!(toggle_selection(&[1, 2], &3, true), vec![1, 2, 3]);
        assert_eq!(toggle_selection(&[1, 2, 1], &1, false), vec![2, 1]);
        assert_eq!(toggle_selection(&[1, 2], &9, false), vec![1, 2]);
    }

    #[test]
    fn test_render_rows_with_checkboxes() {
        let options = fruit();
        let items: Vec<_> = options.iter().collect();
        let theme = PanelTheme::default();
        let mut list = OptionList::new();
        let mut render = RenderHarness::new(20, 5);

        let output = draw(&mut render, &mut list, props(&items, &[2], Some(0), &theme));
        assert_eq!(
            output,
            "[ ] Apple\n[x] Banana\n[ ] Cherry\n[ ] Damson\n[ ] Elder"
        );
    }

    #[test]
    fn test_render_empty_message() {
        let theme = PanelTheme::default();
        let mut list = OptionList::new();
        let mut render = RenderHarness::new(20, 3);

        let output = draw(&mut render, &mut list, props(&[], &[], None, &theme));
        assert!(output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_scrolls_to_focus() {
        let options = fruit();
        let items: Vec<_> = options.iter().collect();
        let theme = PanelTheme::default();
        let mut list = OptionList::new();
        let mut render = RenderHarness::new(20, 2);

        let output = draw(&mut render, &mut list, props(&items, &[], Some(4), &theme));
        assert_eq!(list.scroll_offset(), 3);
        assert_eq!(output, "[ ] Damson\n[ ] Elder");

        draw(&mut render, &mut list, props(&items, &[], Some(1), &theme));
        assert_eq!(list.scroll_offset(), 1);
    }

    #[test]
    fn test_click_reports_toggle_then_click() {
        let options = fruit();
        let items: Vec<_> = options.iter().collect();
        let theme = PanelTheme::default();
        let mut list = OptionList::new();
        let mut render = RenderHarness::new(20, 5);
        draw(&mut render, &mut list, props(&items, &[2], None, &theme));

        let actions = events(
            &mut list,
            EventKind::Mouse(click(3, 1)),
            props(&items, &[2], None, &theme),
        );
        assert_eq!(
            actions,
            vec![
                TestAction::Row(1, RowEvent::Toggled(false)),
                TestAction::Row(1, RowEvent::Clicked),
            ]
        );
    }

    #[test]
    fn test_click_outside_rows_and_keys_ignored() {
        let options = fruit();
        let items: Vec<_> = options.iter().take(2).collect();
        let theme = PanelTheme::default();
        let mut list = OptionList::new();
        let mut render = RenderHarness::new(20, 5);
        draw(&mut render, &mut list, props(&items, &[], None, &theme));

        // inside the area but past the last item
        let actions = events(
            &mut list,
            EventKind::Mouse(click(0, 3)),
            props(&items, &[], None, &theme),
        );
        assert!(actions.is_empty());

        let actions = events(
            &mut list,
            EventKind::Key(key("space")),
            props(&items, &[], None, &theme),
        );
        assert!(actions.is_empty());
    }
}
