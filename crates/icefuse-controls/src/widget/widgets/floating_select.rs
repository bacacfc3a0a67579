//! FloatingSelect widget.
//!
//! A dropdown selection control with a floating, overlay-hosted panel:
//!
//! - Single-select or multi-select, fixed at construction
//! - Optional text search over labels and descriptions
//! - Optional tri-state "select all" row scoped to the filtered options
//! - Optional clear affordance on the trigger
//! - Keyboard navigation, Escape/outside-click dismissal
//! - Explicit open/close transition with a cancellable close-delay timer
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//! use icefuse_controls::widget::overlay::WindowOverlay;
//! use icefuse_controls::widget::timer_router::shared_timer_router;
//! use icefuse_controls::widget::widgets::{FloatingSelect, SelectOption, SelectionChange};
//! use icefuse_controls_render::Rect;
//!
//! let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! let timers = shared_timer_router();
//!
//! let mut select = FloatingSelect::multi(overlay, timers)
//!     .with_options(vec![
//!         SelectOption::new("us-west", "US West"),
//!         SelectOption::new("us-east", "US East"),
//!         SelectOption::new("eu", "Europe"),
//!     ])
//!     .with_placeholder("All regions")
//!     .with_select_all(true);
//!
//! select.selection_changed.connect(|change| {
//!     if let SelectionChange::Multi(values) = change {
//!         println!("regions: {values:?}");
//!     }
//! });
//!
//! select.open(Instant::now());
//! select.toggle_option("us-west");
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use icefuse_controls_core::logging::targets;
use icefuse_controls_core::{Object, ObjectId, Signal, TimerId};
use icefuse_controls_render::{
    Color, FontWeight, Icon, Point, Rect, Renderer, RoundedRect, Size, Stroke, TextStyle,
};

use crate::widget::animation::{PanelPhase, PanelTransition};
use crate::widget::overlay::{OverlayHost, PanelId, PanelPlacement};
use crate::widget::timer_router::SharedTimerRouter;
use crate::widget::{
    FocusPolicy, Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent, PaintContext,
    SizeHint, SizePolicy, SizePolicyPair, WheelEvent, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Options
// ============================================================================

/// A selectable option.
///
/// Options are caller-owned and immutable while installed; `value` must be
/// unique within the list. The widget does not validate uniqueness; lookups
/// take the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// The stable identity reported through selection callbacks.
    pub value: String,
    /// The display text.
    pub label: String,
    /// Optional secondary text shown dimmed after the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional icon glyph shown before the label.
    ///
    /// Icons are attached by the embedding page, not carried in JSON
    /// payloads.
    #[serde(skip)]
    pub icon: Option<Icon>,
    /// Disabled options render dimmed and ignore clicks.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option with a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            icon: None,
            disabled: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Mark the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Check whether the option matches a search query.
    ///
    /// Case-insensitive containment over label and description.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        if self.label.to_lowercase().contains(&query) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The selection reported through [`FloatingSelect::selection_changed`].
///
/// Always carries the full replacement value, never a delta. The variant is
/// fixed by the widget's constructor, so a caller handling the wrong
/// cardinality fails at the match instead of silently misreading props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Single-select: the selected value, or `None` when cleared.
    Single(Option<String>),
    /// Multi-select: the full ordered set of selected values.
    Multi(Vec<String>),
}

/// Internal selection storage, the tagged union behind the two modes.
#[derive(Debug, Clone)]
enum Selection {
    Single(Option<String>),
    Multi(Vec<String>),
}

impl Selection {
    fn to_change(&self) -> SelectionChange {
        match self {
            Selection::Single(value) => SelectionChange::Single(value.clone()),
            Selection::Multi(values) => SelectionChange::Multi(values.clone()),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_none(),
            Selection::Multi(values) => values.is_empty(),
        }
    }
}

/// The tri-state of the "select all" row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectAllState {
    /// No filtered option is selected.
    #[default]
    None,
    /// Some, but not all, filtered options are selected.
    Some,
    /// Every selectable filtered option is selected.
    All,
}

// ============================================================================
// Hit regions
// ============================================================================

/// Parts of the trigger for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerPart {
    Display,
    Clear,
    Arrow,
}

/// Parts of the panel for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelPart {
    Search,
    SelectAll,
    EmptyRow,
    /// Index into the filtered list.
    Row(usize),
    Background,
}

/// Resolved vertical layout of the panel interior (panel-local coordinates).
struct PanelLayout {
    search: Option<Rect>,
    select_all: Option<Rect>,
    empty_row: Option<Rect>,
    list_top: f32,
    visible_rows: usize,
}

// ============================================================================
// FloatingSelect
// ============================================================================

const BORDER: f32 = 1.0;
const PADDING: f32 = 8.0;
const ITEM_HEIGHT: f32 = 26.0;
const SEARCH_HEIGHT: f32 = 30.0;
const ARROW_WIDTH: f32 = 24.0;
const CLEAR_WIDTH: f32 = 18.0;
const CHECK_SIZE: f32 = 14.0;

/// A dropdown selection widget with a floating panel.
///
/// The selection cardinality is fixed at construction via
/// [`FloatingSelect::single`] or [`FloatingSelect::multi`]; the two modes
/// share the trigger, panel, search and dismissal behavior and differ only
/// in selection semantics (see [`SelectionChange`]).
///
/// # Signals
///
/// - `selection_changed(SelectionChange)`: the selection was replaced
/// - `activated(String)`: the user picked an option
/// - `opened(())`: the panel began opening
/// - `closed(())`: the panel finished closing and was removed
/// - `search_changed(String)`: the search query changed
pub struct FloatingSelect {
    base: WidgetBase,

    options: Vec<SelectOption>,
    selection: Selection,

    placeholder: String,
    empty_option: Option<String>,
    searchable: bool,
    clearable: bool,
    show_select_all: bool,
    max_visible_items: usize,

    search_text: String,
    search_focused: bool,
    scroll_offset: usize,
    /// Highlight index into the filtered list.
    highlighted: Option<usize>,
    hover_part: Option<PanelPart>,
    trigger_hovered: bool,

    overlay: Arc<dyn OverlayHost>,
    timers: SharedTimerRouter,
    panel: Option<PanelId>,
    panel_rect: Rect,
    placement: PanelPlacement,
    transition: PanelTransition,
    close_timer: Option<TimerId>,

    // Appearance
    background_color: Color,
    disabled_background_color: Color,
    text_color: Color,
    placeholder_color: Color,
    disabled_text_color: Color,
    border_color: Color,
    focus_border_color: Color,
    accent_color: Color,
    hover_color: Color,
    highlight_color: Color,
    panel_background_color: Color,
    panel_border_color: Color,
    border_radius: f32,

    // Signals
    /// Emitted whenever the selection is replaced.
    pub selection_changed: Signal<SelectionChange>,
    /// Emitted when the user picks an option.
    pub activated: Signal<String>,
    /// Emitted when the panel begins opening.
    pub opened: Signal<()>,
    /// Emitted when the panel has finished closing and was removed.
    pub closed: Signal<()>,
    /// Emitted when the search query changes through user input.
    pub search_changed: Signal<String>,
}

impl FloatingSelect {
    fn new(selection: Selection, overlay: Arc<dyn OverlayHost>, timers: SharedTimerRouter) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focus_policy(FocusPolicy::StrongFocus);
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Preferred, SizePolicy::Fixed));

        Self {
            base,
            options: Vec::new(),
            selection,
            placeholder: String::new(),
            empty_option: None,
            searchable: false,
            clearable: false,
            show_select_all: false,
            max_visible_items: 8,
            search_text: String::new(),
            search_focused: false,
            scroll_offset: 0,
            highlighted: None,
            hover_part: None,
            trigger_hovered: false,
            overlay,
            timers,
            panel: None,
            panel_rect: Rect::ZERO,
            placement: PanelPlacement::BelowAlignLeft,
            transition: PanelTransition::new(),
            close_timer: None,
            background_color: Color::WHITE,
            disabled_background_color: Color::from_rgb8(245, 245, 245),
            text_color: Color::from_rgb8(30, 30, 30),
            placeholder_color: Color::from_rgb8(150, 150, 150),
            disabled_text_color: Color::from_rgb8(180, 180, 180),
            border_color: Color::from_rgb8(190, 190, 190),
            focus_border_color: Color::from_rgb8(51, 153, 255),
            accent_color: Color::from_rgb8(51, 153, 255),
            hover_color: Color::from_rgba8(120, 160, 220, 40),
            highlight_color: Color::from_rgba8(51, 153, 255, 60),
            panel_background_color: Color::WHITE,
            panel_border_color: Color::from_rgb8(190, 190, 190),
            border_radius: 4.0,
            selection_changed: Signal::new(),
            activated: Signal::new(),
            opened: Signal::new(),
            closed: Signal::new(),
            search_changed: Signal::new(),
        }
    }

    /// Create a single-select widget.
    pub fn single(overlay: Arc<dyn OverlayHost>, timers: SharedTimerRouter) -> Self {
        Self::new(Selection::Single(None), overlay, timers)
    }

    /// Create a multi-select widget.
    pub fn multi(overlay: Arc<dyn OverlayHost>, timers: SharedTimerRouter) -> Self {
        Self::new(Selection::Multi(Vec::new()), overlay, timers)
    }

    // =========================================================================
    // Builder configuration
    // =========================================================================

    /// Set the option list.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.set_options(options);
        self
    }

    /// Set the trigger placeholder shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Single-select only: pin an explicit "no selection" row above the list.
    pub fn with_empty_option(mut self, label: impl Into<String>) -> Self {
        if matches!(self.selection, Selection::Multi(_)) {
            tracing::warn!(target: targets::WIDGET, "empty_option is single-select only, ignoring");
            return self;
        }
        self.empty_option = Some(label.into());
        self
    }

    /// Show a search field inside the panel.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Show a clear affordance on the trigger when the selection is non-empty.
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Multi-select only: show the tri-state "select all" row.
    pub fn with_select_all(mut self, show: bool) -> Self {
        if matches!(self.selection, Selection::Single(_)) {
            tracing::warn!(target: targets::WIDGET, "select_all is multi-select only, ignoring");
            return self;
        }
        self.show_select_all = show;
        self
    }

    /// Cap the number of visible rows; excess rows scroll.
    pub fn with_max_visible_items(mut self, count: usize) -> Self {
        self.max_visible_items = count.max(1);
        self
    }

    /// Set the initial single selection.
    pub fn with_selected_value(mut self, value: Option<&str>) -> Self {
        self.set_selected_value(value.map(str::to_string));
        self
    }

    /// Set the initial multi selection.
    pub fn with_selected_values(mut self, values: Vec<String>) -> Self {
        self.set_selected_values(values);
        self
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// The installed options.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace the option list.
    ///
    /// Selected values that no longer exist are pruned, emitting
    /// `selection_changed` if the selection shrank.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.scroll_offset = 0;
        self.highlighted = None;

        let pruned = match &mut self.selection {
            Selection::Single(value) => {
                let stale = value
                    .as_deref()
                    .is_some_and(|v| !self.options.iter().any(|o| o.value == v));
                if stale {
                    *value = None;
                }
                stale
            }
            Selection::Multi(values) => {
                let before = values.len();
                values.retain(|v| self.options.iter().any(|o| o.value == *v));
                values.len() != before
            }
        };

        if pruned {
            self.selection_changed.emit(self.selection.to_change());
        }
        self.base.update();
    }

    /// Find an option by value. First match wins on duplicate values.
    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Indices of the options matching the current search, in caller order.
    ///
    /// Never mutates the installed options; clearing the query restores the
    /// full list in its original order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.matches(&self.search_text))
            .map(|(i, _)| i)
            .collect()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected value (single-select), or `None`.
    pub fn selected_value(&self) -> Option<&str> {
        match &self.selection {
            Selection::Single(value) => value.as_deref(),
            Selection::Multi(_) => {
                tracing::warn!(target: targets::WIDGET, "selected_value called on multi-select");
                None
            }
        }
    }

    /// The selected values (multi-select), in insertion order.
    pub fn selected_values(&self) -> &[String] {
        match &self.selection {
            Selection::Multi(values) => values,
            Selection::Single(_) => {
                tracing::warn!(target: targets::WIDGET, "selected_values called on single-select");
                &[]
            }
        }
    }

    /// The current selection as a [`SelectionChange`] snapshot.
    pub fn selection(&self) -> SelectionChange {
        self.selection.to_change()
    }

    /// Replace the single selection programmatically.
    pub fn set_selected_value(&mut self, value: Option<String>) {
        match &mut self.selection {
            Selection::Single(current) => {
                if *current != value {
                    *current = value;
                    self.selection_changed.emit(self.selection.to_change());
                    self.base.update();
                }
            }
            Selection::Multi(_) => {
                tracing::warn!(target: targets::WIDGET, "set_selected_value called on multi-select");
            }
        }
    }

    /// Replace the multi selection programmatically. Duplicates are dropped,
    /// first occurrence wins.
    pub fn set_selected_values(&mut self, values: Vec<String>) {
        match &mut self.selection {
            Selection::Multi(current) => {
                let mut deduped: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !deduped.contains(&value) {
                        deduped.push(value);
                    }
                }
                if *current != deduped {
                    *current = deduped;
                    self.selection_changed.emit(self.selection.to_change());
                    self.base.update();
                }
            }
            Selection::Single(_) => {
                tracing::warn!(target: targets::WIDGET, "set_selected_values called on single-select");
            }
        }
    }

    /// Single-select: pick `value` (or `None` for the empty row) and close.
    ///
    /// Disabled and unknown values are ignored.
    pub fn select_option(&mut self, value: Option<&str>) {
        if !matches!(self.selection, Selection::Single(_)) {
            tracing::warn!(target: targets::WIDGET, "select_option called on multi-select");
            return;
        }
        if let Some(v) = value {
            match self.option(v) {
                Some(option) if option.disabled => return,
                Some(_) => {}
                None => {
                    tracing::warn!(target: targets::WIDGET, value = v, "select_option: unknown value");
                    return;
                }
            }
        }

        let changed = match &mut self.selection {
            Selection::Single(current) => {
                let next = value.map(str::to_string);
                if *current != next {
                    *current = next;
                    true
                } else {
                    false
                }
            }
            Selection::Multi(_) => unreachable!(),
        };

        if changed {
            self.selection_changed.emit(self.selection.to_change());
        }
        if let Some(v) = value {
            self.activated.emit(v.to_string());
        }
        self.close(Instant::now());
        self.base.update();
    }

    /// Multi-select: toggle `value` in the selection. The panel stays open.
    ///
    /// Disabled and unknown values are ignored. Toggling twice restores the
    /// original selection.
    pub fn toggle_option(&mut self, value: &str) {
        if !matches!(self.selection, Selection::Multi(_)) {
            tracing::warn!(target: targets::WIDGET, "toggle_option called on single-select");
            return;
        }
        match self.option(value) {
            Some(option) if option.disabled => return,
            Some(_) => {}
            None => {
                tracing::warn!(target: targets::WIDGET, value, "toggle_option: unknown value");
                return;
            }
        }

        if let Selection::Multi(values) = &mut self.selection {
            if let Some(pos) = values.iter().position(|v| v == value) {
                values.remove(pos);
            } else {
                values.push(value.to_string());
            }
        }
        self.selection_changed.emit(self.selection.to_change());
        self.activated.emit(value.to_string());
        self.base.update();
    }

    /// Multi-select: add every filtered, enabled option to the selection.
    ///
    /// Options outside the current filter are untouched.
    pub fn select_all_filtered(&mut self) {
        let additions: Vec<String> = self
            .filtered_indices()
            .into_iter()
            .map(|i| &self.options[i])
            .filter(|o| !o.disabled)
            .map(|o| o.value.clone())
            .collect();

        if let Selection::Multi(values) = &mut self.selection {
            let mut changed = false;
            for value in additions {
                if !values.contains(&value) {
                    values.push(value);
                    changed = true;
                }
            }
            if changed {
                self.selection_changed.emit(self.selection.to_change());
                self.base.update();
            }
        } else {
            tracing::warn!(target: targets::WIDGET, "select_all_filtered called on single-select");
        }
    }

    /// Multi-select: remove every filtered, enabled option from the
    /// selection. Options outside the current filter are untouched.
    pub fn deselect_all_filtered(&mut self) {
        let removals: Vec<&str> = self
            .filtered_indices()
            .into_iter()
            .map(|i| self.options[i].value.as_str())
            .collect();
        let removals: Vec<String> = removals
            .into_iter()
            .filter(|v| self.option(v).is_some_and(|o| !o.disabled))
            .map(str::to_string)
            .collect();

        if let Selection::Multi(values) = &mut self.selection {
            let before = values.len();
            values.retain(|v| !removals.contains(v));
            if values.len() != before {
                self.selection_changed.emit(self.selection.to_change());
                self.base.update();
            }
        } else {
            tracing::warn!(target: targets::WIDGET, "deselect_all_filtered called on single-select");
        }
    }

    /// The tri-state of the "select all" row over the filtered, enabled
    /// options. Disabled options are excluded from the denominator.
    pub fn select_all_state(&self) -> SelectAllState {
        let Selection::Multi(values) = &self.selection else {
            return SelectAllState::None;
        };

        let filtered: Vec<&SelectOption> = self
            .filtered_indices()
            .into_iter()
            .map(|i| &self.options[i])
            .filter(|o| !o.disabled)
            .collect();
        if filtered.is_empty() {
            return SelectAllState::None;
        }

        let selected = filtered
            .iter()
            .filter(|o| values.contains(&o.value))
            .count();
        if selected == 0 {
            SelectAllState::None
        } else if selected == filtered.len() {
            SelectAllState::All
        } else {
            SelectAllState::Some
        }
    }

    /// Clear the selection (single: `None`; multi: empty).
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        match &mut self.selection {
            Selection::Single(value) => *value = None,
            Selection::Multi(values) => values.clear(),
        }
        self.selection_changed.emit(self.selection.to_change());
        self.base.update();
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// The current search query.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether the panel search field has focus.
    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    /// Replace the search query, resetting scroll and highlight.
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.search_text == query {
            return;
        }
        self.search_text = query;
        self.scroll_offset = 0;
        self.highlighted = if self.filtered_indices().is_empty() {
            None
        } else {
            Some(0)
        };
        self.search_changed.emit(self.search_text.clone());
        self.refresh_panel_rect();
        self.base.update();
    }

    fn append_search(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut query = self.search_text.clone();
        query.push_str(text);
        self.set_search(query);
    }

    fn backspace_search(&mut self) {
        let mut graphemes: Vec<&str> = self.search_text.graphemes(true).collect();
        if graphemes.pop().is_some() {
            let query: String = graphemes.concat();
            self.set_search(query);
        }
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    /// Whether the panel is open or entering.
    pub fn is_open(&self) -> bool {
        self.transition.is_interactive()
    }

    /// The panel's animation phase.
    pub fn panel_phase(&self) -> PanelPhase {
        self.transition.phase()
    }

    /// The panel rectangle in window coordinates, when attached.
    pub fn panel_rect(&self) -> Option<Rect> {
        self.panel.map(|_| self.panel_rect)
    }

    /// Open the panel.
    ///
    /// Measures the trigger synchronously and attaches the panel at its
    /// final position before the first animation frame, so there is no
    /// visible jump. Re-opening while the exit transition plays cancels the
    /// pending removal. Returns `false` when disabled, already open, or the
    /// overlay has no surface.
    pub fn open(&mut self, now: Instant) -> bool {
        if !self.base.is_enabled() || self.transition.is_interactive() {
            return false;
        }

        // The close-delay timer must die before a new panel lifecycle starts.
        if let Some(timer) = self.close_timer.take() {
            let _ = self.timers.cancel(timer);
        }

        let rect = self.compute_panel_rect();
        match self.panel {
            Some(id) => self.overlay.reposition(id, rect),
            None => match self.overlay.attach(self.base.object_id(), rect) {
                Some(id) => self.panel = Some(id),
                None => {
                    tracing::debug!(target: targets::WIDGET, "no overlay surface, select stays closed");
                    return false;
                }
            },
        }
        self.panel_rect = rect;

        self.transition.begin_open(now);
        self.scroll_offset = 0;
        self.highlighted = self.initial_highlight();
        if self.searchable {
            self.search_focused = true;
        }
        self.opened.emit(());
        self.base.update();
        true
    }

    /// Begin closing the panel.
    ///
    /// Starts the exit transition and the close-delay timer; the panel is
    /// removed when the timer fires. The search query resets immediately.
    /// Returns `false` when not open.
    pub fn close(&mut self, now: Instant) -> bool {
        if !self.transition.begin_close(now) {
            return false;
        }

        self.search_text.clear();
        self.search_focused = false;
        self.scroll_offset = 0;
        self.highlighted = None;
        self.hover_part = None;

        let timer = self.timers.start_one_shot(
            self.base.object_id(),
            now,
            self.transition.exit_duration(),
        );
        self.close_timer = Some(timer);
        self.base.update();
        true
    }

    /// Toggle between open and closed.
    pub fn toggle_open(&mut self, now: Instant) {
        if self.transition.is_interactive() {
            self.close(now);
        } else {
            self.open(now);
        }
    }

    /// Advance the enter animation. Returns `true` when a repaint is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.transition.tick(now) {
            self.base.update();
            return true;
        }
        self.transition.is_visible()
    }

    fn finish_close(&mut self) {
        if let Some(id) = self.panel.take() {
            self.overlay.detach(id);
        }
        self.transition.finish_close();
        self.closed.emit(());
        self.base.update();
    }

    fn initial_highlight(&self) -> Option<usize> {
        let filtered = self.filtered_indices();
        if filtered.is_empty() {
            return None;
        }
        let selected = match &self.selection {
            Selection::Single(value) => value.as_deref(),
            Selection::Multi(values) => values.first().map(String::as_str),
        };
        selected
            .and_then(|v| {
                filtered
                    .iter()
                    .position(|&i| self.options[i].value == v)
            })
            .or(Some(0))
    }

    // =========================================================================
    // Panel geometry
    // =========================================================================

    fn compute_panel_rect(&self) -> Rect {
        let anchor = self.base.geometry();
        let size = self.panel_size();
        let bounds = self.overlay.bounds();
        let bounds = if bounds.size.is_empty() { None } else { Some(bounds) };
        let pos = self.placement.calculate_position(anchor, size, bounds);
        Rect::from_origin_size(pos, size)
    }

    /// Recompute the panel height after a filter change, keeping the
    /// open-time origin. The trigger is not re-measured while open.
    fn refresh_panel_rect(&mut self) {
        if let Some(id) = self.panel {
            let size = self.panel_size();
            self.panel_rect = Rect::from_origin_size(self.panel_rect.origin, size);
            self.overlay.reposition(id, self.panel_rect);
        }
    }

    fn panel_size(&self) -> Size {
        let width = self.base.geometry().width().max(120.0);
        let mut height = BORDER * 2.0;
        if self.searchable {
            height += SEARCH_HEIGHT;
        }
        if self.show_select_all && matches!(self.selection, Selection::Multi(_)) {
            height += ITEM_HEIGHT;
        }
        if self.empty_option.is_some() {
            height += ITEM_HEIGHT;
        }
        // At least one row, for the empty-state message.
        let rows = self
            .filtered_indices()
            .len()
            .clamp(1, self.max_visible_items);
        height += rows as f32 * ITEM_HEIGHT;
        Size::new(width, height)
    }

    fn panel_layout(&self) -> PanelLayout {
        let mut y = BORDER;
        let width = self.panel_rect.width() - BORDER * 2.0;

        let search = self.searchable.then(|| {
            let rect = Rect::new(BORDER, y, width, SEARCH_HEIGHT);
            y += SEARCH_HEIGHT;
            rect
        });

        let select_all = (self.show_select_all && matches!(self.selection, Selection::Multi(_)))
            .then(|| {
                let rect = Rect::new(BORDER, y, width, ITEM_HEIGHT);
                y += ITEM_HEIGHT;
                rect
            });

        let empty_row = self.empty_option.is_some().then(|| {
            let rect = Rect::new(BORDER, y, width, ITEM_HEIGHT);
            y += ITEM_HEIGHT;
            rect
        });

        let visible_rows = self
            .filtered_indices()
            .len()
            .saturating_sub(self.scroll_offset)
            .min(self.max_visible_items);

        PanelLayout {
            search,
            select_all,
            empty_row,
            list_top: y,
            visible_rows,
        }
    }

    // =========================================================================
    // Hit testing
    // =========================================================================

    fn hit_trigger(&self, local: Point) -> Option<TriggerPart> {
        let rect = self.base.rect();
        if !rect.contains(local) {
            return None;
        }
        if local.x >= rect.width() - ARROW_WIDTH {
            return Some(TriggerPart::Arrow);
        }
        if self.clearable
            && !self.selection.is_empty()
            && local.x >= rect.width() - ARROW_WIDTH - CLEAR_WIDTH
        {
            return Some(TriggerPart::Clear);
        }
        Some(TriggerPart::Display)
    }

    fn hit_panel(&self, window: Point) -> Option<PanelPart> {
        if self.panel.is_none() || !self.transition.is_interactive() {
            return None;
        }
        if !self.panel_rect.contains(window) {
            return None;
        }

        let local = Point::new(
            window.x - self.panel_rect.origin.x,
            window.y - self.panel_rect.origin.y,
        );
        let layout = self.panel_layout();

        if layout.search.is_some_and(|r| r.contains(local)) {
            return Some(PanelPart::Search);
        }
        if layout.select_all.is_some_and(|r| r.contains(local)) {
            return Some(PanelPart::SelectAll);
        }
        if layout.empty_row.is_some_and(|r| r.contains(local)) {
            return Some(PanelPart::EmptyRow);
        }

        if local.y >= layout.list_top {
            let visual = ((local.y - layout.list_top) / ITEM_HEIGHT) as usize;
            if visual < layout.visible_rows {
                return Some(PanelPart::Row(self.scroll_offset + visual));
            }
        }
        Some(PanelPart::Background)
    }

    // =========================================================================
    // Event handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.base.is_enabled() {
            return false;
        }

        if let Some(part) = self.hit_trigger(event.local_pos) {
            match part {
                TriggerPart::Clear => self.clear_selection(),
                TriggerPart::Display | TriggerPart::Arrow => self.toggle_open(Instant::now()),
            }
            return true;
        }

        if let Some(part) = self.hit_panel(event.window_pos) {
            match part {
                PanelPart::Search => self.search_focused = true,
                PanelPart::SelectAll => {
                    if self.select_all_state() == SelectAllState::All {
                        self.deselect_all_filtered();
                    } else {
                        self.select_all_filtered();
                    }
                }
                PanelPart::EmptyRow => self.select_option(None),
                PanelPart::Row(list_idx) => self.activate_row(list_idx),
                PanelPart::Background => {}
            }
            return true;
        }

        // Pointer-down outside trigger and panel dismisses.
        if self.transition.is_interactive() {
            self.close(Instant::now());
            return true;
        }
        false
    }

    fn activate_row(&mut self, list_idx: usize) {
        let filtered = self.filtered_indices();
        let Some(&option_idx) = filtered.get(list_idx) else {
            return;
        };
        let option = &self.options[option_idx];
        if option.disabled {
            // Inert: consume the click without selection or signals.
            return;
        }
        let value = option.value.clone();
        self.highlighted = Some(list_idx);
        match self.selection {
            Selection::Single(_) => self.select_option(Some(&value)),
            Selection::Multi(_) => self.toggle_option(&value),
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let trigger_hovered = self.hit_trigger(event.local_pos).is_some();
        let panel_part = self.hit_panel(event.window_pos);

        let mut changed = false;
        if trigger_hovered != self.trigger_hovered {
            self.trigger_hovered = trigger_hovered;
            changed = true;
        }
        if panel_part != self.hover_part {
            if let Some(PanelPart::Row(list_idx)) = panel_part {
                self.highlighted = Some(list_idx);
            }
            self.hover_part = panel_part;
            changed = true;
        }
        if changed {
            self.base.update();
        }
        changed
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        let filtered_len = self.filtered_indices().len();

        match event.key {
            Key::Escape => {
                if self.transition.is_interactive() {
                    self.close(Instant::now());
                    return true;
                }
                return false;
            }
            Key::Enter => {
                if self.transition.is_interactive() {
                    if let Some(list_idx) = self.highlighted {
                        self.activate_row(list_idx);
                    }
                    return true;
                }
                self.open(Instant::now());
                return true;
            }
            Key::ArrowDown => {
                if !self.transition.is_interactive() {
                    self.open(Instant::now());
                    return true;
                }
                if filtered_len > 0 {
                    let next = self
                        .highlighted
                        .map_or(0, |h| (h + 1).min(filtered_len - 1));
                    self.highlighted = Some(next);
                    self.ensure_highlighted_visible();
                    self.base.update();
                }
                return true;
            }
            Key::ArrowUp => {
                if self.transition.is_interactive() && filtered_len > 0 {
                    let next = self.highlighted.map_or(0, |h| h.saturating_sub(1));
                    self.highlighted = Some(next);
                    self.ensure_highlighted_visible();
                    self.base.update();
                }
                return true;
            }
            Key::Home => {
                if self.transition.is_interactive() && filtered_len > 0 {
                    self.highlighted = Some(0);
                    self.scroll_offset = 0;
                    self.base.update();
                    return true;
                }
            }
            Key::End => {
                if self.transition.is_interactive() && filtered_len > 0 {
                    self.highlighted = Some(filtered_len - 1);
                    self.ensure_highlighted_visible();
                    self.base.update();
                    return true;
                }
            }
            Key::Backspace => {
                if self.transition.is_interactive() && self.searchable && self.search_focused {
                    self.backspace_search();
                    return true;
                }
            }
            Key::Space => {
                if !self.transition.is_interactive() {
                    self.open(Instant::now());
                    return true;
                }
                // Fall through: space types into the search field.
            }
            _ => {}
        }

        if self.transition.is_interactive()
            && self.searchable
            && self.search_focused
            && !event.text.is_empty()
            && !event.text.chars().any(char::is_control)
        {
            self.append_search(&event.text);
            return true;
        }
        false
    }

    fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        if !self.transition.is_interactive() {
            return false;
        }
        if self.hit_panel(event.window_pos).is_none() {
            return false;
        }

        let filtered_len = self.filtered_indices().len();
        let max_scroll = filtered_len.saturating_sub(self.max_visible_items);
        let delta: i64 = if event.delta_y > 0.0 { -1 } else { 1 };
        let next = (self.scroll_offset as i64 + delta).clamp(0, max_scroll as i64) as usize;

        if next != self.scroll_offset {
            self.scroll_offset = next;
            self.base.update();
        }
        true
    }

    fn handle_focus_out(&mut self) -> bool {
        if self.transition.is_interactive() {
            self.close(Instant::now());
        }
        false
    }

    fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.close_timer == Some(id) {
            self.close_timer = None;
            self.finish_close();
            return true;
        }
        false
    }

    fn ensure_highlighted_visible(&mut self) {
        let Some(idx) = self.highlighted else { return };
        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if idx >= self.scroll_offset + self.max_visible_items {
            self.scroll_offset = idx + 1 - self.max_visible_items;
        }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn trigger_label(&self) -> (String, bool) {
        match &self.selection {
            Selection::Single(Some(value)) => {
                let label = self
                    .option(value)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| value.clone());
                (label, false)
            }
            Selection::Single(None) => (self.placeholder.clone(), true),
            Selection::Multi(values) => match values.len() {
                0 => (self.placeholder.clone(), true),
                1 => {
                    let label = self
                        .option(&values[0])
                        .map(|o| o.label.clone())
                        .unwrap_or_else(|| values[0].clone());
                    (label, false)
                }
                n => (format!("{n} selected"), false),
            },
        }
    }

    fn paint_trigger(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let rounded = RoundedRect::new(rect, self.border_radius);

        let background = if self.base.is_enabled() {
            self.background_color
        } else {
            self.disabled_background_color
        };
        ctx.renderer().fill_rounded_rect(rounded, background);

        let border_color = if self.base.has_focus() || self.transition.is_interactive() {
            self.focus_border_color
        } else {
            self.border_color
        };
        ctx.renderer()
            .stroke_rounded_rect(rounded, &Stroke::new(border_color, BORDER));

        // Label or placeholder.
        let (label, is_placeholder) = self.trigger_label();
        if !label.is_empty() {
            let color = if !self.base.is_enabled() {
                self.disabled_text_color
            } else if is_placeholder {
                self.placeholder_color
            } else {
                self.text_color
            };
            let style = TextStyle::new(13.0, color);
            let baseline = rect.height() / 2.0 + style.size / 2.0 - 2.0;
            ctx.renderer()
                .draw_text(&label, Point::new(PADDING, baseline), &style);
        }

        // Clear affordance.
        if self.clearable && !self.selection.is_empty() && self.base.is_enabled() {
            let cx = rect.width() - ARROW_WIDTH - CLEAR_WIDTH / 2.0;
            let cy = rect.height() / 2.0;
            let r = 3.5;
            let stroke = Stroke::new(self.placeholder_color, 1.5);
            ctx.renderer()
                .draw_line(Point::new(cx - r, cy - r), Point::new(cx + r, cy + r), &stroke);
            ctx.renderer()
                .draw_line(Point::new(cx + r, cy - r), Point::new(cx - r, cy + r), &stroke);
        }

        // Dropdown arrow.
        let arrow_color = if self.trigger_hovered && self.base.is_enabled() {
            self.accent_color
        } else {
            self.placeholder_color
        };
        let cx = rect.width() - ARROW_WIDTH / 2.0;
        let cy = rect.height() / 2.0;
        let stroke = Stroke::new(arrow_color, 2.0);
        ctx.renderer().draw_line(
            Point::new(cx - 4.0, cy - 2.0),
            Point::new(cx, cy + 2.5),
            &stroke,
        );
        ctx.renderer().draw_line(
            Point::new(cx + 4.0, cy - 2.0),
            Point::new(cx, cy + 2.5),
            &stroke,
        );
    }

    /// Paint the floating panel at overlay coordinates.
    ///
    /// Called by the overlay paint pass, after all inline widgets. Paints
    /// nothing while the panel is detached.
    pub fn paint_panel(&self, renderer: &mut dyn Renderer, now: Instant) {
        if self.panel.is_none() || !self.transition.is_visible() {
            return;
        }

        let rect = self
            .panel_rect
            .translated(0.0, -self.transition.slide_offset(now));
        renderer.push_opacity(self.transition.opacity(now));

        renderer.fill_rect(rect, self.panel_background_color);
        renderer.stroke_rect(rect, &Stroke::new(self.panel_border_color, BORDER));

        let layout = self.panel_layout();
        let origin = rect.origin;

        if let Some(search) = layout.search {
            self.paint_search(renderer, search.translated(origin.x, origin.y));
        }
        if let Some(select_all) = layout.select_all {
            self.paint_select_all(renderer, select_all.translated(origin.x, origin.y));
        }
        if let Some(empty_row) = layout.empty_row {
            self.paint_empty_row(renderer, empty_row.translated(origin.x, origin.y));
        }
        self.paint_rows(renderer, rect, &layout);

        renderer.pop_opacity();
    }

    fn paint_search(&self, renderer: &mut dyn Renderer, rect: Rect) {
        let field = rect.inset(4.0);
        renderer.fill_rect(field, Color::from_rgb8(248, 248, 248));
        let border = if self.search_focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        renderer.stroke_rect(field, &Stroke::new(border, 1.0));

        let style = if self.search_text.is_empty() {
            TextStyle::new(12.0, self.placeholder_color)
        } else {
            TextStyle::new(12.0, self.text_color)
        };
        let text = if self.search_text.is_empty() {
            "Search…"
        } else {
            &self.search_text
        };
        let baseline = field.origin.y + field.height() / 2.0 + style.size / 2.0 - 2.0;
        renderer.draw_text(text, Point::new(field.origin.x + 6.0, baseline), &style);

        if self.search_focused {
            let caret_x = field.origin.x + 6.0 + style.measure(&self.search_text) + 1.0;
            renderer.draw_line(
                Point::new(caret_x, field.origin.y + 4.0),
                Point::new(caret_x, field.bottom() - 4.0),
                &Stroke::new(self.text_color, 1.0),
            );
        }
    }

    fn paint_checkbox(&self, renderer: &mut dyn Renderer, rect: Rect, state: SelectAllState) {
        let box_rect = Rect::new(
            rect.origin.x + PADDING,
            rect.origin.y + (rect.height() - CHECK_SIZE) / 2.0,
            CHECK_SIZE,
            CHECK_SIZE,
        );
        let rounded = RoundedRect::new(box_rect, 3.0);
        match state {
            SelectAllState::None => {
                renderer.fill_rounded_rect(rounded, Color::WHITE);
                renderer.stroke_rounded_rect(rounded, &Stroke::new(self.border_color, 1.0));
            }
            SelectAllState::All => {
                renderer.fill_rounded_rect(rounded, self.accent_color);
                let stroke = Stroke::new(Color::WHITE, 2.0);
                let (cx, cy) = (box_rect.origin.x, box_rect.origin.y);
                renderer.draw_line(
                    Point::new(cx + 3.0, cy + 7.0),
                    Point::new(cx + 6.0, cy + 10.0),
                    &stroke,
                );
                renderer.draw_line(
                    Point::new(cx + 6.0, cy + 10.0),
                    Point::new(cx + 11.0, cy + 4.0),
                    &stroke,
                );
            }
            SelectAllState::Some => {
                renderer.fill_rounded_rect(rounded, self.accent_color);
                let cy = box_rect.center().y;
                renderer.draw_line(
                    Point::new(box_rect.origin.x + 3.0, cy),
                    Point::new(box_rect.right() - 3.0, cy),
                    &Stroke::new(Color::WHITE, 2.0),
                );
            }
        }
    }

    fn paint_select_all(&self, renderer: &mut dyn Renderer, rect: Rect) {
        if self.hover_part == Some(PanelPart::SelectAll) {
            renderer.fill_rect(rect, self.hover_color);
        }
        let state = self.select_all_state();
        self.paint_checkbox(renderer, rect, state);

        let label = if state == SelectAllState::All {
            "Deselect all"
        } else {
            "Select all"
        };
        let style = TextStyle::new(12.0, self.text_color).with_weight(FontWeight::Medium);
        let baseline = rect.origin.y + rect.height() / 2.0 + style.size / 2.0 - 2.0;
        renderer.draw_text(
            label,
            Point::new(rect.origin.x + PADDING * 2.0 + CHECK_SIZE, baseline),
            &style,
        );

        renderer.draw_line(
            Point::new(rect.origin.x, rect.bottom()),
            Point::new(rect.right(), rect.bottom()),
            &Stroke::new(self.panel_border_color, 1.0),
        );
    }

    fn paint_empty_row(&self, renderer: &mut dyn Renderer, rect: Rect) {
        let selected = matches!(&self.selection, Selection::Single(None));
        if self.hover_part == Some(PanelPart::EmptyRow) {
            renderer.fill_rect(rect, self.hover_color);
        }
        let label = self.empty_option.as_deref().unwrap_or_default();
        let style = TextStyle::new(13.0, self.placeholder_color);
        let baseline = rect.origin.y + rect.height() / 2.0 + style.size / 2.0 - 2.0;
        renderer.draw_text(label, Point::new(rect.origin.x + PADDING, baseline), &style);
        if selected {
            self.paint_check_mark(renderer, rect);
        }
    }

    fn paint_check_mark(&self, renderer: &mut dyn Renderer, row: Rect) {
        let stroke = Stroke::new(self.accent_color, 2.0);
        let x = row.right() - PADDING - 10.0;
        let cy = row.center().y;
        renderer.draw_line(
            Point::new(x, cy),
            Point::new(x + 3.0, cy + 3.0),
            &stroke,
        );
        renderer.draw_line(
            Point::new(x + 3.0, cy + 3.0),
            Point::new(x + 9.0, cy - 4.0),
            &stroke,
        );
    }

    fn paint_rows(&self, renderer: &mut dyn Renderer, panel: Rect, layout: &PanelLayout) {
        let filtered = self.filtered_indices();

        if filtered.is_empty() {
            let message = if self.options.is_empty() {
                "No options available"
            } else {
                "No results found"
            };
            let style = TextStyle::new(12.0, self.placeholder_color);
            let baseline = panel.origin.y + layout.list_top + ITEM_HEIGHT / 2.0 + style.size / 2.0 - 2.0;
            renderer.draw_text(
                message,
                Point::new(panel.origin.x + PADDING, baseline),
                &style,
            );
            return;
        }

        for visual in 0..layout.visible_rows {
            let list_idx = self.scroll_offset + visual;
            let Some(&option_idx) = filtered.get(list_idx) else { break };
            let option = &self.options[option_idx];

            let row = Rect::new(
                panel.origin.x + BORDER,
                panel.origin.y + layout.list_top + visual as f32 * ITEM_HEIGHT,
                panel.width() - BORDER * 2.0,
                ITEM_HEIGHT,
            );

            if self.highlighted == Some(list_idx) {
                renderer.fill_rect(row, self.highlight_color);
            } else if self.hover_part == Some(PanelPart::Row(list_idx)) {
                renderer.fill_rect(row, self.hover_color);
            }

            let selected = match &self.selection {
                Selection::Single(value) => value.as_deref() == Some(option.value.as_str()),
                Selection::Multi(values) => values.contains(&option.value),
            };

            let mut text_x = row.origin.x + PADDING;

            if matches!(self.selection, Selection::Multi(_)) {
                let state = if selected {
                    SelectAllState::All
                } else {
                    SelectAllState::None
                };
                self.paint_checkbox(renderer, row, state);
                text_x += CHECK_SIZE + PADDING;
            }

            let text_color = if option.disabled {
                self.disabled_text_color
            } else {
                self.text_color
            };

            if let Some(icon) = &option.icon {
                let icon_style = TextStyle::new(13.0, icon.tint().unwrap_or(text_color));
                let baseline = row.origin.y + row.height() / 2.0 + icon_style.size / 2.0 - 2.0;
                renderer.draw_text(icon.glyph(), Point::new(text_x, baseline), &icon_style);
                text_x += icon_style.measure(icon.glyph()) + PADDING / 2.0;
            }

            let style = TextStyle::new(13.0, text_color);
            let baseline = row.origin.y + row.height() / 2.0 + style.size / 2.0 - 2.0;
            renderer.draw_text(&option.label, Point::new(text_x, baseline), &style);

            if let Some(description) = &option.description {
                let desc_style = TextStyle::new(11.0, if option.disabled {
                    self.disabled_text_color
                } else {
                    self.placeholder_color
                });
                let desc_x = text_x + style.measure(&option.label) + PADDING;
                renderer.draw_text(description, Point::new(desc_x, baseline), &desc_style);
            }

            if selected && matches!(self.selection, Selection::Single(_)) {
                self.paint_check_mark(renderer, row);
            }
        }

        // Scroll indicator when the list overflows.
        if filtered.len() > self.max_visible_items {
            let track_height = layout.visible_rows as f32 * ITEM_HEIGHT;
            let thumb_height =
                (self.max_visible_items as f32 / filtered.len() as f32) * track_height;
            let max_scroll = (filtered.len() - self.max_visible_items) as f32;
            let thumb_y = if max_scroll > 0.0 {
                (self.scroll_offset as f32 / max_scroll) * (track_height - thumb_height)
            } else {
                0.0
            };
            let track = Rect::new(
                panel.right() - 5.0,
                panel.origin.y + layout.list_top,
                3.0,
                track_height,
            );
            let thumb = Rect::new(
                track.origin.x,
                track.origin.y + thumb_y,
                3.0,
                thumb_height.max(10.0),
            );
            renderer.fill_rect(track, Color::from_rgb8(240, 240, 240));
            renderer.fill_rect(thumb, Color::from_rgb8(185, 185, 185));
        }
    }
}

impl Widget for FloatingSelect {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(160.0, 28.0).with_minimum(Size::new(80.0, 24.0))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.paint_trigger(ctx);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::Wheel(e) => self.handle_wheel(e),
            WidgetEvent::FocusOut(_) => self.handle_focus_out(),
            WidgetEvent::Leave(_) => {
                if self.trigger_hovered || self.hover_part.is_some() {
                    self.trigger_hovered = false;
                    self.hover_part = None;
                    self.base.update();
                }
                false
            }
            WidgetEvent::Timer(e) => self.handle_timer(e.id),
            _ => false,
        }
    }
}

impl Object for FloatingSelect {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Drop for FloatingSelect {
    fn drop(&mut self) {
        // Tear down without signals: a dropped widget must never call back.
        self.timers.remove_for(self.base.object_id());
        if let Some(id) = self.panel.take() {
            self.overlay.detach(id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
