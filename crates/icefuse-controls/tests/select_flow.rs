//! End-to-end interaction flow for FloatingSelect.
//!
//! Drives the widget the way an embedding frame loop would: mouse and key
//! events in, timer fires routed back, panel painted through the overlay
//! pass into a display list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use icefuse_controls::prelude::*;
use icefuse_controls::widget::{
    Key, KeyPressEvent, KeyboardModifiers, MouseButton, MousePressEvent, TimerEvent,
};
use icefuse_controls_render::{DisplayList, Point, Rect};

const ITEM_HEIGHT: f32 = 26.0;

struct Harness {
    overlay: Arc<WindowOverlay>,
    timers: SharedTimerRouter,
    select: FloatingSelect,
    changes: Arc<Mutex<Vec<SelectionChange>>>,
    now: Instant,
}

impl Harness {
    fn multi_scenario() -> Self {
        let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
        let timers = shared_timer_router();

        let mut select = FloatingSelect::multi(overlay.clone(), timers.clone())
            .with_options(vec![
                SelectOption::new("a", "Alpha"),
                SelectOption::new("b", "Beta"),
                SelectOption::new("c", "Gamma").disabled(),
            ])
            .with_placeholder("Pick letters")
            .with_select_all(true);
        select.set_geometry(Rect::new(20.0, 20.0, 180.0, 28.0));

        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        select.selection_changed.connect(move |change| {
            changes_clone.lock().push(change.clone());
        });

        Self {
            overlay,
            timers,
            select,
            changes,
            now: Instant::now(),
        }
    }

    fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        for (_, timer) in self.timers.drain_due(self.now) {
            let mut event = WidgetEvent::Timer(TimerEvent::new(timer));
            self.select.event(&mut event);
        }
        self.select.tick(self.now);
    }

    fn click_trigger(&mut self) {
        let geometry = self.select.geometry();
        let local = Point::new(geometry.width() / 2.0, geometry.height() / 2.0);
        let window = Point::new(
            geometry.origin.x + local.x,
            geometry.origin.y + local.y,
        );
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            local,
            window,
            KeyboardModifiers::NONE,
        ));
        self.select.event(&mut event);
    }

    fn click_panel_at(&mut self, window: Point) {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(-500.0, -500.0),
            window,
            KeyboardModifiers::NONE,
        ));
        self.select.event(&mut event);
    }

    /// Window coordinates of the center of panel row `visual_idx`, counting
    /// the select-all row as part of the panel chrome above the list.
    fn row_center(&self, visual_idx: usize) -> Point {
        let panel = self.select.panel_rect().expect("panel attached");
        // border + select-all row + rows above the target.
        let y = panel.origin.y + 1.0 + ITEM_HEIGHT * (visual_idx as f32 + 1.0) + ITEM_HEIGHT / 2.0;
        Point::new(panel.origin.x + 40.0, y)
    }

    fn select_all_center(&self) -> Point {
        let panel = self.select.panel_rect().expect("panel attached");
        Point::new(panel.origin.x + 40.0, panel.origin.y + 1.0 + ITEM_HEIGHT / 2.0)
    }

    fn press_escape(&mut self) {
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Escape));
        self.select.event(&mut event);
    }

    fn paint(&self) -> DisplayList {
        let mut list = DisplayList::new();
        let geometry = self.select.geometry();
        let local = Rect::new(0.0, 0.0, geometry.width(), geometry.height());
        // Trigger first, then the overlay pass paints the panel on top.
        let mut ctx = PaintContext::new(&mut list, local);
        self.select.paint(&mut ctx);
        self.select.paint_panel(&mut list, self.now);
        list
    }
}

#[test]
fn full_click_through_scenario() {
    let mut h = Harness::multi_scenario();

    // Click trigger: the panel opens and attaches to the overlay.
    h.click_trigger();
    assert!(h.select.is_open());
    assert_eq!(h.overlay.panel_count(), 1);
    h.advance(150);
    assert_eq!(h.select.panel_phase(), PanelPhase::Open);

    // Click "Alpha": onChange(["a"]).
    let alpha = h.row_center(0);
    h.click_panel_at(alpha);
    assert_eq!(
        h.changes.lock().last(),
        Some(&SelectionChange::Multi(vec!["a".to_string()]))
    );
    assert!(h.select.is_open(), "multi-select keeps the panel open");

    // Click "Gamma" (disabled): no change reported.
    let gamma = h.row_center(2);
    let before = h.changes.lock().len();
    h.click_panel_at(gamma);
    assert_eq!(h.changes.lock().len(), before);

    // Click "select all": Gamma is excluded because it is disabled.
    let select_all = h.select_all_center();
    h.click_panel_at(select_all);
    assert_eq!(
        h.changes.lock().last(),
        Some(&SelectionChange::Multi(vec!["a".to_string(), "b".to_string()]))
    );
    assert_eq!(h.select.select_all_state(), SelectAllState::All);

    // Escape: the panel closes; after the close delay it is removed.
    h.press_escape();
    assert_eq!(h.select.panel_phase(), PanelPhase::Closing);
    h.advance(1000);
    assert_eq!(h.select.panel_phase(), PanelPhase::Closed);
    assert_eq!(h.overlay.panel_count(), 0);

    // The selection survived dismissal.
    assert_eq!(h.select.selected_values(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn painted_panel_reflects_selection_state() {
    let mut h = Harness::multi_scenario();
    h.click_trigger();
    h.advance(150);

    let alpha = h.row_center(0);
    h.click_panel_at(alpha);

    let list = h.paint();
    assert!(list.contains_text("Alpha"));
    assert!(list.contains_text("Beta"));
    assert!(list.contains_text("Gamma"));
    assert!(list.contains_text("Select all"));

    // Trigger shows the single selected label.
    assert!(list.contains_text("Alpha"));
}

#[test]
fn escape_then_reopen_shows_a_clean_panel() {
    let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
    let timers = shared_timer_router();
    let mut select = FloatingSelect::single(overlay.clone(), timers.clone())
        .with_options(vec![
            SelectOption::new("na", "North America"),
            SelectOption::new("eu", "Europe"),
            SelectOption::new("oce", "Oceania"),
        ])
        .with_searchable(true);
    select.set_geometry(Rect::new(20.0, 20.0, 180.0, 28.0));

    let mut now = Instant::now();
    select.open(now);

    // Type a query.
    for (key, ch) in [(Key::E, 'e'), (Key::U, 'u')] {
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::character(key, ch));
        select.event(&mut event);
    }
    assert_eq!(select.search_text(), "eu");
    assert_eq!(select.filtered_indices(), vec![1]);

    // Escape dismisses and resets the query.
    let mut escape = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Escape));
    select.event(&mut escape);

    now += Duration::from_millis(1000);
    for (_, timer) in timers.drain_due(now) {
        let mut event = WidgetEvent::Timer(TimerEvent::new(timer));
        select.event(&mut event);
    }
    assert_eq!(select.panel_phase(), PanelPhase::Closed);
    assert_eq!(overlay.panel_count(), 0);

    // Reopen: the search field is empty and the full list is back.
    select.open(now);
    assert_eq!(select.search_text(), "");
    assert_eq!(select.filtered_indices(), vec![0, 1, 2]);
}

#[test]
fn dropping_mid_close_fires_nothing() {
    let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
    let timers = shared_timer_router();
    let closed_count = Arc::new(Mutex::new(0usize));
    let now = Instant::now();

    {
        let mut select = FloatingSelect::single(overlay.clone(), timers.clone())
            .with_options(vec![SelectOption::new("x", "X")]);
        select.set_geometry(Rect::new(20.0, 20.0, 180.0, 28.0));
        let closed_clone = closed_count.clone();
        select.closed.connect(move |_| {
            *closed_clone.lock() += 1;
        });

        select.open(now);
        select.close(now + Duration::from_millis(10));
    }

    // Widget dropped while its close-delay timer was pending: the timer is
    // gone, the panel is detached, and no signal ever fires.
    assert_eq!(timers.active_count(), 0);
    assert!(timers.drain_due(now + Duration::from_secs(5)).is_empty());
    assert_eq!(overlay.panel_count(), 0);
    assert_eq!(*closed_count.lock(), 0);
}
