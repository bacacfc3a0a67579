//! Headless FloatingSelect walkthrough.
//!
//! Builds a multi-select over game-server regions, drives it through an
//! open/filter/select/dismiss cycle, and paints each step into a display
//! list. Run with `RUST_LOG=debug` to watch the overlay and widget targets.

use std::sync::Arc;
use std::time::{Duration, Instant};

use icefuse_controls::prelude::*;
use icefuse_controls::widget::TimerEvent;
use icefuse_controls_core::PerfSpan;
use icefuse_controls_render::{DisplayList, Rect};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 1280.0, 720.0)));
    let timers = shared_timer_router();

    let mut regions = FloatingSelect::multi(overlay.clone(), timers.clone())
        .with_options(vec![
            SelectOption::new("us-west", "US West").with_description("Oregon"),
            SelectOption::new("us-east", "US East").with_description("Virginia"),
            SelectOption::new("eu", "Europe").with_description("Frankfurt"),
            SelectOption::new("oce", "Oceania").with_description("Sydney"),
            SelectOption::new("legacy", "Legacy").disabled(),
        ])
        .with_placeholder("All regions")
        .with_searchable(true)
        .with_select_all(true)
        .with_clearable(true);
    regions.set_geometry(Rect::new(24.0, 24.0, 220.0, 28.0));

    regions.selection_changed.connect(|change| {
        if let SelectionChange::Multi(values) = change {
            println!("selection -> {values:?}");
        }
    });
    regions.closed.connect(|_| println!("panel removed"));

    let mut now = Instant::now();

    // Open and let the enter transition finish.
    regions.open(now);
    now += Duration::from_millis(150);
    regions.tick(now);
    println!("phase after open: {:?}", regions.panel_phase());

    // Filter down to the US regions and select them all.
    regions.set_search("us");
    println!(
        "filtered rows: {:?}",
        regions
            .filtered_indices()
            .iter()
            .map(|&i| regions.options()[i].label.as_str())
            .collect::<Vec<_>>()
    );
    regions.select_all_filtered();
    println!("select-all state: {:?}", regions.select_all_state());

    // Paint the panel into a display list, as the overlay pass would.
    let mut frame = DisplayList::new();
    {
        let _span = PerfSpan::new("overlay-paint").with_warn_threshold(Duration::from_millis(4));
        regions.paint_panel(&mut frame, now);
    }
    println!(
        "panel frame: {} commands, rows {:?}",
        frame.command_count(),
        frame.text_runs()
    );

    // Dismiss; the close-delay timer removes the panel.
    regions.close(now);
    now += Duration::from_millis(250);
    for (_, timer) in timers.drain_due(now) {
        let mut event = WidgetEvent::Timer(TimerEvent::new(timer));
        regions.event(&mut event);
    }
    println!("phase after close: {:?}", regions.panel_phase());
    println!("overlay panels: {}", overlay.panel_count());
}
