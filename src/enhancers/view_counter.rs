//! Simulated view counter for `#view-count`

use leptos_page_events::{query_one, PageEvents};

use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCounter {
    views: u32,
}

/// Map a `Math.random()` sample to `0..span`
fn pick(sample: f64, span: u32) -> u32 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    ((sample * f64::from(span)) as u32).min(span - 1)
}

impl ViewCounter {
    /// Start somewhere in `50..=149`
    pub fn new(sample: f64) -> Self {
        Self { views: 50 + pick(sample, 100) }
    }

    /// Add `1..=3` views
    pub fn tick(&mut self, sample: f64) -> u32 {
        self.views += 1 + pick(sample, 3);
        self.views
    }

    pub fn views(&self) -> u32 {
        self.views
    }
}

pub fn bind_view_counter(ctx: AppContext, events: PageEvents) {
    let Some(el) = query_one("#view-count") else {
        return;
    };
    let mut counter = ViewCounter::new(js_sys::Math::random());
    el.set_text_content(Some(&counter.views().to_string()));

    events.interval(ctx.config().view_counter.interval_ms, move || {
        let views = counter.tick(js_sys::Math::random());
        el.set_text_content(Some(&views.to_string()));
    });
}
