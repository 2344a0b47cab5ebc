//! Infinite Scroll
//!
//! `idle -> loading -> idle`, one load at a time. Loads go through a
//! [`PageSource`]; the shipped source only waits, there is no backend to call.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use leptos_page_events::{query_all, set_displayed, PageEvents};
use log::{debug, warn};

use crate::context::AppContext;
use crate::error::UiResult;
use crate::models::NewsSummary;

/// Viewport position relative to the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub inner_height: f64,
    pub scroll_y: f64,
    pub body_height: f64,
}

impl ScrollMetrics {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document()?.body()?;
        Some(Self {
            inner_height: window.inner_height().ok()?.as_f64()?,
            scroll_y: window.scroll_y().ok()?,
            body_height: f64::from(body.offset_height()),
        })
    }

    /// Viewport bottom is within `threshold` of the page bottom
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.inner_height + self.scroll_y >= self.body_height - threshold
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLoader {
    page: u32,
    loading: bool,
}

impl Default for ScrollLoader {
    fn default() -> Self {
        Self { page: 1, loading: false }
    }
}

impl ScrollLoader {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Enter `loading`; returns the page to fetch, or `None` when a load is pending
    pub fn try_begin(&mut self) -> Option<u32> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.page + 1)
    }

    /// Back to `idle`; the page counter advances even when the load failed
    pub fn finish(&mut self) {
        if self.loading {
            self.loading = false;
            self.page += 1;
        }
    }
}

/// Supplier of further article cards
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn load_page(&self, page: u32) -> UiResult<Vec<NewsSummary>>;
}

/// Stand-in source: waits, then yields nothing
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSource {
    pub delay_ms: u32,
}

impl PageSource for SimulatedSource {
    async fn load_page(&self, _page: u32) -> UiResult<Vec<NewsSummary>> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(Vec::new())
    }
}

/// Run one load if the loader is idle; `false` when one was already pending.
/// `indicator` is switched on for the duration of the load.
pub async fn load_next<S: PageSource>(ctx: AppContext, source: &S, indicator: impl Fn(bool)) -> bool {
    let Some(page) = ctx.begin_load() else {
        return false;
    };
    indicator(true);
    match source.load_page(page).await {
        Ok(items) => debug!("Loaded page {} ({} items)", page, items.len()),
        Err(e) => warn!("Loading page {} failed: {}", page, e),
    }
    indicator(false);
    ctx.finish_load();
    true
}

pub fn show_indicator(displayed: bool) {
    for indicator in query_all(".loading-indicator") {
        set_displayed(&indicator, displayed);
    }
}

pub fn bind_infinite_scroll(ctx: AppContext, events: PageEvents) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let config = ctx.config().scroll;
    let source = SimulatedSource {
        delay_ms: config.load_delay_ms,
    };
    events.listen(&window, "scroll", move |_| {
        let Some(metrics) = ScrollMetrics::current() else {
            return;
        };
        if metrics.near_bottom(config.threshold_px) && !ctx.is_loading() {
            spawn_local(async move {
                load_next(ctx, &source, show_indicator).await;
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use leptos::prelude::*;

    use super::*;
    use crate::config::PortalConfig;
    use crate::error::UiError;
    use crate::store::PageStateStoreFields;

    struct FixedSource(UiResult<Vec<NewsSummary>>);

    impl PageSource for FixedSource {
        async fn load_page(&self, _page: u32) -> UiResult<Vec<NewsSummary>> {
            self.0.clone()
        }
    }

    fn summary(id: u32) -> NewsSummary {
        NewsSummary {
            id,
            titulo: format!("Notícia {}", id),
            resumo: String::new(),
            url: format!("/noticias/{}/", id),
            imagem: None,
            data_publicacao: "2026-10-19T14:30:00-03:00".to_string(),
        }
    }

    fn page_of(ctx: &AppContext) -> u32 {
        ctx.store.loader().with_untracked(|loader| loader.page())
    }

    #[test]
    fn test_near_bottom_threshold() {
        let metrics = |scroll_y| ScrollMetrics {
            inner_height: 800.0,
            scroll_y,
            body_height: 5000.0,
        };
        assert!(!metrics(3100.0).near_bottom(1000.0));
        assert!(metrics(3200.0).near_bottom(1000.0));
        assert!(metrics(4200.0).near_bottom(1000.0));
    }

    #[test]
    fn test_short_page_is_always_near_bottom() {
        let metrics = ScrollMetrics {
            inner_height: 900.0,
            scroll_y: 0.0,
            body_height: 600.0,
        };
        assert!(metrics.near_bottom(1000.0));
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }

    #[test]
    fn test_concurrent_triggers_start_one_load() {
        let mut loader = ScrollLoader::default();
        assert_eq!(loader.try_begin(), Some(2));
        for _ in 0..10 {
            assert_eq!(loader.try_begin(), None);
        }
        assert!(loader.is_loading());

        loader.finish();
        assert!(!loader.is_loading());
        assert_eq!(loader.page(), 2);
        assert_eq!(loader.try_begin(), Some(3));
    }

    #[test]
    fn test_finish_when_idle_is_noop() {
        let mut loader = ScrollLoader::default();
        loader.finish();
        assert_eq!(loader.page(), 1);
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn test_load_next_runs_indicator_and_advances() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(PortalConfig::default());
        let switched = RefCell::new(Vec::new());

        let source = FixedSource(Ok(vec![summary(1), summary(2)]));
        assert!(load_next(ctx, &source, |on| switched.borrow_mut().push(on)).await);

        assert_eq!(*switched.borrow(), vec![true, false]);
        assert_eq!(page_of(&ctx), 2);
        assert!(!ctx.is_loading());
    }

    #[tokio::test]
    async fn test_failed_load_still_advances_and_clears_loading() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(PortalConfig::default());
        let switched = RefCell::new(Vec::new());

        let source = FixedSource(Err(UiError::Js("network down".to_string())));
        assert!(load_next(ctx, &source, |on| switched.borrow_mut().push(on)).await);

        assert_eq!(*switched.borrow(), vec![true, false]);
        assert_eq!(page_of(&ctx), 2);
        assert!(!ctx.is_loading());
    }

    #[tokio::test]
    async fn test_load_next_skips_while_pending() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(PortalConfig::default());
        assert_eq!(ctx.begin_load(), Some(2));

        let source = FixedSource(Ok(Vec::new()));
        assert!(!load_next(ctx, &source, |_| panic!("indicator touched")).await);
        assert!(ctx.is_loading());
        assert_eq!(page_of(&ctx), 1);
    }
}
