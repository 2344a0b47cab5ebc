//! Share Action
//!
//! Tiered share: platform share sheet, then clipboard, then a new tab.
//! A failure at one tier silently moves on to the next; nothing is retried.

use leptos::task::spawn_local;
use leptos_page_events::{data_attr, query_all, PageEvents};
use log::{debug, info, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ShareFallback;
use crate::context::AppContext;
use crate::error::UiResult;
use crate::models::{Severity, ShareRequest};
use crate::platform::BrowserPlatform;

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

/// Browser capabilities the share chain depends on
#[allow(async_fn_in_trait)]
pub trait SharePlatform {
    fn can_share(&self) -> bool;

    /// Resolves when the user completes the share sheet; cancel is an error
    async fn share(&self, request: &ShareRequest) -> UiResult<()>;

    fn has_clipboard(&self) -> bool;

    async fn write_clipboard(&self, text: &str) -> UiResult<()>;

    fn open_tab(&self, url: &str) -> UiResult<()>;
}

/// Which tier handled the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    OpenedTab,
    Failed,
}

impl ShareOutcome {
    pub fn toast(self) -> (&'static str, Severity) {
        match self {
            ShareOutcome::Shared => ("Notícia compartilhada com sucesso!", Severity::Success),
            ShareOutcome::Copied => ("Link copiado para a área de transferência!", Severity::Success),
            ShareOutcome::OpenedTab => ("Link aberto em nova aba!", Severity::Info),
            ShareOutcome::Failed => ("Não foi possível compartilhar a notícia.", Severity::Error),
        }
    }
}

/// Twitter intent URL with title and url encoded like `encodeURIComponent`
pub fn tweet_intent_url(request: &ShareRequest) -> String {
    format!(
        "{}?text={}&url={}",
        TWEET_INTENT,
        utf8_percent_encode(&request.title, URI_COMPONENT),
        utf8_percent_encode(&request.url, URI_COMPONENT)
    )
}

/// URL opened by the last tier
pub fn fallback_url(request: &ShareRequest, fallback: ShareFallback) -> String {
    match fallback {
        ShareFallback::OpenUrl => request.url.clone(),
        ShareFallback::TweetIntent => tweet_intent_url(request),
    }
}

pub async fn share_article<P: SharePlatform>(
    platform: &P,
    request: &ShareRequest,
    fallback: ShareFallback,
) -> ShareOutcome {
    if platform.can_share() {
        match platform.share(request).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => debug!("Share sheet failed, falling back: {}", e),
        }
    }

    if platform.has_clipboard() {
        match platform.write_clipboard(&request.url).await {
            Ok(()) => return ShareOutcome::Copied,
            Err(e) => debug!("Clipboard write failed, falling back: {}", e),
        }
    }

    match platform.open_tab(&fallback_url(request, fallback)) {
        Ok(()) => ShareOutcome::OpenedTab,
        Err(e) => {
            warn!("Could not open share tab: {}", e);
            ShareOutcome::Failed
        }
    }
}

/// Wire every `.share-btn` on the page
pub fn bind_share_buttons(ctx: AppContext, events: PageEvents) {
    for button in query_all(".share-btn") {
        let target = button.clone();
        events.listen_active(&button, "click", move |ev| {
            ev.prevent_default();
            let request = ShareRequest::new(
                data_attr(&target, "title").unwrap_or_else(document_title),
                data_attr(&target, "url").unwrap_or_else(current_url),
            );
            let fallback = ctx.config().share.fallback;
            spawn_local(async move {
                let outcome = share_article(&BrowserPlatform, &request, fallback).await;
                info!("Shared {} via {:?}", request.url, outcome);
                let (message, severity) = outcome.toast();
                ctx.notifier.notify(message, severity);
            });
        });
    }
}

fn document_title() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.title())
        .unwrap_or_default()
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
