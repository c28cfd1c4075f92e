use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    domain::{activate, BookingState, CatalogSource},
    infra::{
        config::ApiConfig,
        skips::{FetchError, SkipClient},
    },
    ui::{components::toast::{Toast, ToastMessage}, pages::SkipSelectionPage, shell::Shell},
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    SkipSelection {},
}

#[component]
pub fn App() -> Element {
    let booking = use_signal(BookingState::default);
    use_context_provider(|| booking);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    // Bumped by the retry action to start a new fetch cycle.
    let reload = use_signal(|| 0_u32);
    use_context_provider(|| reload);

    // Cancelled when the app is torn down so an in-flight fetch does not outlive it.
    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let _skips = use_resource(move || {
        let attempt = reload();
        let cancel = cancel.child_token();
        async move { load_skips(booking, attempt, cancel).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn load_skips(
    mut booking: Signal<BookingState>,
    attempt: u32,
    cancel: CancellationToken,
) -> Option<CatalogSource> {
    let config = ApiConfig::default();
    info!(
        attempt,
        postcode = %config.default_location.postcode,
        area = %config.default_location.area,
        "loading skip catalog"
    );
    booking.with_mut(BookingState::begin_loading);

    let mut next = BookingState::default();
    let outcome = load_catalog(&mut next, &config, &cancel).await;
    if outcome.is_some() {
        booking.set(next);
    }
    outcome
}

/// Builds a client from `config` and activates `state` against it. A client that
/// cannot be built counts as a failed fetch, so the fallback catalog is installed.
async fn load_catalog(
    state: &mut BookingState,
    config: &ApiConfig,
    cancel: &CancellationToken,
) -> Option<CatalogSource> {
    match SkipClient::with_config(config) {
        Ok(client) => activate(state, &client, &config.default_location, cancel).await,
        Err(err) => {
            warn!(error = %err, "failed to initialise skip client");
            state.begin_loading();
            Some(state.apply_fetch_result::<FetchError>(Err(err)))
        }
    }
}

#[component]
pub fn SkipSelection() -> Element {
    rsx! { Shell { SkipSelectionPage {} } }
}
