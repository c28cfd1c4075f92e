//! Booking flow state for the skip-selection step.
//!
//! The flow always ends up with a usable catalog: a failed or empty fetch swaps in
//! the built-in fallback options instead of surfacing an error.

use std::fmt::Display;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::catalog::{fallback_catalog, FALLBACK_DEFAULT_LABEL};
use super::entities::{Location, Skip, SkipQuote};
use super::pricing::to_skips;
use super::steps::{progress_steps, BookingStep, ProgressStep};

/// Label fragment identifying the option pre-selected from live pricing.
pub const PREFERRED_SIZE_FRAGMENT: &str = "8 Yard";

pub const BACK_ACKNOWLEDGEMENT: &str = "Going back to previous step";

/// Anything that can list priced skips for a location.
#[allow(async_fn_in_trait)]
pub trait SkipSource {
    type Error: Display;

    async fn skips_by_location(&self, location: &Location) -> Result<Vec<SkipQuote>, Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Fallback,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Loading,
    Ready(CatalogSource),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("skip {0} is not in the current catalog")]
    UnknownSkip(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingState {
    pub phase: BookingPhase,
    pub current_step: BookingStep,
    skips: Vec<Skip>,
    selected: Option<Skip>,
    /// Shown as an "unable to load" panel. The default flow never sets it.
    load_error: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            phase: BookingPhase::Loading,
            current_step: BookingStep::SkipSelection,
            skips: Vec::new(),
            selected: None,
            load_error: None,
        }
    }
}

impl BookingState {
    pub fn skips(&self) -> &[Skip] {
        &self.skips
    }

    pub fn selected(&self) -> Option<&Skip> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, skip_id: &str) -> bool {
        self.selected
            .as_ref()
            .map(|skip| skip.id == skip_id)
            .unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == BookingPhase::Loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn steps(&self) -> Vec<ProgressStep> {
        progress_steps(self.current_step)
    }

    /// Starts a fetch cycle: the previous catalog and selection are discarded.
    pub fn begin_loading(&mut self) {
        self.phase = BookingPhase::Loading;
        self.skips.clear();
        self.selected = None;
        self.load_error = None;
    }

    /// Installs the outcome of a fetch, falling back to the built-in catalog on an
    /// empty list or any error.
    pub fn apply_fetch_result<E: Display>(
        &mut self,
        result: Result<Vec<SkipQuote>, E>,
    ) -> CatalogSource {
        match result {
            Ok(quotes) if !quotes.is_empty() => {
                self.skips = to_skips(&quotes);
                self.selected = self
                    .skips
                    .iter()
                    .find(|skip| skip.size_label.contains(PREFERRED_SIZE_FRAGMENT))
                    .cloned();
                info!(
                    count = self.skips.len(),
                    selected = self.selected.as_ref().map(|skip| skip.id.as_str()),
                    "loaded live skip catalog"
                );
                self.phase = BookingPhase::Ready(CatalogSource::Remote);
                CatalogSource::Remote
            }
            Ok(_) => {
                info!("no skips returned for location; using fallback catalog");
                self.install_fallback();
                CatalogSource::Fallback
            }
            Err(err) => {
                warn!(error = %err, "skip API not available; using fallback catalog");
                self.install_fallback();
                CatalogSource::Fallback
            }
        }
    }

    fn install_fallback(&mut self) {
        self.skips = fallback_catalog();
        self.selected = self
            .skips
            .iter()
            .find(|skip| skip.size_label == FALLBACK_DEFAULT_LABEL)
            .cloned();
        self.load_error = None;
        self.phase = BookingPhase::Ready(CatalogSource::Fallback);
    }

    /// Shows the "unable to load" panel instead of a catalog. The default flow
    /// always falls back and never calls this; it is for a caller that opts out of
    /// the fallback catalog (for example a strict-pricing embedding of the page),
    /// whose retry button then bumps the reload counter in `app.rs`.
    #[allow(dead_code)]
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.skips.clear();
        self.selected = None;
        self.load_error = Some(message.into());
    }

    /// Replaces the selection with the catalog entry carrying `skip_id`.
    pub fn select(&mut self, skip_id: &str) -> Result<&Skip, BookingError> {
        let skip = self
            .skips
            .iter()
            .find(|skip| skip.id == skip_id)
            .cloned()
            .ok_or_else(|| BookingError::UnknownSkip(skip_id.to_string()))?;
        Ok(self.selected.insert(skip))
    }

    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Acknowledgement shown when continuing; `None` while nothing is selected.
    pub fn continue_acknowledgement(&self) -> Option<String> {
        self.selected.as_ref().map(|skip| {
            format!(
                "Continuing with {} - £{} for {} days",
                skip.size_label, skip.total_price, skip.hire_period_days
            )
        })
    }

    pub fn back_acknowledgement(&self) -> &'static str {
        BACK_ACKNOWLEDGEMENT
    }
}

/// Runs one fetch for `location`. Returns `None` when `cancel` fires first.
pub async fn fetch_catalog<S: SkipSource>(
    source: &S,
    location: &Location,
    cancel: &CancellationToken,
) -> Option<Result<Vec<SkipQuote>, S::Error>> {
    tokio::select! {
        _ = cancel.cancelled() => {
            info!(postcode = %location.postcode, area = %location.area, "skip fetch cancelled");
            None
        }
        result = source.skips_by_location(location) => Some(result),
    }
}

/// Full activation: reset, fetch, then install live or fallback data.
///
/// A cancelled fetch leaves the state in [`BookingPhase::Loading`].
pub async fn activate<S: SkipSource>(
    state: &mut BookingState,
    source: &S,
    location: &Location,
    cancel: &CancellationToken,
) -> Option<CatalogSource> {
    state.begin_loading();
    let result = fetch_catalog(source, location, cancel).await?;
    Some(state.apply_fetch_result(result))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::pricing::tests::quote;

    enum Reply {
        Quotes(Vec<SkipQuote>),
        Failure(&'static str),
        Never,
    }

    struct FakeSource {
        reply: Reply,
        requested: RefCell<Vec<Location>>,
    }

    impl FakeSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl SkipSource for FakeSource {
        type Error = String;

        async fn skips_by_location(&self, location: &Location) -> Result<Vec<SkipQuote>, String> {
            self.requested.borrow_mut().push(location.clone());
            match &self.reply {
                Reply::Quotes(quotes) => Ok(quotes.clone()),
                Reply::Failure(message) => Err(message.to_string()),
                Reply::Never => std::future::pending().await,
            }
        }
    }

    fn default_location() -> Location {
        Location::new("NR32", "Lowestoft")
    }

    fn assert_fallback(state: &BookingState) {
        assert_eq!(state.phase, BookingPhase::Ready(CatalogSource::Fallback));
        assert_eq!(state.skips(), fallback_catalog().as_slice());
        assert_eq!(
            state.selected().map(|skip| skip.size_label.as_str()),
            Some("8 Yard Skip")
        );
        assert_eq!(state.load_error(), None);
    }

    #[tokio::test]
    async fn test_live_catalog_selects_eight_yard() {
        let source = FakeSource::new(Reply::Quotes(vec![
            quote(10, 4, 200.0, 20.0),
            quote(11, 8, 300.0, 20.0),
            quote(12, 12, 400.0, 20.0),
        ]));
        let mut state = BookingState::default();

        let outcome = activate(
            &mut state,
            &source,
            &default_location(),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(outcome, Some(CatalogSource::Remote));
        assert_eq!(state.phase, BookingPhase::Ready(CatalogSource::Remote));
        assert_eq!(state.skips().len(), 3);
        let selected = state.selected().expect("8 yard pre-selected");
        assert_eq!(selected.id, "11");
        assert!(selected.size_label.contains("8 Yard"));
        assert_eq!(selected.total_price, 360);
        assert_eq!(*source.requested.borrow(), vec![default_location()]);
    }

    #[tokio::test]
    async fn test_live_catalog_without_eight_yard_leaves_selection_empty() {
        let source = FakeSource::new(Reply::Quotes(vec![
            quote(1, 4, 200.0, 20.0),
            quote(2, 6, 250.0, 20.0),
        ]));
        let mut state = BookingState::default();

        activate(&mut state, &source, &default_location(), &CancellationToken::new()).await;

        assert_eq!(state.phase, BookingPhase::Ready(CatalogSource::Remote));
        assert_eq!(state.selected(), None);
        assert!(!state.can_continue());
        assert_eq!(state.continue_acknowledgement(), None);
    }

    #[tokio::test]
    async fn test_empty_list_installs_fallback() {
        let source = FakeSource::new(Reply::Quotes(Vec::new()));
        let mut state = BookingState::default();

        let outcome =
            activate(&mut state, &source, &default_location(), &CancellationToken::new()).await;

        assert_eq!(outcome, Some(CatalogSource::Fallback));
        assert_fallback(&state);
    }

    #[tokio::test]
    async fn test_failure_installs_fallback_without_error() {
        let source = FakeSource::new(Reply::Failure("transport error: connection refused"));
        let mut state = BookingState::default();

        let outcome =
            activate(&mut state, &source, &default_location(), &CancellationToken::new()).await;

        assert_eq!(outcome, Some(CatalogSource::Fallback));
        assert_fallback(&state);
        assert_eq!(state.skips().len(), 6);
    }

    #[tokio::test]
    async fn test_cancelled_fetch_leaves_state_loading() {
        let source = FakeSource::new(Reply::Never);
        let mut state = BookingState::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = activate(&mut state, &source, &default_location(), &cancel).await;

        assert_eq!(outcome, None);
        assert!(state.is_loading());
        assert!(state.skips().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[tokio::test]
    async fn test_fetch_catalog_returns_source_result() {
        let source = FakeSource::new(Reply::Failure("boom"));
        let result = fetch_catalog(&source, &default_location(), &CancellationToken::new()).await;
        assert_eq!(result, Some(Err("boom".to_string())));
    }

    #[test]
    fn test_begin_loading_resets_previous_cycle() {
        let mut state = BookingState::default();
        state.apply_fetch_result::<String>(Err("down".to_string()));
        assert!(state.selected().is_some());

        state.begin_loading();

        assert!(state.is_loading());
        assert!(state.skips().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_replaces_selection() {
        let mut state = BookingState::default();
        state.apply_fetch_result::<String>(Ok(Vec::new()));

        let chosen = state.select("5").expect("fallback id 5 exists");
        assert_eq!(chosen.size_label, "16 Yard Skip");
        assert!(state.is_selected("5"));
        assert!(!state.is_selected("3"));
        assert_eq!(
            state.continue_acknowledgement().as_deref(),
            Some("Continuing with 16 Yard Skip - £485 for 7 days")
        );
    }

    #[test]
    fn test_select_rejects_unknown_id() {
        let mut state = BookingState::default();
        state.apply_fetch_result::<String>(Ok(vec![quote(7, 8, 100.0, 0.0)]));

        let err = state.select("3").unwrap_err();

        assert_eq!(err, BookingError::UnknownSkip("3".to_string()));
        assert!(state.is_selected("7"));
    }

    #[test]
    fn test_fail_loading_exposes_error_until_next_cycle() {
        let mut state = BookingState::default();
        state.fail_loading("Server error. Please try again later.");
        assert_eq!(state.load_error(), Some("Server error. Please try again later."));
        assert!(state.skips().is_empty());

        state.begin_loading();
        assert_eq!(state.load_error(), None);
    }

    #[test]
    fn test_default_state_and_steps() {
        let state = BookingState::default();
        assert!(state.is_loading());
        assert_eq!(state.current_step, BookingStep::SkipSelection);
        assert_eq!(state.steps().len(), 6);
        assert_eq!(state.back_acknowledgement(), "Going back to previous step");
    }
}
