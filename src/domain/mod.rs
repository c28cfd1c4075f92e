//! Skip pricing, fallback catalog and the booking flow state live here.

pub mod booking;
pub mod catalog;
pub mod entities;
pub mod pricing;
pub mod steps;

#[allow(unused_imports)]
pub use booking::{
    activate, fetch_catalog, BookingError, BookingPhase, BookingState, CatalogSource, SkipSource,
};
#[allow(unused_imports)]
pub use catalog::{fallback_catalog, FALLBACK_DEFAULT_LABEL};
#[allow(unused_imports)]
pub use entities::{Dimensions, Location, Skip, SkipQuote};
#[allow(unused_imports)]
pub use pricing::{to_skip, to_skips, total_price};
#[allow(unused_imports)]
pub use steps::{progress_percent, step_status, BookingStep, ProgressStep, StepStatus};
