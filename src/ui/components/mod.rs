pub mod progress_indicator;
pub mod skip_card;
pub mod toast;
