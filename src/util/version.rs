pub const APP_NAME: &str = "Skip Booking";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Release tag stamped by `build.rs`, when built from a tagged checkout.
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}
