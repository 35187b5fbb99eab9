// Site-wide constants. Everything here is fixed at compile time.

pub const BRAND_SHORT: &str = "SCSA";
pub const BRAND_FULL: &str = "Swinburne Cambodian Student Association";

/// Appended to every page title, e.g. "Events | SCSA".
pub const TITLE_SUFFIX: &str = " | SCSA";

// Fixed paths under the site root; deployment puts the files there.
// No fallback if missing.
pub const BANNER_IMAGE: &str = "/assets/banner.png";
pub const GROUP_PHOTO: &str = "/assets/group-photo.jpg";

/// Media query used once at startup to pick the initial display mode.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Attribute written on <body> so styles.css can key off the mode.
pub const BODY_MODE_ATTR: &str = "data-mode";
