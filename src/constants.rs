//! Application-wide constants

/// Default mapping key for the display name field
pub const DEFAULT_NAME_KEY: &str = "name";

/// Default mapping key for the download URL field
pub const DEFAULT_DOWNLOAD_KEY: &str = "download";

/// Default mapping key for the icon URL field
pub const DEFAULT_ICON_KEY: &str = "icon";

/// Default key holding the entry array in an object-shaped catalog document
pub const DEFAULT_APPS_KEY: &str = "apps";

/// Maximum number of search results to display
pub const MAX_RESULTS: usize = 100;

/// Column width before URL values are elided in table output
pub const ELIDE_WIDTH: usize = 48;
