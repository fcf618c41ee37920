//! Build-time and static client settings.

/// Backend base URL baked in at build time (`APOTEK_API_URL=https://... trunk build`).
/// Without it the API is expected on the page's own origin.
pub const API_URL_OVERRIDE: Option<&str> = option_env!("APOTEK_API_URL");

pub const LOG_LEVEL: log::Level = log::Level::Debug;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [15, 30, 50, 100];

/// Delay before a typed search is sent to the server.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How often the header bell refreshes the unread counter.
pub const UNREAD_POLL_MS: u32 = 60_000;

/// Timestamps from the server are UTC; they are shown in WIB (UTC+7).
pub const DISPLAY_UTC_OFFSET_HOURS: i32 = 7;
