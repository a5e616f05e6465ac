//! User agent selection.

/// Identifies the harvester itself.
pub const USER_AGENT: &str = concat!("mediaharvest/", env!("CARGO_PKG_VERSION"));

/// Desktop browser string, for sessions copied out of a browser.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0";

/// Keyword that selects [`BROWSER_USER_AGENT`].
pub const BROWSER_KEYWORD: &str = "browser";

/// Pick the user agent for a configured value.
///
/// Unset or blank means [`USER_AGENT`], `"browser"` means
/// [`BROWSER_USER_AGENT`], anything else is sent verbatim.
pub fn resolve_user_agent(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        None | Some("") => USER_AGENT.to_string(),
        Some(value) if value.eq_ignore_ascii_case(BROWSER_KEYWORD) => {
            BROWSER_USER_AGENT.to_string()
        }
        Some(custom) => custom.to_string(),
    }
}
