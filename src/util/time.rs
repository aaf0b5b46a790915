//! Clock access for locally fabricated timestamps.

/// Current time as an ISO 8601 string, from the browser clock.
///
/// The only consumer is the session user assembled after login/register,
/// whose timestamps the auth endpoints do not supply. Native builds have
/// no meaningful wall clock for that purpose and return an empty string.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
