//! Zone-relative and absolute name helpers
//!
//! Providers disagree on whether names carry the zone suffix and whether
//! zones carry a trailing dot. These helpers accept either form.

/// Name used for the zone apex in relative form
pub const APEX: &str = "@";

/// Convert a (possibly fully-qualified) name to a name relative to `zone`
///
/// Trailing dots on both arguments are ignored and the suffix comparison is
/// ASCII case-insensitive. A name equal to the zone becomes [`APEX`]. Names
/// outside the zone are returned without their trailing dot.
///
/// ```
/// use libdns_core::names::relative_name;
///
/// assert_eq!(relative_name("www.example.com.", "example.com."), "www");
/// assert_eq!(relative_name("example.com", "example.com."), "@");
/// assert_eq!(relative_name("www", "example.com."), "www");
/// ```
pub fn relative_name(fqdn: &str, zone: &str) -> String {
    let fqdn = fqdn.trim_end_matches('.');
    let zone = zone.trim_end_matches('.');

    if fqdn.is_empty() || fqdn.eq_ignore_ascii_case(zone) {
        return APEX.to_string();
    }
    if zone.is_empty() {
        return fqdn.to_string();
    }

    let suffix = format!(".{}", zone.to_ascii_lowercase());
    if fqdn.to_ascii_lowercase().ends_with(&suffix) {
        return fqdn[..fqdn.len() - suffix.len()].to_string();
    }

    fqdn.to_string()
}

/// Join a zone-relative name with its zone
///
/// An empty name or [`APEX`] yields the zone itself. A name that already
/// ends with a dot is taken as fully-qualified. With an empty zone the name
/// is returned with surrounding dots removed.
///
/// ```
/// use libdns_core::names::absolute_name;
///
/// assert_eq!(absolute_name("www", "example.com."), "www.example.com.");
/// assert_eq!(absolute_name("@", "example.com."), "example.com.");
/// assert_eq!(absolute_name("example.com.", ""), "example.com");
/// ```
pub fn absolute_name(name: &str, zone: &str) -> String {
    if zone.is_empty() {
        return name.trim_matches('.').to_string();
    }
    if name.is_empty() || name == APEX {
        return zone.to_string();
    }
    if name.ends_with('.') {
        return name.to_string();
    }
    format!("{}.{}", name, zone)
}
