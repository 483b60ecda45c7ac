//! HTML escaping for externally supplied text.
//!
//! Every string that reaches a rendered fragment — question text, keyword
//! text, the echoed query, error messages — passes through here first.

/// Escape the five HTML-significant characters. `&` must be replaced first.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
