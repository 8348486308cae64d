/// UTF-8 safe string truncation by character count.
/// If the string exceeds `max_chars`, truncates and appends "...".
/// When `max_chars` is 3 or less, returns exactly `max_chars` characters
/// without ellipsis (no room for the "..." suffix).
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let end = s
            .char_indices()
            .nth(max_chars.saturating_sub(3))
            .map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}

/// Whether `url` is something we are willing to hand to the desktop opener.
pub fn is_openable(url: &str) -> bool {
    ["https://", "http://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Open `url` with the desktop's handler on a worker thread.
pub fn open_url(url: String) {
    if !is_openable(&url) {
        tracing::warn!("refusing to open {url:?}");
        return;
    }
    std::thread::spawn(move || {
        match std::process::Command::new("xdg-open").arg(&url).status() {
            Ok(s) if s.success() => tracing::debug!("opened {url}"),
            Ok(s) => tracing::warn!("xdg-open exited: {s}"),
            Err(e) => tracing::warn!("xdg-open failed: {e}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // truncate_str
    // -----------------------------------------------------------------------

    #[test]
    fn truncate_str_short_string_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_str_at_exact_limit() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn truncate_str_long_string_truncated() {
        let result = truncate_str("Comprehensive performance overview of sales", 20);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 20);
    }

    #[test]
    fn truncate_str_multibyte_utf8_no_panic() {
        let result = truncate_str("تحليل البيانات والرؤى", 8);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn truncate_str_max_chars_three() {
        assert_eq!(truncate_str("hello", 3), "hel");
    }

    #[test]
    fn truncate_str_max_chars_zero() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    // -----------------------------------------------------------------------
    // is_openable
    // -----------------------------------------------------------------------

    #[test]
    fn web_and_contact_schemes_are_openable() {
        assert!(is_openable("https://github.com/moaz-shaker"));
        assert!(is_openable("http://github.com/moaz-shaker/HR-Attrition-Analytics"));
        assert!(is_openable("mailto:me@example.com"));
        assert!(is_openable("tel:+200000000"));
    }

    #[test]
    fn local_paths_are_not_openable() {
        assert!(!is_openable("/etc/passwd"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable(""));
    }
}
