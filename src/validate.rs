// ✉️ Form Validation - Pure helpers for a future contact form
// Nothing wires these up yet; they exist so the submission path has a
// checked seam when forms land.

/// Structural email check: one `@`, non-empty local part, dot-separated
/// domain with non-empty labels, no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot and no empty labels
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@sub.domain.org"));
        assert!(validate_email("u+tag@example.co"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("user@example..com"));
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email("user@exa mple.com"));
    }
}
