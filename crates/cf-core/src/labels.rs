//! Shared label-shape heuristics used by resolution, classification, and
//! the renderers.

/// Terminal-node labels are human-meaningful destinations: either the
/// bracket-delimited terminal convention (`[Disconnect]`), or any
/// non-empty text that is not a bare phone number and not a 36-character
/// opaque identifier.
#[must_use]
pub fn is_terminal_label(label: &str) -> bool {
    if label.starts_with('[') && label.ends_with(']') && label.len() >= 2 {
        return true;
    }
    !label.is_empty() && !looks_like_phone_number(label) && !looks_like_opaque_id(label)
}

/// Bare dialable number: 10+ digits, optional `+1` country prefix.
#[must_use]
pub fn looks_like_phone_number(label: &str) -> bool {
    let digits = label.strip_prefix("+1").unwrap_or(label);
    digits.len() >= 10 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Platform identifier shape: exactly 36 characters of hex digits and
/// hyphens. Known limitation: a genuinely human-readable label that
/// happens to be 36 hex-ish characters is misclassified too (see tests).
#[must_use]
pub fn looks_like_opaque_id(label: &str) -> bool {
    label.len() == 36 && label.bytes().all(|b| b.is_ascii_hexdigit() || b == b'-')
}

/// First-name-like token followed by last-name-like token. Prefix match:
/// extra trailing tokens do not disqualify a label.
#[must_use]
pub fn is_person_name(label: &str) -> bool {
    let mut tokens = label.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => is_alphabetic(first) && is_alphabetic(second),
        _ => false,
    }
}

/// Menu vocabulary: "menu" or keypress prompts ("press", "Key Press").
#[must_use]
pub fn looks_like_menu(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    lower.contains("menu") || lower.contains("press")
}

/// Bare numeric keypress value ("1", "42"), as used on menu branch edges.
#[must_use]
pub fn is_keypress_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}
