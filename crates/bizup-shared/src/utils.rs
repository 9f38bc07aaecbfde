//! Utility functions

/// First `max_chars` characters of `text`, for log previews of uploaded content.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn mask_secret(secret: &str) -> String {
    if secret.len() <= 2 {
        "***".to_string()
    } else {
        format!("{}***", &secret[..secret.char_indices().nth(2).map(|(i, _)| i).unwrap_or(0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("우유-200", 2), "우유");
        assert_eq!(preview("Latte", 10), "Latte");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("bizup1234"), "bi***");
        assert_eq!(mask_secret("ab"), "***");
    }
}
