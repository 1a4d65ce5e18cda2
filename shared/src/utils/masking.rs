//! Masking helpers for log output

/// Mask a contact address for logs, keeping a short prefix and suffix.
///
/// Email addresses keep two characters of the local part and the full
/// domain (`us***@example.com`); phone numbers keep three characters on
/// each end (`+15*****123`); anything shorter is fully masked.
pub fn mask_recipient(recipient: &str) -> String {
    if let Some(at) = recipient.find('@') {
        let (local, domain) = recipient.split_at(at);
        let prefix: String = local.chars().take(2).collect();
        if local.chars().count() <= 2 {
            format!("***{}", domain)
        } else {
            format!("{}***{}", prefix, domain)
        }
    } else {
        let chars: Vec<char> = recipient.chars().collect();
        if chars.len() <= 6 {
            "*".repeat(chars.len())
        } else {
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{}{}{}", prefix, "*".repeat(chars.len() - 6), suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_recipient("+15555550123"), "+15******123");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_recipient("user@example.com"), "us***@example.com");
        assert_eq!(mask_recipient("ab@example.com"), "***@example.com");
    }

    #[test]
    fn test_mask_short_values() {
        assert_eq!(mask_recipient("+1555"), "*****");
        assert_eq!(mask_recipient(""), "");
    }
}
