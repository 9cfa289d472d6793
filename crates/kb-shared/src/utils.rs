//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        // Caller-supplied input: the local part can be empty.
        let keep = local.len().min(2);
        format!("{}***{}", &local[..keep], domain)
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("admin@example.com"), "ad***@example.com");
        assert_eq!(mask_email("a@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_mask_email_empty_local_part() {
        assert_eq!(mask_email("@example.com"), "***@example.com");
    }
}
