const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password policy: at least 8 characters, one uppercase letter and one
/// special character. Every failed rule is reported.
pub fn validate_password(password: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long.".to_string());
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push("Password must contain at least one capital letter.".to_string());
    }

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push("Password must contain at least one special character.".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_conforming_password() {
        assert!(validate_password("Str0ng!pass").is_ok());
    }

    #[test]
    fn rejects_a_short_password() {
        let errors = validate_password("Ab!").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("8 characters"));
    }

    #[test]
    fn rejects_missing_uppercase() {
        let errors = validate_password("weak!pass").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("capital letter"));
    }

    #[test]
    fn rejects_missing_special_character() {
        let errors = validate_password("Weakpass1").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("special character"));
    }

    #[test]
    fn collects_every_failed_rule() {
        let errors = validate_password("weak").unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
