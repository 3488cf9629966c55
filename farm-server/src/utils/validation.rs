//! Request validation and sanitization helpers
//!
//! Field-level checks shared by the order and newsletter handlers.
//! Pricing is only ever invoked on input that passed these checks;
//! the engine itself stays lenient (unknown SKUs degrade, quantities
//! clamp).

use validator::ValidateEmail;

/// Maximum stored note length after sanitization
pub const MAX_NOTE_LEN: usize = 500;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 80;

/// Collapse runs of whitespace and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Backend email check: normalized length bound plus syntax
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && email.validate_email()
}

/// Strip everything but digits, preserving one leading '+'
pub fn normalize_phone(input: &str) -> String {
    let trimmed = input.trim();
    let has_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        String::new()
    } else if has_plus {
        format!("+{}", digits)
    } else {
        digits
    }
}

/// Local 7-15 digits with optional leading '+'
pub fn is_valid_phone(phone: &str) -> bool {
    let norm = normalize_phone(phone);
    let digits = norm.strip_prefix('+').unwrap_or(&norm);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Accept common formats: US ZIP / ZIP+4, Canadian, generic alphanumeric
pub fn is_valid_postal_code(code: &str) -> bool {
    let s = code.trim();
    is_us_zip(s) || is_ca_postal(s) || is_generic_postal(s)
}

fn is_us_zip(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

fn is_ca_postal(s: &str) -> bool {
    // A1A 1A1, with optional space or hyphen separator
    let compact: Vec<char> = s.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if compact.len() != 6 {
        return false;
    }
    compact
        .iter()
        .enumerate()
        .all(|(i, c)| if i % 2 == 0 { c.is_ascii_alphabetic() } else { c.is_ascii_digit() })
}

fn is_generic_postal(s: &str) -> bool {
    (3..=12).contains(&s.len())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

/// Strip control characters, collapse whitespace, bound the length
pub fn sanitize_note(note: &str, max_len: usize) -> String {
    let stripped: String = note.chars().filter(|c| !c.is_control()).collect();
    let collapsed = collapse_whitespace(&stripped);
    collapsed.chars().take(max_len).collect()
}

/// Validate a customer name; returns the normalized form
pub fn validate_name(raw: &str, field: &str, errors: &mut Vec<String>) -> String {
    let name = collapse_whitespace(raw);
    if name.is_empty() {
        errors.push(format!("{} is required", field));
    } else if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
        errors.push(format!(
            "{} must be between {} and {} characters",
            field, MIN_NAME_LEN, MAX_NAME_LEN
        ));
    }
    name
}

/// Validate and normalize an email (lowercased)
pub fn validate_email(raw: &str, errors: &mut Vec<String>) -> String {
    let email = collapse_whitespace(raw).to_lowercase();
    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(&email) {
        errors.push("A valid email is required".to_string());
    }
    email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("grower@farm.example"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@local.part"));
        let long = format!("{}@x.example", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn phone_normalization() {
        assert_eq!(normalize_phone("+1 (555) 010-2030"), "+15550102030");
        assert_eq!(normalize_phone("555.010.2030"), "5550102030");
        assert_eq!(normalize_phone("  "), "");
    }

    #[test]
    fn phone_validation_bounds() {
        assert!(is_valid_phone("+1 555 010 2030"));
        assert!(is_valid_phone("5550102"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn postal_codes() {
        assert!(is_valid_postal_code("12345"));
        assert!(is_valid_postal_code("12345-6789"));
        assert!(is_valid_postal_code("K1A 0B1"));
        assert!(is_valid_postal_code("EC1A1BB"));
        assert!(!is_valid_postal_code("!!"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn note_sanitization() {
        assert_eq!(sanitize_note("hello\u{0007} \n  world", 500), "hello world");
        let long = "x".repeat(600);
        assert_eq!(sanitize_note(&long, MAX_NOTE_LEN).len(), MAX_NOTE_LEN);
    }

    #[test]
    fn name_and_email_collectors() {
        let mut errors = Vec::new();
        let name = validate_name("  Rosa   Diaz ", "name", &mut errors);
        assert_eq!(name, "Rosa Diaz");
        let email = validate_email(" Rosa@Farm.Example ", &mut errors);
        assert_eq!(email, "rosa@farm.example");
        assert!(errors.is_empty());

        validate_name("x", "name", &mut errors);
        validate_email("nope", &mut errors);
        assert_eq!(errors.len(), 2);
    }
}
