//! Lexical format checks for individual record fields.
//!
//! Each check is a pure predicate over one string. Patterns are compiled once
//! per process. Values are never trimmed: surrounding whitespace fails.

use std::sync::OnceLock;

use regex::Regex;

/// Tax identifier (PAN) pattern: five uppercase letters, four digits, one
/// uppercase letter.
pub const TAX_IDENTIFIER_PATTERN: &str = "^[A-Z]{5}[0-9]{4}[A-Z]$";
/// Phone number pattern: exactly ten ASCII digits.
pub const PHONE_NUMBER_PATTERN: &str = "^[0-9]{10}$";

const EMAIL_LOCAL_PATTERN: &str =
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$";
const EMAIL_DOMAIN_PATTERN: &str =
    r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Longest accepted address, per the SMTP path limit.
pub const EMAIL_MAX_LEN: usize = 254;
/// Longest accepted local part.
pub const EMAIL_LOCAL_MAX_LEN: usize = 64;

static TAX_IDENTIFIER_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_LOCAL_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("pattern {pattern} failed to compile: {error}"))
    })
}

/// Returns `true` when `value` is a well-formed tax identifier.
///
/// # Examples
/// ```
/// use user_ingest::domain::formats::is_tax_identifier;
///
/// assert!(is_tax_identifier("ABCDE1234F"));
/// assert!(!is_tax_identifier("12345ABCDE"));
/// ```
pub fn is_tax_identifier(value: &str) -> bool {
    compiled(&TAX_IDENTIFIER_RE, TAX_IDENTIFIER_PATTERN).is_match(value)
}

/// Returns `true` when `value` is exactly ten decimal digits.
pub fn is_phone_number(value: &str) -> bool {
    compiled(&PHONE_NUMBER_RE, PHONE_NUMBER_PATTERN).is_match(value)
}

/// Returns `true` when `value` is a syntactically valid email address.
///
/// Accepts `local@domain` where the local part is one or more dot-separated
/// runs of RFC 5322 `atext` characters and the domain has at least two
/// dot-separated LDH labels. Quoted local parts, address literals and
/// internationalised forms are rejected.
///
/// # Examples
/// ```
/// use user_ingest::domain::formats::is_email;
///
/// assert!(is_email("aabhash@example.com"));
/// assert!(!is_email("aabhash.example.com"));
/// ```
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    local.len() <= EMAIL_LOCAL_MAX_LEN
        && compiled(&EMAIL_LOCAL_RE, EMAIL_LOCAL_PATTERN).is_match(local)
        && compiled(&EMAIL_DOMAIN_RE, EMAIL_DOMAIN_PATTERN).is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ABCDE1234F", true)]
    #[case("ZZZZZ0000Z", true)]
    #[case("12345ABCDE", false)]
    #[case("abcde1234f", false)]
    #[case("ABCDE1234", false)]
    #[case("ABCDE12345", false)]
    #[case("ABCDE1234FG", false)]
    #[case(" ABCDE1234F", false)]
    #[case("ABCDE1234F\n", false)]
    #[case("", false)]
    fn tax_identifier_format(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_tax_identifier(value), expected);
    }

    #[rstest]
    #[case("9876543210", true)]
    #[case("0000000000", true)]
    #[case("987654321", false)]
    #[case("98765432101", false)]
    #[case("+919876543210", false)]
    #[case("98765 43210", false)]
    #[case("٩٨٧٦٥٤٣٢١٠", false)]
    #[case("", false)]
    fn phone_number_format(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_phone_number(value), expected);
    }

    #[rstest]
    #[case("aabhash@example.com", true)]
    #[case("first.last+tag@sub.example.co.in", true)]
    #[case("o'brien@example.org", true)]
    #[case("a@b.io", true)]
    #[case("aabhash.example.com", false)]
    #[case("@example.com", false)]
    #[case("aabhash@", false)]
    #[case("aabhash@localhost", false)]
    #[case("a@@example.com", false)]
    #[case("a@b@example.com", false)]
    #[case(".a@example.com", false)]
    #[case("a.@example.com", false)]
    #[case("a..b@example.com", false)]
    #[case("a@-example.com", false)]
    #[case("a@example-.com", false)]
    #[case("a@example..com", false)]
    #[case("a b@example.com", false)]
    #[case(" a@example.com", false)]
    #[case("", false)]
    fn email_format(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_email(value), expected);
    }

    #[rstest]
    fn email_length_limits_are_enforced() {
        let long_local = format!("{}@example.com", "a".repeat(EMAIL_LOCAL_MAX_LEN + 1));
        assert!(!is_email(&long_local));

        let label = "a".repeat(60);
        let long_domain = format!("x@{label}.{label}.{label}.{label}.{label}.com");
        assert!(long_domain.len() > EMAIL_MAX_LEN);
        assert!(!is_email(&long_domain));
    }
}
