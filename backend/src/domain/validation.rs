//! Per-record validation.
//!
//! Constraints are an explicit, ordered table of `(field, constraint)` pairs
//! evaluated front to back. A field that fails [`Constraint::Required`] skips
//! its remaining checks so each field reports at most one violation. Records
//! are judged independently: no uniqueness is enforced across a batch.

use std::fmt;

use super::CandidateRecord;
use super::formats::{is_email, is_phone_number, is_tax_identifier};

/// Record field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `name`
    Name,
    /// `pan`
    Pan,
    /// `mobile`
    Mobile,
    /// `email`
    Email,
}

impl Field {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Pan => "pan",
            Self::Mobile => "mobile",
            Self::Email => "email",
        }
    }

    fn value(self, record: &CandidateRecord) -> &str {
        match self {
            Self::Name => record.name.as_str(),
            Self::Pan => record.pan.as_str(),
            Self::Mobile => record.mobile.as_str(),
            Self::Email => record.email.as_str(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The value must be present and non-blank.
    Required,
    /// Five uppercase letters, four digits, one uppercase letter.
    TaxIdentifierFormat,
    /// Exactly ten decimal digits.
    PhoneNumberFormat,
    /// A syntactically valid email address.
    EmailFormat,
}

impl Constraint {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TaxIdentifierFormat => "invalid_pan",
            Self::PhoneNumberFormat => "invalid_mobile",
            Self::EmailFormat => "invalid_email",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Required => "is required",
            Self::TaxIdentifierFormat => {
                "must be 5 uppercase letters, 4 digits and 1 uppercase letter"
            }
            Self::PhoneNumberFormat => "must be exactly 10 digits",
            Self::EmailFormat => "must be a valid email address",
        }
    }

    fn is_satisfied_by(self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::TaxIdentifierFormat => is_tax_identifier(value),
            Self::PhoneNumberFormat => is_phone_number(value),
            Self::EmailFormat => is_email(value),
        }
    }
}

/// Validation rules in evaluation order.
pub const RULES: &[(Field, Constraint)] = &[
    (Field::Name, Constraint::Required),
    (Field::Pan, Constraint::Required),
    (Field::Pan, Constraint::TaxIdentifierFormat),
    (Field::Mobile, Constraint::Required),
    (Field::Mobile, Constraint::PhoneNumberFormat),
    (Field::Email, Constraint::Required),
    (Field::Email, Constraint::EmailFormat),
];

/// A single failed `(field, constraint)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Offending field.
    pub field: Field,
    /// Constraint the field failed.
    pub constraint: Constraint,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint.describe())
    }
}

/// Non-empty set of violations explaining why a record was refused.
///
/// `Display` renders the reason text: violation messages joined by `"; "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    violations: Vec<Violation>,
}

impl Rejection {
    /// Violations in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether `field` contributed to the rejection.
    pub fn mentions(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Human-readable reason.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

/// A record that passed every rule.
///
/// Only [`validate`] can produce one, so stores accepting `ValidRecord`
/// cannot be handed unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord(CandidateRecord);

impl ValidRecord {
    /// Borrow the validated fields.
    pub fn record(&self) -> &CandidateRecord {
        &self.0
    }

    /// Unwrap into the validated fields.
    pub fn into_record(self) -> CandidateRecord {
        self.0
    }
}

/// A record refused by [`validate`], kept intact for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// The record exactly as submitted.
    pub record: CandidateRecord,
    /// Why it was refused.
    pub rejection: Rejection,
}

/// Judge one record against [`RULES`].
///
/// # Examples
/// ```
/// use user_ingest::domain::CandidateRecord;
/// use user_ingest::domain::validation::{validate, Field};
///
/// let bad = CandidateRecord::new("Aabhash", "12345ABCDE", "9876543210", "aabhash@example.com");
/// let rejected = validate(bad).unwrap_err();
/// assert!(rejected.rejection.mentions(Field::Pan));
/// ```
pub fn validate(record: CandidateRecord) -> Result<ValidRecord, RejectedRecord> {
    let mut violations: Vec<Violation> = Vec::new();
    for &(field, constraint) in RULES {
        if violations.iter().any(|v| v.field == field) {
            continue;
        }
        if !constraint.is_satisfied_by(field.value(&record)) {
            violations.push(Violation { field, constraint });
        }
    }

    if violations.is_empty() {
        Ok(ValidRecord(record))
    } else {
        Err(RejectedRecord {
            record,
            rejection: Rejection { violations },
        })
    }
}
