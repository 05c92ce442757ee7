//! Unvalidated input records.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

const FIELDS: &[&str] = &["name", "pan", "mobile", "email"];

/// One unvalidated item of a submitted batch.
///
/// Only JSON objects are accepted; an array item is malformed input even
/// when its length matches the field count. Absent and `null` fields
/// deserialise to empty strings so they surface as per-record `required`
/// violations rather than failing the whole batch. Unknown keys, including a
/// caller-supplied `id`, are ignored.
///
/// # Examples
/// ```
/// use user_ingest::domain::CandidateRecord;
///
/// let record: CandidateRecord =
///     serde_json::from_str(r#"{"id": 7, "name": "Aabhash", "pan": null}"#).expect("valid JSON");
/// assert_eq!(record.name, "Aabhash");
/// assert!(record.pan.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    /// Person's name.
    pub name: String,
    /// Tax identifier (PAN).
    pub pan: String,
    /// Ten-digit mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
}

impl CandidateRecord {
    /// Build a record from its four fields.
    pub fn new(
        name: impl Into<String>,
        pan: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pan: pan.into(),
            mobile: mobile.into(),
            email: email.into(),
        }
    }
}

impl<'de> Deserialize<'de> for CandidateRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = CandidateRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut slots: [Option<Option<String>>; 4] = Default::default();
        while let Some(key) = map.next_key::<String>()? {
            match FIELDS.iter().position(|field| *field == key) {
                Some(index) => {
                    let slot = slots
                        .get_mut(index)
                        .ok_or_else(|| <A::Error as de::Error>::unknown_field(&key, FIELDS))?;
                    if slot.is_some() {
                        return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
                    }
                    *slot = Some(map.next_value::<Option<String>>()?);
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let [name, pan, mobile, email] = slots.map(|slot| slot.flatten().unwrap_or_default());
        Ok(CandidateRecord {
            name,
            pan,
            mobile,
            email,
        })
    }
}
