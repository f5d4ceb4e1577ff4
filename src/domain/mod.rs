/// Copies every `Some` field of a patch onto the record it patches.
macro_rules! merge_patch {
    ($patch:expr => $target:ident; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

pub mod analytics;
pub mod appeal;
pub mod dates;
pub mod denial;
pub mod document;
pub mod filters;
pub mod format;
pub mod letter;
pub mod money;
pub mod stats;

pub use appeal::{Appeal, AppealPatch, AppealStatus, AppealType, NewAppeal};
pub use denial::{Denial, DenialPatch, DenialStatus, NewDenial, Priority};
pub use document::{Attachment, DocumentRecord, DocumentTarget};
pub use money::Cents;
pub use stats::DenialStats;

/// Optional dates travel as `"YYYY-MM-DD"`; the hosted backend writes an
/// empty string when none was picked.
pub(crate) mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
