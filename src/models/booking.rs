use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::summary::DerivedSummary;

/// Raw booking form values, exactly as the page submits them.
///
/// Dates are `YYYY-MM-DD` strings and empty when unset. Nothing here is
/// trusted until it has been through the validator.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub check_in: String,
    pub check_out: String,
    pub room_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "lenient_count")]
    pub adults: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub children: Option<u32>,
    pub special_requests: Option<String>,
}

/// Party sizes come from select inputs, so accept `2` or `"2"`. Anything
/// that is not a non-negative count reads as unset.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(count)
}

impl BookingDraft {
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.check_in)
    }

    pub fn check_out_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.check_out)
    }

    /// Selected room code, treating a blank selection as none.
    pub fn selected_room(&self) -> Option<&str> {
        self.room_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Parse a date input value. Blank or malformed values yield `None`.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Draft and summary frozen at the moment of submission.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    pub draft: BookingDraft,
    pub summary: DerivedSummary,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub confirmation_code: String,
    pub guest_name: String,
    pub room_name: String,
    pub check_in_display: String,
    pub check_out_display: String,
    pub nights: u32,
    pub duration_label: String,
    pub total_price: u64,
    pub total_display: String,
    pub email: String,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub special_requests: Option<String>,
    pub notice: String,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub session_id: String,
    pub draft: BookingDraft,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Processing,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub session_id: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<BookingConfirmation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date("2025-01-15"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
        assert_eq!(
            parse_form_date(" 2025-01-15 "),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
        assert_eq!(parse_form_date(""), None);
        assert_eq!(parse_form_date("15/01/2025"), None);
        assert_eq!(parse_form_date("2025-02-30"), None);
    }

    #[test]
    fn test_blank_room_selection_is_none() {
        let mut draft = BookingDraft::default();
        assert_eq!(draft.selected_room(), None);

        draft.room_code = Some("   ".to_string());
        assert_eq!(draft.selected_room(), None);

        draft.room_code = Some("club".to_string());
        assert_eq!(draft.selected_room(), Some("club"));
    }

    #[test]
    fn test_draft_deserializes_from_partial_form() {
        let draft: BookingDraft = serde_json::from_str(
            r#"{"checkIn":"2025-01-15","roomCode":"deluxe","firstName":"Asha"}"#,
        )
        .unwrap();

        assert_eq!(draft.check_in, "2025-01-15");
        assert_eq!(draft.check_out, "");
        assert_eq!(draft.selected_room(), Some("deluxe"));
        assert_eq!(draft.first_name, "Asha");
        assert_eq!(draft.adults, None);
    }

    #[test]
    fn test_party_counts_accept_numeric_strings() {
        let draft: BookingDraft =
            serde_json::from_str(r#"{"adults":"2","children":1}"#).unwrap();
        assert_eq!(draft.adults, Some(2));
        assert_eq!(draft.children, Some(1));

        let draft: BookingDraft =
            serde_json::from_str(r#"{"adults":"two","children":-1}"#).unwrap();
        assert_eq!(draft.adults, None);
        assert_eq!(draft.children, None);

        let draft: BookingDraft =
            serde_json::from_str(r#"{"adults":null,"children":""}"#).unwrap();
        assert_eq!(draft.adults, None);
        assert_eq!(draft.children, None);
    }
}
