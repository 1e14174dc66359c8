use chrono::NaiveDate;
use serde::Serialize;

pub const NOT_SELECTED: &str = "Not selected";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSummary {
    pub nights: u32,
    pub total_price: u64,
    pub room_display_name: String,
    pub check_in_display: String,
    pub check_out_display: String,
    pub duration_label: String,
    pub total_display: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    pub check_in_min: NaiveDate,
    pub check_out_min: NaiveDate,
}
