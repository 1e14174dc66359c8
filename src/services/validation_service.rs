use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::models::booking::{parse_form_date, BookingDraft};
use crate::models::room::RoomCatalog;
use crate::models::validation::{BookingField, ValidationResult};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Optional '+', a non-zero lead digit, then up to 15 more digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whitespace anywhere in the number is ignored; other separators are not.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

/// Checks a booking draft field by field.
///
/// Every field is checked on every call and the first failing rule for a
/// field supplies its message. Holds no state between calls.
pub struct FormValidator {
    catalog: Arc<RoomCatalog>,
}

impl FormValidator {
    pub fn new(catalog: Arc<RoomCatalog>) -> Self {
        Self { catalog }
    }

    pub fn validate(&self, draft: &BookingDraft) -> ValidationResult {
        let mut errors = BTreeMap::new();

        if draft.first_name.trim().is_empty() {
            errors.insert(BookingField::FirstName, "First name is required".to_string());
        }

        if draft.last_name.trim().is_empty() {
            errors.insert(BookingField::LastName, "Last name is required".to_string());
        }

        if let Some(message) = check_email(&draft.email) {
            errors.insert(BookingField::Email, message.to_string());
        }

        if let Some(message) = check_phone(&draft.phone) {
            errors.insert(BookingField::Phone, message.to_string());
        }

        let (check_in_error, check_out_error) = check_dates(&draft.check_in, &draft.check_out);
        if let Some(message) = check_in_error {
            errors.insert(BookingField::CheckIn, message.to_string());
        }
        if let Some(message) = check_out_error {
            errors.insert(BookingField::CheckOut, message.to_string());
        }

        if let Some(message) = self.check_room(draft.selected_room()) {
            errors.insert(BookingField::RoomCode, message.to_string());
        }

        ValidationResult::from_errors(errors)
    }

    fn check_room(&self, room_code: Option<&str>) -> Option<&'static str> {
        match room_code {
            None => Some("Please select a room type"),
            Some(code) if !self.catalog.contains(code) => Some("Please select a valid room type"),
            Some(_) => None,
        }
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<&'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        Some("Phone number is required")
    } else if !is_valid_phone(phone) {
        Some("Please enter a valid phone number")
    } else {
        None
    }
}

/// Messages for (check-in, check-out). Ordering is only judged when both parse.
fn check_dates(check_in: &str, check_out: &str) -> (Option<&'static str>, Option<&'static str>) {
    let start = parse_form_date(check_in);
    let end = parse_form_date(check_out);

    let check_in_error = if check_in.trim().is_empty() {
        Some("Check-in date is required")
    } else if start.is_none() {
        Some("Please enter a valid check-in date")
    } else {
        None
    };

    let check_out_error = if check_out.trim().is_empty() {
        Some("Check-out date is required")
    } else {
        match (start, end) {
            (_, None) => Some("Please enter a valid check-out date"),
            (Some(start), Some(end)) if end <= start => {
                Some("Check-out date must be after check-in date")
            }
            _ => None,
        }
    };

    (check_in_error, check_out_error)
}
