use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    RoomCode,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::CheckIn => "checkIn",
            BookingField::CheckOut => "checkOut",
            BookingField::RoomCode => "roomCode",
        }
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub field_errors: BTreeMap<BookingField, String>,
}

impl ValidationResult {
    pub fn from_errors(field_errors: BTreeMap<BookingField, String>) -> Self {
        Self {
            valid: field_errors.is_empty(),
            field_errors,
        }
    }

    pub fn error_for(&self, field: BookingField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}
