use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateCardEntry {
    pub code: String,
    pub display_name: String,
    pub price_per_night: u64,
    pub price_display: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomInquiry {
    pub title: String,
    pub tagline: String,
    pub room_name: String,
    pub rate_display: String,
    pub booking_form_path: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiningDetails {
    pub restaurant: String,
    pub tagline: String,
    pub location: String,
    pub cuisine: String,
    pub hours: String,
    pub phone: String,
}

/// Buttons on the marketing site's dialogs.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SiteAction {
    ProceedToBooking,
    ApplyOffer,
    MakeReservation,
    CheckAvailability,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FollowUp {
    CloseDialog { after_ms: u64 },
    Redirect { after_ms: u64, location: String },
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub dismiss_after_ms: u64,
    pub follow_up: FollowUp,
}

impl SiteAction {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "proceed-to-booking" => Some(SiteAction::ProceedToBooking),
            "apply-offer" => Some(SiteAction::ApplyOffer),
            "make-reservation" => Some(SiteAction::MakeReservation),
            "check-availability" => Some(SiteAction::CheckAvailability),
            _ => None,
        }
    }
}
