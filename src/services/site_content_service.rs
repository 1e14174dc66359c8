use crate::models::room::RoomCatalog;
use crate::models::site::{
    DiningDetails, FollowUp, Notification, NotificationKind, RateCardEntry, RoomInquiry,
    SiteAction,
};
use crate::services::summary_service::format_amount;

const NOTIFICATION_DISMISS_MS: u64 = 3000;
const FOLLOW_UP_DELAY_MS: u64 = 1500;

pub const OFFER_BENEFITS: [&str; 4] = [
    "Exclusive rates and packages",
    "Priority booking",
    "Complimentary services",
    "Flexible cancellation",
];

pub struct SiteContentService;

impl SiteContentService {
    /// Nightly rates for every room, in catalog order
    pub fn rate_card(catalog: &RoomCatalog, currency_symbol: &str) -> Vec<RateCardEntry> {
        catalog
            .entries()
            .iter()
            .map(|room| RateCardEntry {
                code: room.code.clone(),
                display_name: room.display_name.clone(),
                price_per_night: room.price_per_night,
                price_display: format_amount(currency_symbol, room.price_per_night),
            })
            .collect()
    }

    pub fn room_inquiry(
        catalog: &RoomCatalog,
        code: &str,
        currency_symbol: &str,
        booking_form_path: &str,
    ) -> Option<RoomInquiry> {
        catalog.get(code).map(|room| RoomInquiry {
            title: "Book Your Stay".to_string(),
            tagline: "Experience luxury at Four Seasons Hotel Bengaluru".to_string(),
            room_name: room.display_name.clone(),
            rate_display: format!(
                "{} per night",
                format_amount(currency_symbol, room.price_per_night)
            ),
            booking_form_path: booking_form_path.to_string(),
        })
    }

    pub fn dining() -> DiningDetails {
        DiningDetails {
            restaurant: "Far & East Restaurant".to_string(),
            tagline: "Make a reservation at our award-winning Asian restaurant".to_string(),
            location: "21st Floor".to_string(),
            cuisine: "Asian Cuisine".to_string(),
            hours: "Open Daily".to_string(),
            phone: "+91 (080) 4522-2222".to_string(),
        }
    }

    /// What the page shows after a dialog button is pressed
    pub fn notification_for(action: SiteAction, booking_form_path: &str) -> Notification {
        let close = FollowUp::CloseDialog {
            after_ms: FOLLOW_UP_DELAY_MS,
        };

        let (kind, message, follow_up) = match action {
            SiteAction::ProceedToBooking => (
                NotificationKind::Success,
                "Redirecting to booking system...",
                FollowUp::Redirect {
                    after_ms: FOLLOW_UP_DELAY_MS,
                    location: booking_form_path.to_string(),
                },
            ),
            SiteAction::ApplyOffer => (
                NotificationKind::Success,
                "Offer applied successfully!",
                close,
            ),
            SiteAction::MakeReservation => {
                (NotificationKind::Success, "Reservation request sent!", close)
            }
            SiteAction::CheckAvailability => {
                (NotificationKind::Info, "Checking availability...", close)
            }
        };

        Notification {
            kind,
            message: message.to_string(),
            dismiss_after_ms: NOTIFICATION_DISMISS_MS,
            follow_up,
        }
    }
}
