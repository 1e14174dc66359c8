use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::booking::BookingDraft;
use crate::models::room::RoomCatalog;
use crate::models::summary::{DateBounds, DerivedSummary, NOT_SELECTED};

/// Whole calendar days between two dates, regardless of order
pub fn nights_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let days = (b - a).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Long form used on the summary card, e.g. "Wed, Jan 15, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Amount with thousands separators behind a currency prefix, e.g. "₹75,000"
pub fn format_amount(symbol: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", symbol, grouped)
}

pub fn duration_label(nights: u32) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{} nights", nights)
    }
}

pub struct SummaryCalculator {
    catalog: Arc<RoomCatalog>,
    currency_symbol: String,
}

impl SummaryCalculator {
    pub fn new(catalog: Arc<RoomCatalog>, currency_symbol: &str) -> Self {
        Self {
            catalog,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Nightly rate times nights; unknown rooms cost nothing
    pub fn total_price(&self, nights: u32, room_code: &str) -> u64 {
        self.catalog
            .get(room_code)
            .map(|room| u64::from(nights).saturating_mul(room.price_per_night))
            .unwrap_or(0)
    }

    pub fn format_amount(&self, amount: u64) -> String {
        format_amount(&self.currency_symbol, amount)
    }

    /// Derive the summary card from whatever the guest has picked so far.
    ///
    /// Nights and total are only filled in once both dates and a known room
    /// are present. A reversed range still yields its absolute length;
    /// rejecting it is the validator's job.
    pub fn summarize(
        &self,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        room_code: Option<&str>,
    ) -> DerivedSummary {
        let room = room_code.and_then(|code| self.catalog.get(code));

        let (nights, total_price) = match (check_in, check_out, room) {
            (Some(start), Some(end), Some(room)) => {
                let nights = nights_between(start, end);
                (nights, self.total_price(nights, &room.code))
            }
            _ => (0, 0),
        };

        DerivedSummary {
            nights,
            total_price,
            room_display_name: room
                .map(|room| room.display_name.clone())
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            check_in_display: display_or_not_selected(check_in),
            check_out_display: display_or_not_selected(check_out),
            duration_label: duration_label(nights),
            total_display: self.format_amount(total_price),
        }
    }

    pub fn summarize_draft(&self, draft: &BookingDraft) -> DerivedSummary {
        self.summarize(
            draft.check_in_date(),
            draft.check_out_date(),
            draft.selected_room(),
        )
    }
}

/// Earliest selectable dates: check-in from today, check-out from check-in
pub fn date_bounds(today: NaiveDate, check_in: Option<NaiveDate>) -> DateBounds {
    DateBounds {
        check_in_min: today,
        check_out_min: check_in.unwrap_or(today),
    }
}

fn display_or_not_selected(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| NOT_SELECTED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> SummaryCalculator {
        SummaryCalculator::new(Arc::new(RoomCatalog::standard()), "₹")
    }

    #[test]
    fn test_nights_is_symmetric() {
        let a = date(2025, 1, 15);
        let b = date(2025, 2, 3);

        assert_eq!(nights_between(a, b), 19);
        assert_eq!(nights_between(a, b), nights_between(b, a));
        assert_eq!(nights_between(a, a), 0);
    }

    #[test]
    fn test_nights_across_year_and_leap_day() {
        assert_eq!(nights_between(date(2024, 12, 30), date(2025, 1, 2)), 3);
        assert_eq!(nights_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_total_price() {
        let calc = calculator();

        assert_eq!(calc.total_price(3, "deluxe"), 75_000);
        assert_eq!(calc.total_price(2, "presidential"), 500_000);
        assert_eq!(calc.total_price(0, "club"), 0);
        assert_eq!(calc.total_price(4, "penthouse"), 0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("₹", 0), "₹0");
        assert_eq!(format_amount("₹", 999), "₹999");
        assert_eq!(format_amount("₹", 25_000), "₹25,000");
        assert_eq!(format_amount("₹", 500_000), "₹500,000");
        assert_eq!(format_amount("Rs. ", 1_234_567), "Rs. 1,234,567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 1, 15)), "Wed, Jan 15, 2025");
        assert_eq!(format_date(date(2025, 1, 5)), "Sun, Jan 5, 2025");
    }

    #[test]
    fn test_three_night_deluxe_stay() {
        let summary = calculator().summarize(
            Some(date(2025, 1, 15)),
            Some(date(2025, 1, 18)),
            Some("deluxe"),
        );

        assert_eq!(summary.nights, 3);
        assert_eq!(summary.total_price, 75_000);
        assert_eq!(summary.total_display, "₹75,000");
        assert_eq!(summary.duration_label, "3 nights");
        assert_eq!(summary.room_display_name, "Deluxe Room");
        assert_eq!(summary.check_in_display, "Wed, Jan 15, 2025");
        assert_eq!(summary.check_out_display, "Sat, Jan 18, 2025");
    }

    #[test]
    fn test_same_day_stay_is_zero() {
        let summary = calculator().summarize(
            Some(date(2025, 1, 15)),
            Some(date(2025, 1, 15)),
            Some("deluxe"),
        );

        assert_eq!(summary.nights, 0);
        assert_eq!(summary.total_price, 0);
        assert_eq!(summary.total_display, "₹0");
    }

    #[test]
    fn test_reversed_dates_use_magnitude() {
        let summary = calculator().summarize(
            Some(date(2025, 1, 18)),
            Some(date(2025, 1, 15)),
            Some("garden"),
        );

        assert_eq!(summary.nights, 3);
        assert_eq!(summary.total_price, 255_000);
    }

    #[test]
    fn test_missing_room_zeroes_totals() {
        let summary =
            calculator().summarize(Some(date(2025, 1, 15)), Some(date(2025, 1, 18)), None);

        assert_eq!(summary.nights, 0);
        assert_eq!(summary.total_price, 0);
        assert_eq!(summary.room_display_name, "Not selected");
        assert_eq!(summary.duration_label, "0 nights");
        assert_eq!(summary.check_in_display, "Wed, Jan 15, 2025");
    }

    #[test]
    fn test_unknown_room_is_not_selected() {
        let summary = calculator().summarize(
            Some(date(2025, 1, 15)),
            Some(date(2025, 1, 18)),
            Some("penthouse"),
        );

        assert_eq!(summary.room_display_name, "Not selected");
        assert_eq!(summary.total_price, 0);
    }

    #[test]
    fn test_draft_with_malformed_date_degrades() {
        let draft = BookingDraft {
            check_in: "soon".to_string(),
            check_out: "2025-01-18".to_string(),
            room_code: Some("club".to_string()),
            ..Default::default()
        };

        let summary = calculator().summarize_draft(&draft);
        assert_eq!(summary.check_in_display, "Not selected");
        assert_eq!(summary.check_out_display, "Sat, Jan 18, 2025");
        assert_eq!(summary.room_display_name, "Club Room");
        assert_eq!(summary.nights, 0);
        assert_eq!(summary.total_price, 0);
    }

    #[test]
    fn test_single_night_label() {
        let summary = calculator().summarize(
            Some(date(2025, 3, 1)),
            Some(date(2025, 3, 2)),
            Some("premier"),
        );

        assert_eq!(summary.duration_label, "1 night");
        assert_eq!(summary.total_display, "₹32,000");
    }

    #[test]
    fn test_date_bounds() {
        let today = date(2026, 10, 19);

        let bounds = date_bounds(today, None);
        assert_eq!(bounds.check_in_min, today);
        assert_eq!(bounds.check_out_min, today);

        let bounds = date_bounds(today, Some(date(2026, 11, 2)));
        assert_eq!(bounds.check_out_min, date(2026, 11, 2));
    }
}
