//! Invoice number assignment.
//!
//! Numbers look like `INV-20250314-042`: a fixed prefix, the UTC issue date
//! and a three-digit suffix. The suffix policy is pluggable so embedders can
//! swap the historical random scheme for a collision-free counter.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Suffix policy seam. The store holds one of these and calls [`generate`]
/// when it creates an invoice.
///
/// [`generate`]: InvoiceNumberGenerator::generate
pub trait InvoiceNumberGenerator: Send + Sync {
    /// Number for an invoice issued on `date`.
    fn generate_for_date(&self, date: NaiveDate) -> String;

    /// Number for an invoice issued today (UTC).
    fn generate(&self) -> String {
        self.generate_for_date(Utc::now().date_naive())
    }
}

/// The historical scheme: three random digits after the date.
///
/// Two invoices created the same day can collide (the suffix space is only
/// 000-999 and nothing checks for reuse). Callers that need guaranteed
/// uniqueness wire in [`DailySequenceGenerator`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatedRandomGenerator;

impl InvoiceNumberGenerator for DatedRandomGenerator {
    fn generate_for_date(&self, date: NaiveDate) -> String {
        let suffix: u32 = rand::rng().random_range(0..1000);
        format!("INV-{}-{:03}", date.format("%Y%m%d"), suffix)
    }
}

/// Collision-free alternative: per-day counters.
///
/// Every issue date keeps its own count starting at 001, so interleaving
/// dates (a backdated invoice between two current ones, say) never reissues
/// a number. Past 999 the suffix widens to four digits instead of wrapping.
#[derive(Debug, Default)]
pub struct DailySequenceGenerator {
    counters: Mutex<BTreeMap<NaiveDate, u32>>,
}

impl DailySequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceNumberGenerator for DailySequenceGenerator {
    fn generate_for_date(&self, date: NaiveDate) -> String {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let suffix = counters.entry(date).or_insert(0);
        *suffix += 1;
        format!("INV-{}-{:03}", date.format("%Y%m%d"), *suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn assert_well_formed(number: &str, date_segment: &str) {
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3, "number {number} should have three segments");
        assert_eq!(parts[0], "INV");
        assert_eq!(parts[1], date_segment);
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn random_generator_produces_well_formed_numbers() {
        let generator = DatedRandomGenerator;
        for _ in 0..10 {
            let number = generator.generate_for_date(test_date());
            assert_well_formed(&number, "20250314");
        }
    }

    #[test]
    fn random_generator_uses_current_utc_date_by_default() {
        let number = DatedRandomGenerator.generate();
        let today = Utc::now().date_naive().format("%Y%m%d").to_string();
        assert_well_formed(&number, &today);
    }

    #[test]
    fn sequence_generator_counts_up_within_a_day() {
        let generator = DailySequenceGenerator::new();
        assert_eq!(
            generator.generate_for_date(test_date()),
            "INV-20250314-001"
        );
        assert_eq!(
            generator.generate_for_date(test_date()),
            "INV-20250314-002"
        );
    }

    #[test]
    fn each_day_starts_its_own_count() {
        let generator = DailySequenceGenerator::new();
        generator.generate_for_date(test_date());
        generator.generate_for_date(test_date());

        let next_day = test_date().succ_opt().unwrap();
        assert_eq!(
            generator.generate_for_date(next_day),
            "INV-20250315-001"
        );
    }

    #[test]
    fn revisiting_an_earlier_day_continues_its_count() {
        let generator = DailySequenceGenerator::new();
        let first = generator.generate_for_date(test_date());

        let next_day = test_date().succ_opt().unwrap();
        generator.generate_for_date(next_day);

        let revisited = generator.generate_for_date(test_date());
        assert_eq!(first, "INV-20250314-001");
        assert_eq!(revisited, "INV-20250314-002");
    }

    #[test]
    fn suffix_widens_past_three_digits() {
        let generator = DailySequenceGenerator::new();
        for _ in 0..999 {
            generator.generate_for_date(test_date());
        }
        assert_eq!(
            generator.generate_for_date(test_date()),
            "INV-20250314-1000"
        );
    }

    #[test]
    fn same_day_sequence_numbers_never_repeat() {
        let generator = DailySequenceGenerator::new();
        let numbers: std::collections::HashSet<String> = (0..50)
            .map(|_| generator.generate_for_date(test_date()))
            .collect();
        assert_eq!(numbers.len(), 50);
    }
}
