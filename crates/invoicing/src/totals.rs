//! Pure derivation of item subtotals and invoice totals.
//!
//! Nothing here rounds or touches stored state. Amounts are IEEE-754
//! doubles; presentation layers round for display, the domain does not.

use crate::invoice::{InvoiceItem, OtherCharge};

/// Fixed tax rate applied to every invoice subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Derived totals for one invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Line-item subtotal: the base amount plus every ad-hoc charge.
pub fn item_subtotal(amount: f64, charges: &[OtherCharge]) -> f64 {
    amount + charges.iter().map(|c| c.amount).sum::<f64>()
}

/// Invoice totals over `items`.
///
/// Subtotals are re-derived from each item's amount and charges, so a stale
/// `subtotal` field on an input item cannot skew the result. An empty slice
/// yields all zeros.
pub fn invoice_totals(items: &[InvoiceItem]) -> InvoiceTotals {
    let subtotal: f64 = items
        .iter()
        .map(|item| item_subtotal(item.amount, &item.other_charges))
        .sum();
    let tax = subtotal * TAX_RATE;
    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
