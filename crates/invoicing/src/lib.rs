//! The invoice document model and its derivation rules: entity shapes, the
//! subtotal/tax/total computation, the status lifecycle and invoice-number
//! assignment.
//!
//! Apart from the clock and randomness behind invoice numbers, everything
//! here is deterministic and storage-free; the store crate owns persistence
//! of these documents.

pub mod invoice;
pub mod number;
pub mod totals;

pub use invoice::{
    Invoice, InvoiceId, InvoiceItem, InvoiceStatus, NewInvoice, OtherCharge, PickupDeliveryPoint,
    PointKind, default_due_date,
};
pub use number::{DailySequenceGenerator, DatedRandomGenerator, InvoiceNumberGenerator};
pub use totals::{InvoiceTotals, TAX_RATE, invoice_totals, item_subtotal};
