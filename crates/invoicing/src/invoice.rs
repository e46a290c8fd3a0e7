use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use haulbill_core::{DomainError, DomainResult, Entity, EntityId};
use haulbill_masterdata::{Customer, TransportCompany, Vehicle};

use crate::totals;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub EntityId);

impl InvoiceId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Where an invoice sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Lifecycle table. Allowed moves:
    ///
    /// - any status to itself (updates that keep the status),
    /// - any status to `Paid` (payment closes an invoice from anywhere,
    ///   including an invoice that is already paid),
    /// - `Draft` to `Sent`,
    /// - `Sent` to `Overdue`.
    ///
    /// Everything else is rejected. In particular a paid invoice never
    /// reopens and no status ever moves back to `Draft`. Nothing here fires
    /// on a timer; `Overdue` is only ever set by an explicit update.
    pub fn can_transition_to(self, next: InvoiceStatus) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (_, InvoiceStatus::Paid)
                | (InvoiceStatus::Draft, InvoiceStatus::Sent)
                | (InvoiceStatus::Sent, InvoiceStatus::Overdue)
        )
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        };
        f.write_str(s)
    }
}

/// Whether a waypoint is a pickup or a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Pickup,
    Delivery,
}

/// One stop on a transport job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupDeliveryPoint {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub address: String,
    pub date: DateTime<Utc>,
    pub contact_person: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// An ad-hoc charge on a line item (tolls, waiting time, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherCharge {
    pub id: EntityId,
    pub description: String,
    pub amount: f64,
}

/// One billable transport job within an invoice.
///
/// `vehicle` is a value copy taken when the item was built; editing the
/// vehicle master record later does not touch it. `subtotal` is derived
/// (`amount` plus the charge amounts) and the store recomputes it on every
/// create/update, so a caller-supplied value never survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: EntityId,
    pub description: String,
    pub vehicle: Vehicle,
    pub points: Vec<PickupDeliveryPoint>,
    pub amount: f64,
    pub other_charges: Vec<OtherCharge>,
    pub subtotal: f64,
}

impl InvoiceItem {
    /// Build an item with its subtotal derived from `amount` and `charges`.
    pub fn new(
        id: EntityId,
        description: impl Into<String>,
        vehicle: Vehicle,
        points: Vec<PickupDeliveryPoint>,
        amount: f64,
        other_charges: Vec<OtherCharge>,
    ) -> Self {
        let subtotal = totals::item_subtotal(amount, &other_charges);
        Self {
            id,
            description: description.into(),
            vehicle,
            points,
            amount,
            other_charges,
            subtotal,
        }
    }

    pub fn recompute_subtotal(&mut self) {
        self.subtotal = totals::item_subtotal(self.amount, &self.other_charges);
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.recompute_subtotal();
    }

    pub fn add_charge(&mut self, charge: OtherCharge) {
        self.other_charges.push(charge);
        self.recompute_subtotal();
    }

    pub fn remove_charge(&mut self, charge_id: &EntityId) {
        self.other_charges.retain(|c| c.id != *charge_id);
        self.recompute_subtotal();
    }
}

/// An invoice document.
///
/// `customer` and `transport_company` are value copies as of the last
/// create/update; master-data edits never rewrite a stored invoice.
/// `subtotal`, `tax` and `total` are derived from the items and, like item
/// subtotals, are recomputed by the store on every create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub customer: Customer,
    pub transport_company: TransportCompany,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

impl Invoice {
    /// Re-derive every item subtotal and the invoice totals.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.recompute_subtotal();
        }
        let derived = totals::invoice_totals(&self.items);
        self.subtotal = derived.subtotal;
        self.tax = derived.tax;
        self.total = derived.total;
    }

    pub fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
        self.recompute_totals();
    }

    pub fn remove_item(&mut self, item_id: &EntityId) {
        self.items.retain(|i| i.id != *item_id);
        self.recompute_totals();
    }

    pub fn set_items(&mut self, items: Vec<InvoiceItem>) {
        self.items = items;
        self.recompute_totals();
    }

    /// Move to `next`, enforcing the lifecycle table.
    pub fn transition_to(&mut self, next: InvoiceStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_transition(self.status, next));
        }
        self.status = next;
        Ok(())
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Invoice input before the store has assigned an id and number.
///
/// `status` falls back to `Draft`; totals fields are absent because the
/// store derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub customer: Customer,
    pub transport_company: TransportCompany,
    pub items: Vec<InvoiceItem>,
    pub status: Option<InvoiceStatus>,
    pub notes: Option<String>,
}

impl NewInvoice {
    /// Promote to a full invoice, deriving all subtotal/tax/total fields.
    pub fn into_entity(self, id: InvoiceId, invoice_number: String) -> Invoice {
        let mut invoice = Invoice {
            id,
            invoice_number,
            date: self.date,
            due_date: self.due_date,
            customer: self.customer,
            transport_company: self.transport_company,
            items: self.items,
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
            status: self.status.unwrap_or(InvoiceStatus::Draft),
            notes: self.notes,
        };
        invoice.recompute_totals();
        invoice
    }
}

/// Payment terms applied when a new invoice form is opened: net 30.
pub fn default_due_date(date: DateTime<Utc>) -> DateTime<Utc> {
    date + Duration::days(30)
}
