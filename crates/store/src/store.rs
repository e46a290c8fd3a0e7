//! The store object every operation goes through.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use haulbill_core::{DomainError, DomainResult, EntityId};
use haulbill_invoicing::{
    DatedRandomGenerator, Invoice, InvoiceId, InvoiceItem, InvoiceNumberGenerator, InvoiceStatus,
    NewInvoice,
};
use haulbill_masterdata::{
    Customer, CustomerId, NewCustomer, NewTransportCompany, NewVehicle, TransportCompany,
    TransportCompanyId, Vehicle, VehicleId,
};

use crate::table::Table;

/// Single-tenant application state: the three master-data collections and
/// the invoices built from them.
///
/// One logical writer mutates at a time; the locks exist so a shared handle
/// (`Arc<DataStore>`) can be held from anywhere. Operations touching two
/// collections take the invoice lock first, then the master table. Every
/// operation either applies fully or leaves the store untouched.
pub struct DataStore {
    invoices: RwLock<Table<Invoice>>,
    customers: RwLock<Table<Customer>>,
    vehicles: RwLock<Table<Vehicle>>,
    companies: RwLock<Table<TransportCompany>>,
    number_generator: Box<dyn InvoiceNumberGenerator>,
}

impl DataStore {
    /// Empty store with the historical random invoice numbering.
    pub fn new() -> Self {
        Self::with_number_generator(Box::new(DatedRandomGenerator))
    }

    /// Empty store with a caller-chosen numbering policy.
    pub fn with_number_generator(number_generator: Box<dyn InvoiceNumberGenerator>) -> Self {
        Self {
            invoices: RwLock::new(Table::new()),
            customers: RwLock::new(Table::new()),
            vehicles: RwLock::new(Table::new()),
            companies: RwLock::new(Table::new()),
            number_generator,
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

// -------------------------
// Customer operations
// -------------------------

impl DataStore {
    pub fn add_customer(&self, draft: NewCustomer) -> DomainResult<CustomerId> {
        let customer = draft.into_entity(CustomerId::new(EntityId::new()));
        customer.validate()?;
        let id = customer.id;

        write_guard(&self.customers).insert(customer);
        tracing::info!("customer {id} added");
        Ok(id)
    }

    pub fn update_customer(&self, customer: Customer) -> DomainResult<()> {
        customer.validate()?;
        let id = customer.id;

        if !write_guard(&self.customers).replace(customer) {
            return Err(DomainError::NotFound);
        }
        tracing::info!("customer {id} updated");
        Ok(())
    }

    pub fn delete_customer(&self, id: CustomerId) -> DomainResult<()> {
        let invoices = read_guard(&self.invoices);
        if invoices.iter().any(|inv| inv.customer.id == id) {
            tracing::warn!("customer {id} delete blocked by invoice reference");
            return Err(DomainError::referential(
                "customer is referenced by an invoice",
            ));
        }

        let mut customers = write_guard(&self.customers);
        customers.remove(&id).ok_or(DomainError::NotFound)?;
        tracing::info!("customer {id} deleted");
        Ok(())
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        read_guard(&self.customers).all()
    }

    pub fn get_customer(&self, id: CustomerId) -> DomainResult<Customer> {
        read_guard(&self.customers)
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

// -------------------------
// Vehicle operations
// -------------------------

impl DataStore {
    pub fn add_vehicle(&self, draft: NewVehicle) -> DomainResult<VehicleId> {
        let vehicle = draft.into_entity(VehicleId::new(EntityId::new()));
        vehicle.validate()?;
        let id = vehicle.id;

        write_guard(&self.vehicles).insert(vehicle);
        tracing::info!("vehicle {id} added");
        Ok(id)
    }

    pub fn update_vehicle(&self, vehicle: Vehicle) -> DomainResult<()> {
        vehicle.validate()?;
        let id = vehicle.id;

        if !write_guard(&self.vehicles).replace(vehicle) {
            return Err(DomainError::NotFound);
        }
        tracing::info!("vehicle {id} updated");
        Ok(())
    }

    /// Vehicles are referenced through invoice line items, not by the
    /// invoice itself.
    pub fn delete_vehicle(&self, id: VehicleId) -> DomainResult<()> {
        let invoices = read_guard(&self.invoices);
        let referenced = invoices
            .iter()
            .any(|inv| inv.items.iter().any(|item| item.vehicle.id == id));
        if referenced {
            tracing::warn!("vehicle {id} delete blocked by invoice item reference");
            return Err(DomainError::referential(
                "vehicle is referenced by an invoice item",
            ));
        }

        let mut vehicles = write_guard(&self.vehicles);
        vehicles.remove(&id).ok_or(DomainError::NotFound)?;
        tracing::info!("vehicle {id} deleted");
        Ok(())
    }

    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        read_guard(&self.vehicles).all()
    }

    pub fn get_vehicle(&self, id: VehicleId) -> DomainResult<Vehicle> {
        read_guard(&self.vehicles)
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

// -------------------------
// Transport company operations
// -------------------------

impl DataStore {
    pub fn add_transport_company(
        &self,
        draft: NewTransportCompany,
    ) -> DomainResult<TransportCompanyId> {
        let company = draft.into_entity(TransportCompanyId::new(EntityId::new()));
        company.validate()?;
        let id = company.id;

        write_guard(&self.companies).insert(company);
        tracing::info!("transport company {id} added");
        Ok(id)
    }

    pub fn update_transport_company(&self, company: TransportCompany) -> DomainResult<()> {
        company.validate()?;
        let id = company.id;

        if !write_guard(&self.companies).replace(company) {
            return Err(DomainError::NotFound);
        }
        tracing::info!("transport company {id} updated");
        Ok(())
    }

    pub fn delete_transport_company(&self, id: TransportCompanyId) -> DomainResult<()> {
        let invoices = read_guard(&self.invoices);
        if invoices.iter().any(|inv| inv.transport_company.id == id) {
            tracing::warn!("transport company {id} delete blocked by invoice reference");
            return Err(DomainError::referential(
                "transport company is referenced by an invoice",
            ));
        }

        let mut companies = write_guard(&self.companies);
        companies.remove(&id).ok_or(DomainError::NotFound)?;
        tracing::info!("transport company {id} deleted");
        Ok(())
    }

    pub fn list_transport_companies(&self) -> Vec<TransportCompany> {
        read_guard(&self.companies).all()
    }

    pub fn get_transport_company(&self, id: TransportCompanyId) -> DomainResult<TransportCompany> {
        read_guard(&self.companies)
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

// -------------------------
// Invoice operations
// -------------------------

impl DataStore {
    /// Store a new invoice: assigns the id and invoice number, defaults the
    /// status to draft and re-derives every subtotal/tax/total field.
    /// Whatever totals the caller put on the items are overwritten.
    pub fn create_invoice(&self, draft: NewInvoice) -> DomainResult<InvoiceId> {
        validate_invoice_inputs(&draft.customer, &draft.transport_company, &draft.items)?;

        let id = InvoiceId::new(EntityId::new());
        let number = self.number_generator.generate();
        let invoice = draft.into_entity(id, number);

        tracing::info!(
            "invoice {id} created as {} ({} items, total {:.2})",
            invoice.invoice_number,
            invoice.items.len(),
            invoice.total
        );
        write_guard(&self.invoices).insert(invoice);
        Ok(id)
    }

    /// Replace a stored invoice wholesale. The status may only change along
    /// the lifecycle table; totals are re-derived before storing.
    pub fn update_invoice(&self, invoice: Invoice) -> DomainResult<()> {
        validate_invoice_inputs(&invoice.customer, &invoice.transport_company, &invoice.items)?;
        let id = invoice.id;

        let mut invoices = write_guard(&self.invoices);
        let slot = invoices.get_mut(&id).ok_or(DomainError::NotFound)?;
        if !slot.status.can_transition_to(invoice.status) {
            return Err(DomainError::invalid_transition(slot.status, invoice.status));
        }

        let mut updated = invoice;
        updated.recompute_totals();
        *slot = updated;
        tracing::info!("invoice {id} updated");
        Ok(())
    }

    pub fn delete_invoice(&self, id: InvoiceId) -> DomainResult<()> {
        let mut invoices = write_guard(&self.invoices);
        invoices.remove(&id).ok_or(DomainError::NotFound)?;
        tracing::info!("invoice {id} deleted");
        Ok(())
    }

    /// Record payment: sets the status to paid from any status, including
    /// paid itself. Nothing else on the invoice changes.
    pub fn mark_invoice_paid(&self, id: InvoiceId) -> DomainResult<()> {
        let mut invoices = write_guard(&self.invoices);
        let invoice = invoices.get_mut(&id).ok_or(DomainError::NotFound)?;
        invoice.transition_to(InvoiceStatus::Paid)?;
        tracing::info!("invoice {id} marked paid");
        Ok(())
    }

    pub fn list_invoices(&self) -> Vec<Invoice> {
        read_guard(&self.invoices).all()
    }

    pub fn get_invoice(&self, id: InvoiceId) -> DomainResult<Invoice> {
        read_guard(&self.invoices)
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

/// Preconditions shared by create and update: at least one line item, and
/// customer/company snapshots that would pass master-data validation.
fn validate_invoice_inputs(
    customer: &Customer,
    company: &TransportCompany,
    items: &[InvoiceItem],
) -> DomainResult<()> {
    if items.is_empty() {
        return Err(DomainError::validation(
            "invoice must have at least one item",
        ));
    }
    customer.validate()?;
    company.validate()?;
    Ok(())
}

/// Recover the guard even if a previous holder panicked.
fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
