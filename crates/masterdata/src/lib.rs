//! Master data records: customers, vehicles and transport companies.
//!
//! Master records are plain data: the store replaces them wholesale on
//! update, and invoices embed value copies of them rather than references.

pub mod company;
pub mod customer;
pub mod vehicle;

pub use company::{NewTransportCompany, TransportCompany, TransportCompanyId};
pub use customer::{Customer, CustomerId, NewCustomer};
pub use vehicle::{NewVehicle, Vehicle, VehicleId};
