//! The in-memory application store.
//!
//! One `DataStore` owns the master-data collections and the invoices built
//! from them, and enforces the rules that span collections: referential
//! integrity on delete, total derivation on every write and the invoice
//! status lifecycle.

mod table;

pub mod seed;
pub mod store;


pub use seed::seed_demo_data;
pub use store::DataStore;
