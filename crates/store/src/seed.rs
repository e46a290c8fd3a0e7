//! Demo dataset for a freshly constructed store.

use haulbill_core::DomainResult;
use haulbill_masterdata::{NewCustomer, NewTransportCompany, NewVehicle};

use crate::store::DataStore;

/// Load the demo master data: three customers, three vehicles and two
/// transport companies. Invoices start empty. Rows go through the normal
/// add path, so they are validated and get fresh ids; call this on a fresh
/// store only, repeat calls append duplicates.
pub fn seed_demo_data(store: &DataStore) -> DomainResult<()> {
    store.add_customer(NewCustomer {
        name: "Acme Logistics".to_string(),
        address: "123 Main St, New York, NY 10001".to_string(),
        contact_person: "John Smith".to_string(),
        email: "john@acmelogistics.com".to_string(),
        phone: "212-555-1234".to_string(),
    })?;
    store.add_customer(NewCustomer {
        name: "Global Freight Inc".to_string(),
        address: "456 Business Ave, Los Angeles, CA 90001".to_string(),
        contact_person: "Jane Doe".to_string(),
        email: "jane@globalfreight.com".to_string(),
        phone: "323-555-6789".to_string(),
    })?;
    store.add_customer(NewCustomer {
        name: "Express Shipping Co".to_string(),
        address: "789 Transit Rd, Chicago, IL 60007".to_string(),
        contact_person: "Mike Johnson".to_string(),
        email: "mike@expressship.com".to_string(),
        phone: "312-555-9012".to_string(),
    })?;

    store.add_vehicle(NewVehicle {
        registration_number: "XYZ-1234".to_string(),
        make: "Volvo".to_string(),
        model: "FH16".to_string(),
        year: 2022,
        capacity: "40 tons".to_string(),
        vehicle_type: "Semi-trailer".to_string(),
    })?;
    store.add_vehicle(NewVehicle {
        registration_number: "ABC-5678".to_string(),
        make: "Mercedes-Benz".to_string(),
        model: "Actros".to_string(),
        year: 2021,
        capacity: "25 tons".to_string(),
        vehicle_type: "Box truck".to_string(),
    })?;
    store.add_vehicle(NewVehicle {
        registration_number: "DEF-9012".to_string(),
        make: "Scania".to_string(),
        model: "R Series".to_string(),
        year: 2023,
        capacity: "35 tons".to_string(),
        vehicle_type: "Refrigerated".to_string(),
    })?;

    store.add_transport_company(NewTransportCompany {
        name: "FastTrack Transport".to_string(),
        address: "101 Delivery Lane, Dallas, TX 75001".to_string(),
        contact_person: "Robert Brown".to_string(),
        email: "robert@fasttrack.com".to_string(),
        phone: "469-555-3456".to_string(),
        logo: Some("https://placehold.co/200x100?text=FastTrack".to_string()),
        signature: Some("https://placehold.co/200x60?text=R.Brown".to_string()),
    })?;
    store.add_transport_company(NewTransportCompany {
        name: "Reliable Shipping".to_string(),
        address: "202 Carrier Blvd, Miami, FL 33101".to_string(),
        contact_person: "Sarah Wilson".to_string(),
        email: "sarah@reliableshipping.com".to_string(),
        phone: "305-555-7890".to_string(),
        logo: Some("https://placehold.co/200x100?text=Reliable".to_string()),
        signature: Some("https://placehold.co/200x60?text=S.Wilson".to_string()),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_master_data_and_no_invoices() {
        let store = DataStore::new();
        seed_demo_data(&store).unwrap();

        assert_eq!(store.list_customers().len(), 3);
        assert_eq!(store.list_vehicles().len(), 3);
        assert_eq!(store.list_transport_companies().len(), 2);
        assert!(store.list_invoices().is_empty());
    }

    #[test]
    fn seeded_rows_keep_their_order() {
        let store = DataStore::new();
        seed_demo_data(&store).unwrap();

        let customers = store.list_customers();
        assert_eq!(customers[0].name, "Acme Logistics");
        assert_eq!(customers[2].name, "Express Shipping Co");

        let companies = store.list_transport_companies();
        assert_eq!(companies[0].name, "FastTrack Transport");
        assert!(companies[0].logo.is_some());
    }
}
