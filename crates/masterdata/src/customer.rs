use serde::{Deserialize, Serialize};

use haulbill_core::{DomainError, DomainResult, Entity, EntityId};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A billed party.
///
/// Invoices embed a value copy of the customer as of invoice time, so edits
/// here never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Required fields: name, address and contact person must be non-empty
    /// (whitespace-only counts as empty).
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("customer address cannot be empty"));
        }
        if self.contact_person.trim().is_empty() {
            return Err(DomainError::validation(
                "customer contact person cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Customer input before the store has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl NewCustomer {
    pub fn into_entity(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Customer {
        Customer {
            id: CustomerId::new(EntityId::new()),
            name: "ABC Logistics".to_string(),
            address: "123 Main St, Business District".to_string(),
            contact_person: "John Smith".to_string(),
            email: "john@abclogistics.com".to_string(),
            phone: "555-123-4567".to_string(),
        }
    }

    #[test]
    fn valid_customer_passes_validation() {
        assert!(test_customer().validate().is_ok());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut customer = test_customer();
        customer.name = "   ".to_string();
        let err = customer.validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn empty_contact_person_is_rejected() {
        let mut customer = test_customer();
        customer.contact_person = String::new();
        let err = customer.validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty contact person"),
        }
    }

    #[test]
    fn draft_keeps_fields_when_promoted() {
        let draft = NewCustomer {
            name: "XYZ Freight".to_string(),
            address: "456 Harbor Rd".to_string(),
            contact_person: "Maria Garcia".to_string(),
            email: "maria@xyzfreight.com".to_string(),
            phone: "555-987-6543".to_string(),
        };
        let id = CustomerId::new(EntityId::new());
        let customer = draft.clone().into_entity(id);
        assert_eq!(customer.id, id);
        assert_eq!(customer.name, draft.name);
        assert_eq!(customer.contact_person, draft.contact_person);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(test_customer()).unwrap();
        assert!(json.get("contactPerson").is_some());
        assert!(json.get("contact_person").is_none());
    }
}
