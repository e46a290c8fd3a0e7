use serde::{Deserialize, Serialize};

use haulbill_core::{DomainError, DomainResult, Entity, EntityId};

/// Transport company identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportCompanyId(pub EntityId);

impl TransportCompanyId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TransportCompanyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The issuing carrier printed on an invoice.
///
/// `logo` and `signature` hold image data or references for document
/// rendering; the domain treats them as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportCompany {
    pub id: TransportCompanyId,
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub logo: Option<String>,
    pub signature: Option<String>,
}

impl TransportCompany {
    /// Required fields: name and address must be non-empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("company address cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for TransportCompany {
    type Id = TransportCompanyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Transport company input before the store has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransportCompany {
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub logo: Option<String>,
    pub signature: Option<String>,
}

impl NewTransportCompany {
    pub fn into_entity(self, id: TransportCompanyId) -> TransportCompany {
        TransportCompany {
            id,
            name: self.name,
            address: self.address,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            logo: self.logo,
            signature: self.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_company() -> TransportCompany {
        TransportCompany {
            id: TransportCompanyId::new(EntityId::new()),
            name: "FastTrack Shipping".to_string(),
            address: "789 Transport Ave".to_string(),
            contact_person: "Robert Chen".to_string(),
            email: "robert@fasttrack.com".to_string(),
            phone: "555-456-7890".to_string(),
            logo: None,
            signature: None,
        }
    }

    #[test]
    fn valid_company_passes_validation() {
        assert!(test_company().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut company = test_company();
        company.name = String::new();
        let err = company.validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn whitespace_only_address_is_rejected() {
        let mut company = test_company();
        company.address = "  \t".to_string();
        let err = company.validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty address"),
        }
    }

    #[test]
    fn optional_branding_fields_default_to_none_in_json() {
        let json = serde_json::to_value(test_company()).unwrap();
        assert!(json["logo"].is_null());
        assert!(json.get("contactPerson").is_some());
    }
}
