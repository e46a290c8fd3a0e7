use serde::{Deserialize, Serialize};

use haulbill_core::{DomainError, DomainResult, Entity, EntityId};

/// Vehicle identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub EntityId);

impl VehicleId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A truck or trailer that invoice line items bill transport jobs against.
///
/// `vehicle_type` is free text ("Flatbed Truck", "Refrigerated Truck", ...),
/// serialized under the `type` key. `capacity` is likewise descriptive
/// ("20 tons"), not a number the domain computes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub capacity: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
}

impl Vehicle {
    /// Required fields: registration number, make and model must be
    /// non-empty; year must be positive.
    pub fn validate(&self) -> DomainResult<()> {
        if self.registration_number.trim().is_empty() {
            return Err(DomainError::validation(
                "vehicle registration number cannot be empty",
            ));
        }
        if self.make.trim().is_empty() {
            return Err(DomainError::validation("vehicle make cannot be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::validation("vehicle model cannot be empty"));
        }
        if self.year <= 0 {
            return Err(DomainError::validation("vehicle year must be positive"));
        }
        Ok(())
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Vehicle input before the store has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub capacity: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
}

impl NewVehicle {
    pub fn into_entity(self, id: VehicleId) -> Vehicle {
        Vehicle {
            id,
            registration_number: self.registration_number,
            make: self.make,
            model: self.model,
            year: self.year,
            capacity: self.capacity,
            vehicle_type: self.vehicle_type,
        }
    }
}
