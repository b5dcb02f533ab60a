//! FlagModel -> Flag mapper

use gavel_core::entities::Flag;
use gavel_core::error::DomainError;
use gavel_core::value_objects::{FlagStatus, ResourceKind};

use crate::models::FlagModel;

impl TryFrom<FlagModel> for Flag {
    type Error = DomainError;

    fn try_from(model: FlagModel) -> Result<Self, Self::Error> {
        let resource_kind = model
            .resource_type
            .parse::<ResourceKind>()
            .map_err(|e| DomainError::DatabaseError(format!("Corrupt flag row: {e}")))?;
        let status = model
            .status
            .parse::<FlagStatus>()
            .map_err(|e| DomainError::DatabaseError(format!("Corrupt flag row: {e}")))?;

        Ok(Flag {
            id: model.id,
            flagger_id: model.flagger_id,
            resource_id: model.resource_id,
            resource_kind,
            reason: model.reason,
            status,
            created_at: model.created_at,
        })
    }
}
