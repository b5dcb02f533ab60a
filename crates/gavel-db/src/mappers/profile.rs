//! ProfileModel -> Profile mapper

use gavel_core::entities::Profile;
use gavel_core::error::DomainError;
use gavel_core::value_objects::Role;

use crate::models::ProfileModel;

impl TryFrom<ProfileModel> for Profile {
    type Error = DomainError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::DatabaseError(format!("Corrupt profile row: {e}")))?;

        Ok(Profile {
            id: model.id,
            username: model.username,
            role,
            level: model.level,
            banned: model.banned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_map_admin_profile() {
        let model = ProfileModel {
            id: Uuid::new_v4(),
            username: "mod".to_string(),
            role: "admin".to_string(),
            level: 42,
            banned: false,
        };

        let profile = Profile::try_from(model).unwrap();
        assert!(profile.is_admin());
        assert!(profile.is_trusted());
    }

    #[test]
    fn test_corrupt_role_is_database_error() {
        let model = ProfileModel {
            id: Uuid::new_v4(),
            username: "mod".to_string(),
            role: "superuser".to_string(),
            level: 0,
            banned: false,
        };

        assert!(matches!(
            Profile::try_from(model).unwrap_err(),
            DomainError::DatabaseError(_)
        ));
    }
}
