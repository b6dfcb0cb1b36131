//! [`ActorEntity`] implementation for [`Personnel`].

use super::PersonnelError;
use crate::clients::ProjectShareClient;
use crate::model::{Personnel, PersonnelCreate, PersonnelId, ShareOwner};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

fn validate(name: &str, salary: Option<i64>) -> Result<(), PersonnelError> {
    if name.trim().is_empty() {
        return Err(PersonnelError::ValidationError("name must not be blank".into()));
    }
    if salary.is_some_and(|s| s < 0) {
        return Err(PersonnelError::ValidationError(
            "annual_salary must not be negative".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Personnel {
    type Id = PersonnelId;
    type Create = PersonnelCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProjectShareClient;
    type Error = PersonnelError;

    fn id(&self) -> PersonnelId {
        self.id
    }

    fn from_create_params(id: PersonnelId, params: PersonnelCreate) -> Result<Self, Self::Error> {
        validate(&params.name, params.annual_salary)?;
        Ok(Self {
            id,
            name: params.name,
            department: params.department,
            annual_salary: params.annual_salary,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }

    /// Removes every share the person owns before the person goes.
    async fn on_delete(&self, shares: &ProjectShareClient) -> Result<(), Self::Error> {
        let removed = shares
            .remove_owner(ShareOwner::Personnel(self.id))
            .await
            .map_err(|e| PersonnelError::ShareCascade(e.to_string()))?;
        debug!(personnel_id = %self.id, removed, "Shares removed");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
