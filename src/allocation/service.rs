use super::engine::{allocate, AllocationReport};
use super::registry::ActiveProjectRegistry;
use crate::clients::{EquipmentClient, PersonnelClient, ProjectClient, ProjectShareClient};
use crate::equipment_actor::EquipmentError;
use crate::model::{OwnerKind, ShareId, ShareOwner, ShareReplacement};
use crate::personnel_actor::PersonnelError;
use crate::project_actor::ProjectError;
use crate::share_actor::ProjectShareError;
use actor_framework::ActorClient;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocationError {
    #[error("Owner not found: {0}")]
    OwnerNotFound(ShareOwner),

    #[error(transparent)]
    Personnel(#[from] PersonnelError),

    #[error(transparent)]
    Equipment(#[from] EquipmentError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Share(#[from] ProjectShareError),
}

/// Gathers allocation inputs from the stores and owns share replacement.
#[derive(Clone)]
pub struct AllocationService<R = ProjectClient> {
    personnel: PersonnelClient,
    equipment: EquipmentClient,
    shares: ProjectShareClient,
    registry: R,
}

impl<R: ActiveProjectRegistry> AllocationService<R> {
    pub fn new(
        personnel: PersonnelClient,
        equipment: EquipmentClient,
        shares: ProjectShareClient,
        registry: R,
    ) -> Self {
        Self {
            personnel,
            equipment,
            shares,
            registry,
        }
    }

    /// The allocation report, or the zero report if any input cannot be read.
    pub async fn report(&self) -> AllocationReport {
        match self.try_report().await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Allocation inputs unavailable, serving zero report");
                AllocationReport::default()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn try_report(&self) -> Result<AllocationReport, AllocationError> {
        let personnel = self.personnel.list().await?;
        let equipment = self.equipment.list().await?;
        let personnel_shares = self.shares.shares_of_kind(OwnerKind::Personnel).await?;
        let equipment_shares = self.shares.shares_of_kind(OwnerKind::Equipment).await?;
        let active = self.registry.active_titles().await?;
        debug!(
            personnel = personnel.len(),
            equipment = equipment.len(),
            projects = active.len(),
            "Allocation inputs gathered"
        );
        Ok(allocate(
            &personnel,
            &equipment,
            &personnel_shares,
            &equipment_shares,
            active,
        ))
    }

    /// Replaces every share of `owner` with the usable entries of `payload`.
    ///
    /// Entries that are not positive numbers are dropped. An empty result clears the
    /// owner's shares.
    #[instrument(skip(self, payload))]
    pub async fn replace_shares(
        &self,
        owner: ShareOwner,
        payload: &ShareReplacement,
    ) -> Result<Vec<ShareId>, AllocationError> {
        let exists = match owner {
            ShareOwner::Personnel(id) => self.personnel.get(id).await?.is_some(),
            ShareOwner::Equipment(id) => self.equipment.get(id).await?.is_some(),
        };
        if !exists {
            return Err(AllocationError::OwnerNotFound(owner));
        }

        let dropped = payload.rejected_count();
        if dropped > 0 {
            debug!(dropped, "Ignoring unusable share entries");
        }
        let ids = self.shares.replace_for_owner(owner, payload.accepted()).await?;
        info!(count = ids.len(), "Shares replaced");
        Ok(ids)
    }
}
