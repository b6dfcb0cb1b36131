use super::ProjectShareClient;
use crate::model::{OwnerKind, ProjectShare, ProjectShareCreate, ShareId, ShareOwner};
use crate::share_actor::ProjectShareError;
use tracing::{debug, instrument};

impl ProjectShareClient {
    /// Replaces every share `owner` holds with `entries`, as one unit of work.
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub async fn replace_for_owner(
        &self,
        owner: ShareOwner,
        entries: Vec<(String, f64)>,
    ) -> Result<Vec<ShareId>, ProjectShareError> {
        debug!("Sending request");
        let params = entries
            .into_iter()
            .map(|(project_title, percent)| ProjectShareCreate {
                owner,
                project_title,
                percent,
            })
            .collect();
        self.inner
            .replace(move |share: &ProjectShare| share.owner == owner, params)
            .await
            .map_err(Into::into)
    }

    /// Deletes every share `owner` holds and returns how many went.
    #[instrument(skip(self))]
    pub async fn remove_owner(&self, owner: ShareOwner) -> Result<usize, ProjectShareError> {
        debug!("Sending request");
        self.inner
            .delete_where(move |share: &ProjectShare| share.owner == owner)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn shares_of_kind(&self, kind: OwnerKind) -> Result<Vec<ProjectShare>, ProjectShareError> {
        debug!("Sending request");
        self.inner
            .list_where(move |share: &ProjectShare| share.owner.kind() == kind)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn shares_of(&self, owner: ShareOwner) -> Result<Vec<ProjectShare>, ProjectShareError> {
        debug!("Sending request");
        self.inner
            .list_where(move |share: &ProjectShare| share.owner == owner)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EquipmentId, PersonnelId};
    use actor_framework::mock::{create_mock_client, expect_replace, MockClient};

    fn share(owner: ShareOwner, title: &str) -> ProjectShare {
        ProjectShare {
            id: ShareId(1),
            owner,
            project_title: title.into(),
            percent: 10.0,
        }
    }

    #[tokio::test]
    async fn replace_is_scoped_to_the_owner() {
        let (inner, mut receiver) = create_mock_client::<ProjectShare>(4);
        let client = ProjectShareClient::new(inner);
        let owner = ShareOwner::Personnel(PersonnelId(7));

        let call = tokio::spawn(async move {
            client
                .replace_for_owner(owner, vec![("Kiln retrofit".into(), 40.0)])
                .await
        });

        let (scope, params, respond_to) = expect_replace(&mut receiver).await.unwrap();
        assert!(scope(&share(owner, "Old")));
        assert!(!scope(&share(ShareOwner::Personnel(PersonnelId(8)), "Old")));
        assert!(!scope(&share(ShareOwner::Equipment(EquipmentId(7)), "Old")));
        assert_eq!(
            params,
            vec![ProjectShareCreate {
                owner,
                project_title: "Kiln retrofit".into(),
                percent: 40.0,
            }]
        );
        respond_to.send(Ok(vec![ShareId(3)])).unwrap();

        assert_eq!(call.await.unwrap().unwrap(), vec![ShareId(3)]);
    }

    #[tokio::test]
    async fn remove_owner_reports_the_deleted_count() {
        let mut mock = MockClient::<ProjectShare>::new();
        let client = ProjectShareClient::new(mock.client());

        mock.expect_delete_where().return_ok(2);
        let removed = client
            .remove_owner(ShareOwner::Equipment(EquipmentId(4)))
            .await
            .unwrap();
        assert_eq!(removed, 2);

        mock.verify();
    }
}
