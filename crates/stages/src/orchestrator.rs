//! Runs the three stages in order with a barrier between each.

use provisioning::{
    BoardRequest, Credentials, ProvisioningError, ProvisioningSummary, RunId,
    SharedBoardOptions, Timestamp, TrackerApi,
};
use tracing::{error, info, info_span, Instrument};

use crate::{authenticate, create_boards, create_memberships};

/// Drives one provisioning run against a [`TrackerApi`].
///
/// The orchestrator holds no state between runs; every call to
/// [`Orchestrator::provision`] authenticates afresh.
#[derive(Debug, Clone)]
pub struct Orchestrator<A> {
    api: A,
}

impl<A> Orchestrator<A>
where
    A: TrackerApi,
{
    /// Creates an orchestrator over the given tracking-service adapter.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the underlying adapter.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Authenticates, creates every board, then grants every membership.
    ///
    /// Stops at the first failing stage: if authentication fails no board is
    /// created, and if any board fails no membership is requested.
    pub async fn provision(
        &self,
        credentials: Credentials,
        boards: &[BoardRequest],
        options: &SharedBoardOptions,
    ) -> Result<ProvisioningSummary, ProvisioningError> {
        let run_id = RunId::new_random();
        let span = info_span!("provision", run_id = %run_id, boards = boards.len());

        let result = self
            .run(run_id, credentials, boards, options)
            .instrument(span.clone())
            .await;

        span.in_scope(|| match &result {
            Ok(summary) => info!(
                boards = summary.boards.len(),
                memberships = summary.memberships.len(),
                "Provisioning complete"
            ),
            Err(err) => error!(error = %err, "Provisioning failed"),
        });
        result
    }

    async fn run(
        &self,
        run_id: RunId,
        credentials: Credentials,
        boards: &[BoardRequest],
        options: &SharedBoardOptions,
    ) -> Result<ProvisioningSummary, ProvisioningError> {
        let started_at = Timestamp::now();

        let token = authenticate(&self.api, &credentials).await?;
        drop(credentials);

        let created = create_boards(&self.api, &token, boards, options).await?;
        let memberships = create_memberships(&self.api, &token, &created, boards).await?;

        Ok(ProvisioningSummary {
            run_id,
            started_at,
            finished_at: Timestamp::now(),
            boards: created,
            memberships,
        })
    }
}

#[cfg(test)]
mod tests {
    use provisioning::{
        BoardName, EmailAddress, MembershipRequest, ProjectId, RoleId, TrackerError,
    };

    use super::*;
    use crate::testing::{board_request, created_board, created_board_with_id, Call, FakeTracker};

    fn options() -> SharedBoardOptions {
        SharedBoardOptions {
            description: "d".to_string(),
            is_private: true,
            ..SharedBoardOptions::default()
        }
    }

    #[tokio::test]
    async fn single_board_scenario_runs_all_three_stages() {
        let api = FakeTracker::new()
            .with_token("tok")
            .with_board("Alpha", created_board_with_id("p1", 42, "Back"));
        let orchestrator = Orchestrator::new(api);

        let summary = orchestrator
            .provision(
                Credentials::new("admin", "pw"),
                &[board_request("Alpha", &["a@x.com"])],
                &options(),
            )
            .await
            .unwrap();

        assert_eq!(
            orchestrator.api().calls(),
            vec![
                Call::Authenticate {
                    username: "admin".to_string()
                },
                Call::CreateBoard {
                    token: "tok".to_string(),
                    name: "Alpha".to_string(),
                    options: options(),
                },
                Call::CreateMembership {
                    token: "tok".to_string(),
                    membership: MembershipRequest {
                        project: ProjectId::new("p1"),
                        role: RoleId::new(42_u64),
                        email: EmailAddress::new("a@x.com").unwrap(),
                    },
                },
            ]
        );
        assert_eq!(summary.boards.len(), 1);
        assert_eq!(summary.memberships.len(), 1);
        assert!(summary.started_at <= summary.finished_at);
    }

    #[tokio::test]
    async fn auth_failure_short_circuits_everything() {
        let api = FakeTracker::new()
            .failing_auth(TrackerError::Rejected {
                status: 401,
                body: "nope".to_string(),
            })
            .with_board("Alpha", created_board(1, &["Back"]));
        let orchestrator = Orchestrator::new(api);

        let err = orchestrator
            .provision(
                Credentials::new("admin", "bad"),
                &[board_request("Alpha", &["a@x.com"])],
                &options(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::Auth { .. }));
        assert_eq!(orchestrator.api().calls().len(), 1);
    }

    #[tokio::test]
    async fn board_failure_prevents_every_membership() {
        let api = FakeTracker::new()
            .with_board("Alpha", created_board(1, &["Back"]))
            .failing_board(
                "Beta",
                TrackerError::Rejected {
                    status: 400,
                    body: "name taken".to_string(),
                },
            );
        let orchestrator = Orchestrator::new(api);

        let err = orchestrator
            .provision(
                Credentials::new("admin", "pw"),
                &[
                    board_request("Alpha", &["a@x.com"]),
                    board_request("Beta", &["b@x.com"]),
                ],
                &options(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProvisioningError::BoardCreation { ref board, .. } if *board == BoardName::new("Beta").unwrap()
        ));
        assert_eq!(orchestrator.api().board_names(), vec!["Alpha", "Beta"]);
        assert!(orchestrator.api().memberships().is_empty());
    }

    #[tokio::test]
    async fn missing_role_on_one_board_still_grants_siblings() {
        let api = FakeTracker::new()
            .with_board("Alpha", created_board(1, &["Owner"]))
            .with_board("Beta", created_board(2, &["Back"]));
        let orchestrator = Orchestrator::new(api);

        let err = orchestrator
            .provision(
                Credentials::new("admin", "pw"),
                &[
                    board_request("Alpha", &["a@x.com"]),
                    board_request("Beta", &["b@x.com"]),
                ],
                &options(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::RoleNotFound { .. }));
        let sent = orchestrator.api().memberships();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].project, ProjectId::new(2_u64));
    }
}
