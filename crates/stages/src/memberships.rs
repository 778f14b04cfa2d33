//! Membership stage: grant every listed member the `"Back"` role on their board.
//!
//! Role resolution happens per board before anything is dispatched. A board
//! without the role contributes no calls, but its siblings still go out. All
//! grants across all boards are then awaited together.

use futures::future::join_all;
use provisioning::{
    AuthToken, BoardRequest, CreatedBoard, MembershipRequest, ProvisioningError, TrackerApi,
    MEMBER_ROLE_NAME,
};
use tracing::{debug, info, instrument, warn};

/// Position of one grant: (board index, member index).
type Slot = (usize, usize);

/// Creates one membership per (board, member) pair, concurrently.
///
/// `boards` and `requests` are paired by position. On success the granted
/// memberships are returned in board order, then member order.
///
/// On failure the earliest failing slot wins: a board missing its role
/// reports [`ProvisioningError::RoleNotFound`], a failed grant reports
/// [`ProvisioningError::MembershipCreation`].
#[instrument(skip_all, fields(boards = boards.len()))]
pub async fn create_memberships<A>(
    api: &A,
    token: &AuthToken,
    boards: &[CreatedBoard],
    requests: &[BoardRequest],
) -> Result<Vec<MembershipRequest>, ProvisioningError>
where
    A: TrackerApi + ?Sized,
{
    if boards.len() != requests.len() {
        return Err(ProvisioningError::BoardCountMismatch {
            requested: requests.len(),
            created: boards.len(),
        });
    }

    let mut failures: Vec<(Slot, ProvisioningError)> = Vec::new();
    let mut planned: Vec<(Slot, MembershipRequest)> = Vec::new();

    for (board_index, (board, request)) in boards.iter().zip(requests).enumerate() {
        if request.member_emails.is_empty() {
            continue;
        }

        let Some(role) = board.role_id(MEMBER_ROLE_NAME) else {
            warn!(
                board = %request.name,
                project = %board.id,
                role = MEMBER_ROLE_NAME,
                "Role not found; skipping this board's members"
            );
            failures.push((
                (board_index, 0),
                ProvisioningError::RoleNotFound {
                    board: request.name.clone(),
                    role: MEMBER_ROLE_NAME.to_string(),
                },
            ));
            continue;
        };

        for (member_index, email) in request.member_emails.iter().enumerate() {
            planned.push((
                (board_index, member_index),
                MembershipRequest {
                    project: board.id.clone(),
                    role: role.clone(),
                    email: email.clone(),
                },
            ));
        }
    }

    let calls = planned.into_iter().map(|(slot, membership)| async move {
        debug!(
            project = %membership.project,
            email = %membership.email,
            "Dispatching membership creation"
        );
        let outcome = api.create_membership(token, &membership).await;
        (slot, membership, outcome)
    });

    let mut settled = join_all(calls).await;
    settled.sort_by_key(|(slot, _, _)| *slot);

    let mut granted = Vec::with_capacity(settled.len());
    for (slot, membership, outcome) in settled {
        let board = &requests[slot.0].name;
        match outcome {
            Ok(()) => granted.push(membership),
            Err(source) => {
                warn!(board = %board, email = %membership.email, error = %source, "Membership creation failed");
                failures.push((
                    slot,
                    ProvisioningError::MembershipCreation {
                        board: board.clone(),
                        email: membership.email,
                        source,
                    },
                ));
            }
        }
    }

    if let Some((_, err)) = failures.into_iter().min_by_key(|(slot, _)| *slot) {
        return Err(err);
    }

    info!(count = granted.len(), "All memberships granted");
    Ok(granted)
}
