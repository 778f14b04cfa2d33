//! Board creation stage.
//!
//! Every board is dispatched before any response is awaited; the stage then
//! waits for all of them to settle (the barrier before memberships). Results
//! are put back in request order by the index carried with each call, so the
//! output lines up with the input no matter how responses arrive.

use futures::future::join_all;
use provisioning::{
    AuthToken, BoardRequest, CreatedBoard, NewBoard, ProvisioningError, SharedBoardOptions,
    TrackerApi,
};
use tracing::{debug, info, instrument, warn};

/// Creates one board per request, concurrently.
///
/// On success the `i`-th created board belongs to the `i`-th request. If any
/// call fails, the error for the lowest failing index is returned and no
/// created boards are reported. Siblings already in flight are not cancelled.
#[instrument(skip_all, fields(boards = requests.len()))]
pub async fn create_boards<A>(
    api: &A,
    token: &AuthToken,
    requests: &[BoardRequest],
    options: &SharedBoardOptions,
) -> Result<Vec<CreatedBoard>, ProvisioningError>
where
    A: TrackerApi + ?Sized,
{
    let calls = requests.iter().enumerate().map(|(index, request)| async move {
        let board = NewBoard {
            name: &request.name,
            options,
        };
        debug!(index, board = %request.name, "Dispatching board creation");
        (index, api.create_board(token, board).await)
    });

    let mut settled = join_all(calls).await;
    settled.sort_by_key(|(index, _)| *index);

    let mut created = Vec::with_capacity(settled.len());
    let mut first_failure = None;
    for (index, outcome) in settled {
        let name = &requests[index].name;
        match outcome {
            Ok(board) => {
                debug!(index, board = %name, project = %board.id, "Board created");
                created.push(board);
            }
            Err(source) => {
                warn!(index, board = %name, error = %source, "Board creation failed");
                if first_failure.is_none() {
                    first_failure = Some(ProvisioningError::BoardCreation {
                        board: name.clone(),
                        source,
                    });
                }
            }
        }
    }

    if let Some(err) = first_failure {
        return Err(err);
    }

    info!(count = created.len(), "All boards created");
    Ok(created)
}
