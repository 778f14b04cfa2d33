//! In-memory [`TrackerApi`] that records every call, for stage tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use provisioning::{
    AuthToken, BoardName, BoardRequest, CreatedBoard, Credentials, EmailAddress,
    MembershipRequest, NewBoard, ProjectId, RemoteId, Role, RoleId, RoleName,
    SharedBoardOptions, TrackerApi, TrackerError,
};

/// One recorded call, captured when it is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Authenticate {
        username: String,
    },
    CreateBoard {
        token: String,
        name: String,
        options: SharedBoardOptions,
    },
    CreateMembership {
        token: String,
        membership: MembershipRequest,
    },
}

struct BoardScript {
    outcome: Result<CreatedBoard, TrackerError>,
    delay: Duration,
}

struct MemberScript {
    outcome: Result<(), TrackerError>,
    delay: Duration,
}

pub struct FakeTracker {
    auth: Result<String, TrackerError>,
    boards: HashMap<String, BoardScript>,
    members: HashMap<String, MemberScript>,
    calls: Mutex<Vec<Call>>,
    completed: Mutex<Vec<String>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self {
            auth: Ok("token".to_string()),
            boards: HashMap::new(),
            members: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.auth = Ok(token.to_string());
        self
    }

    pub fn failing_auth(mut self, err: TrackerError) -> Self {
        self.auth = Err(err);
        self
    }

    pub fn with_board(self, name: &str, board: CreatedBoard) -> Self {
        self.with_board_after(name, board, 0)
    }

    pub fn with_board_after(mut self, name: &str, board: CreatedBoard, delay_ms: u64) -> Self {
        self.boards.insert(
            name.to_string(),
            BoardScript {
                outcome: Ok(board),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub fn failing_board(self, name: &str, err: TrackerError) -> Self {
        self.failing_board_after(name, err, 0)
    }

    pub fn failing_board_after(mut self, name: &str, err: TrackerError, delay_ms: u64) -> Self {
        self.boards.insert(
            name.to_string(),
            BoardScript {
                outcome: Err(err),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub fn with_member_after(mut self, email: &str, delay_ms: u64) -> Self {
        self.members.insert(
            email.to_string(),
            MemberScript {
                outcome: Ok(()),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub fn failing_member(self, email: &str, err: TrackerError) -> Self {
        self.failing_member_after(email, err, 0)
    }

    pub fn failing_member_after(mut self, email: &str, err: TrackerError, delay_ms: u64) -> Self {
        self.members.insert(
            email.to_string(),
            MemberScript {
                outcome: Err(err),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Board names in dispatch order.
    pub fn board_names(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateBoard { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Board names and member emails in the order their calls finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    /// Membership payloads in dispatch order, successful or not.
    pub fn memberships(&self) -> Vec<MembershipRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateMembership { membership, .. } => Some(membership),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TrackerApi for FakeTracker {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, TrackerError> {
        self.record(Call::Authenticate {
            username: credentials.username().to_string(),
        });
        self.auth.clone().map(AuthToken::new)
    }

    async fn create_board(
        &self,
        token: &AuthToken,
        board: NewBoard<'_>,
    ) -> Result<CreatedBoard, TrackerError> {
        let name = board.name.as_str().to_string();
        self.record(Call::CreateBoard {
            token: token.expose().to_string(),
            name: name.clone(),
            options: board.options.clone(),
        });

        let Some(script) = self.boards.get(&name) else {
            return Err(TrackerError::InvalidResponse {
                message: format!("no scripted board named {name}"),
            });
        };
        tokio::time::sleep(script.delay).await;
        self.completed.lock().unwrap().push(name);
        script.outcome.clone()
    }

    async fn create_membership(
        &self,
        token: &AuthToken,
        membership: &MembershipRequest,
    ) -> Result<(), TrackerError> {
        self.record(Call::CreateMembership {
            token: token.expose().to_string(),
            membership: membership.clone(),
        });

        let email = membership.email.as_str().to_string();
        let outcome = match self.members.get(&email) {
            Some(script) => {
                tokio::time::sleep(script.delay).await;
                script.outcome.clone()
            }
            None => Ok(()),
        };
        self.completed.lock().unwrap().push(email);
        outcome
    }
}

pub fn board_request(name: &str, emails: &[&str]) -> BoardRequest {
    BoardRequest::new(
        BoardName::new(name).unwrap(),
        emails
            .iter()
            .map(|email| EmailAddress::new(*email).unwrap())
            .collect(),
    )
}

/// A created board whose roles get ids `10, 11, ...` in the given order.
pub fn created_board(id: u64, role_names: &[&str]) -> CreatedBoard {
    CreatedBoard {
        id: ProjectId::new(id),
        roles: role_names
            .iter()
            .enumerate()
            .map(|(i, name)| Role {
                id: RoleId::new(10 + i as u64),
                name: RoleName::new(*name).unwrap(),
            })
            .collect(),
    }
}

pub fn created_board_with_id(
    id: impl Into<RemoteId>,
    role_id: u64,
    role_name: &str,
) -> CreatedBoard {
    CreatedBoard {
        id: ProjectId::new(id),
        roles: vec![Role {
            id: RoleId::new(role_id),
            name: RoleName::new(role_name).unwrap(),
        }],
    }
}
