//! Request and response bodies as Taiga spells them.

use provisioning::{NewBoard, SharedBoardOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> AuthRequest<'a> {
    pub fn normal(username: &'a str, password: &'a str) -> Self {
        Self {
            kind: "normal",
            username,
            password,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub auth_token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectPayload<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub is_private: bool,
    pub is_backlog_activated: bool,
    pub is_issues_activated: bool,
    pub is_kanban_activated: bool,
    pub is_wiki_activated: bool,
}

impl<'a> From<NewBoard<'a>> for ProjectPayload<'a> {
    fn from(board: NewBoard<'a>) -> Self {
        let SharedBoardOptions {
            description,
            is_private,
            backlog_enabled,
            issues_enabled,
            kanban_enabled,
            wiki_enabled,
        } = board.options;

        Self {
            name: board.name.as_str(),
            description,
            is_private: *is_private,
            is_backlog_activated: *backlog_enabled,
            is_issues_activated: *issues_enabled,
            is_kanban_activated: *kanban_enabled,
            is_wiki_activated: *wiki_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use provisioning::BoardName;
    use serde_json::json;

    use super::*;

    #[test]
    fn project_payload_uses_taiga_field_names() {
        let name = BoardName::new("Alpha").unwrap();
        let options = SharedBoardOptions {
            description: "d".to_string(),
            is_private: true,
            backlog_enabled: false,
            issues_enabled: true,
            kanban_enabled: false,
            wiki_enabled: true,
        };

        let payload = ProjectPayload::from(NewBoard {
            name: &name,
            options: &options,
        });

        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "name": "Alpha",
                "description": "d",
                "is_private": true,
                "is_backlog_activated": false,
                "is_issues_activated": true,
                "is_kanban_activated": false,
                "is_wiki_activated": true,
            })
        );
    }

    #[test]
    fn auth_request_is_tagged_normal() {
        assert_eq!(
            serde_json::to_value(AuthRequest::normal("admin", "pw")).unwrap(),
            json!({"type": "normal", "username": "admin", "password": "pw"})
        );
    }
}
