//! RestTaskService - reqwest implementation of the task CRUD contract.
//!
//! Talks to the REST backend at `<base_url>/api/tasks` with a bearer token.
//! Configuration priority for [`RestTaskService::try_from_stored`]: token
//! store > environment variable.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use std::env;
use taskboard_core::config::BoardConfig;
use taskboard_core::error::{BoardError, Result};
use taskboard_core::session::{Session, TokenStore};
use taskboard_core::task::{Draft, Task, TaskService};

/// Environment variable consulted when the token store is empty.
const TOKEN_ENV_VAR: &str = "TASKBOARD_TOKEN";

/// Client for the remote task collection.
///
/// The session is fixed at construction; there is no retry, timeout, or
/// request queueing. Each call maps to exactly one HTTP request.
#[derive(Clone)]
pub struct RestTaskService {
    client: Client,
    tasks_url: String,
    session: Session,
}

impl RestTaskService {
    /// Creates a client for the configured server with an explicit session.
    pub fn new(config: &BoardConfig, session: Session) -> Self {
        Self {
            client: Client::new(),
            tasks_url: config.tasks_url(),
            session,
        }
    }

    /// Creates a client using the persisted token.
    ///
    /// Priority:
    /// 1. The token store (the string persisted on login)
    /// 2. The `TASKBOARD_TOKEN` environment variable
    ///
    /// # Errors
    ///
    /// Returns an Auth error when no token is available anywhere.
    pub fn try_from_stored(store: &dyn TokenStore, config: &BoardConfig) -> Result<Self> {
        let token = match store.load()? {
            Some(token) => token,
            None => env::var(TOKEN_ENV_VAR).map_err(|_| {
                BoardError::auth("Not logged in: no stored token and TASKBOARD_TOKEN is not set")
            })?,
        };

        Ok(Self::new(config, Session::new(token)))
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/{}", self.tasks_url, id)
    }

    /// Turns a non-success response into a typed error, preferring the
    /// server's `{"message": ...}` body over the raw text.
    async fn read_error(response: Response) -> BoardError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        map_http_error(status, body)
    }
}

#[async_trait]
impl TaskService for RestTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(&self.tasks_url)
            .header(AUTHORIZATION, self.session.authorization_value())
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            tracing::error!("Error loading tasks: {err}");
            return Err(err);
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|err| BoardError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to parse task list: {err}"),
            })
    }

    async fn create_task(&self, draft: &Draft) -> Result<Task> {
        let response = self
            .client
            .post(&self.tasks_url)
            .header(AUTHORIZATION, self.session.authorization_value())
            .json(&TaskBody::from(draft))
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            tracing::error!("Error adding task: {err}");
            return Err(err);
        }

        read_task_envelope(response).await
    }

    async fn update_task(&self, id: &str, draft: &Draft) -> Result<Task> {
        let response = self
            .client
            .put(self.entry_url(id))
            .header(AUTHORIZATION, self.session.authorization_value())
            .json(&TaskBody::from(draft))
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            tracing::error!("Error updating task {id}: {err}");
            return Err(err);
        }

        read_task_envelope(response).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.entry_url(id))
            .header(AUTHORIZATION, self.session.authorization_value())
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            tracing::error!("Error deleting task {id}: {err}");
            return Err(err);
        }

        Ok(())
    }
}

/// Request body for create and update. The identifier never travels in the
/// body; updates carry it in the URL.
#[derive(Serialize)]
struct TaskBody<'a> {
    title: &'a str,
    task: &'a str,
    completed: bool,
}

impl<'a> From<&'a Draft> for TaskBody<'a> {
    fn from(draft: &'a Draft) -> Self {
        Self {
            title: &draft.title,
            task: &draft.task,
            completed: draft.completed,
        }
    }
}

/// Create and update responses wrap the record: `{"task": {...}}`.
#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

async fn read_task_envelope(response: Response) -> Result<Task> {
    response
        .json::<TaskEnvelope>()
        .await
        .map(|envelope| envelope.task)
        .map_err(|err| BoardError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse task response: {err}"),
        })
}

fn map_http_error(status: StatusCode, body: String) -> BoardError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.message)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BoardError::auth(message),
        _ => BoardError::api(status.as_u16(), message),
    }
}

fn map_transport_error(err: reqwest::Error) -> BoardError {
    BoardError::transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_prefers_server_message() {
        let err = map_http_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"An error occurred"}"#.to_string(),
        );
        match err {
            BoardError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "An error occurred");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "plain text".to_string());
        assert_eq!(err.user_message(), "plain text");
    }

    #[test]
    fn test_unauthorized_maps_to_auth() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid token"}"#.to_string(),
        );
        assert!(err.is_auth());
        assert_eq!(err.user_message(), "Invalid token");

        let err = map_http_error(StatusCode::FORBIDDEN, "denied".to_string());
        assert!(err.is_auth());
    }

    #[test]
    fn test_task_body_omits_identifier() {
        let draft = Draft {
            id: Some("abc".to_string()),
            title: "A".to_string(),
            task: "x".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&TaskBody::from(&draft)).unwrap();
        assert!(!json.contains("_id"));
        assert!(!json.contains("abc"));
        assert_eq!(json, r#"{"title":"A","task":"x","completed":true}"#);
    }

    #[test]
    fn test_task_envelope_deserializes() {
        let json = r#"{"task":{"_id":"abc","title":"A","task":"x","completed":false}}"#;
        let envelope: TaskEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.task.id, "abc");
    }

    #[test]
    fn test_list_wire_format_is_bare_array() {
        let json = r#"[{"_id":"1","title":"A","task":"x"},{"_id":"2","title":"B","task":"y","completed":true}]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_entry_url() {
        let service = RestTaskService::new(
            &BoardConfig::with_base_url("http://localhost:8082"),
            Session::new("t"),
        );
        assert_eq!(
            service.entry_url("abc"),
            "http://localhost:8082/api/tasks/abc"
        );
    }
}
