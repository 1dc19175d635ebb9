//! Assistant Bridge
//!
//! Forwards chat turns, prefixed with a snapshot of the current board state,
//! to a Gemini-style generative language API. One round-trip per chat turn,
//! no retry or backoff; a failure surfaces to the caller immediately.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::models::{BoardWithTasks, ChatMessage, ChatRole};

use crate::core::Config;
use crate::utils::{AppError, AppResult};

/// Outbound generative API client
#[derive(Clone)]
pub struct AssistantService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
}

// generateContent request/response shapes (only the parts used here)

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Render one board as a snapshot block
fn board_to_message(board: &BoardWithTasks) -> String {
    let tasks = board
        .tasks
        .iter()
        .map(|task| format!("- {} ({})", task.title, task.status))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Board: {}\nTasks:\n{}", board.title, tasks)
}

/// The synthetic first turn: assistant preamble plus every board's snapshot
pub fn snapshot_prompt(boards: &[BoardWithTasks]) -> String {
    let rendered = boards
        .iter()
        .map(board_to_message)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are a project management assistant.\nHere are the boards and their tasks:\n{rendered}"
    )
}

/// The generative API names the assistant side "model"
fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    }
}

impl AssistantService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    /// Send the snapshot turn plus the conversation; return the reply text
    pub async fn chat(
        &self,
        boards: &[BoardWithTasks],
        messages: &[ChatMessage],
    ) -> AppResult<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::internal("GEMINI_API_KEY is not configured"));
        };

        let mut contents = Vec::with_capacity(messages.len() + 1);
        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: snapshot_prompt(boards),
            }],
        });
        for message in messages {
            contents.push(Content {
                role: role_name(message.role),
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            });
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&GenerateRequest { contents })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "Generative API returned {}",
                response.status()
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Invalid response body: {e}")))?;

        data.candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| AppError::upstream("Response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Task, TaskPriority, TaskStatus};

    fn task(title: &str, status: TaskStatus) -> Task {
        Task {
            id: shared::util::new_id(),
            board_id: "b1".into(),
            title: title.into(),
            description: String::new(),
            status,
            priority: TaskPriority::Medium,
            created_at: 0,
            updated_at: 0,
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            due_date: None,
            parent_id: None,
        }
    }

    #[test]
    fn snapshot_lists_each_board_with_its_tasks() {
        let boards = vec![
            BoardWithTasks {
                id: "b1".into(),
                title: "To Do".into(),
                tasks: vec![
                    task("Design UI", TaskStatus::Todo),
                    task("Ship it", TaskStatus::InProgress),
                ],
            },
            BoardWithTasks {
                id: "b2".into(),
                title: "Done".into(),
                tasks: vec![],
            },
        ];

        let prompt = snapshot_prompt(&boards);
        assert!(prompt.starts_with("You are a project management assistant."));
        assert!(prompt.contains("Board: To Do\nTasks:\n- Design UI (todo)\n- Ship it (in-progress)"));
        assert!(prompt.contains("Board: Done\nTasks:\n"));
    }

    #[test]
    fn assistant_turns_map_to_model_role() {
        assert_eq!(role_name(ChatRole::User), "user");
        assert_eq!(role_name(ChatRole::Assistant), "model");
    }
}
