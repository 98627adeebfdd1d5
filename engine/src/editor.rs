//! Wire types for the editor API.
//!
//! The in-page editor is a separate frontend; these are the JSON shapes it
//! exchanges with the `editor_api` server binary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    pub path: String,
    pub code: String,
}

/// Full replacement source text for the game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveCodeRequest {
    pub code: String,
}

/// Save outcome, reported in-band: `success` plus an error message when the
/// save was rejected or failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveCodeResponse {
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    pub action_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunStat {
    pub label: String,
    pub value: String,
}

/// One frame of a headless run: the raw state for tooling plus a small set
/// of human-readable stats for the editor sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub frame: usize,
    pub state: serde_json::Value,
    pub stats: Vec<RunStat>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreResponse {
    pub best: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportScoreRequest {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportScoreResponse {
    pub best: u32,
    pub updated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_request_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&StepRequest {
            action_id: "jump".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"actionId":"jump"}"#);
    }

    #[test]
    fn save_code_response_round_trips() {
        let failure = SaveCodeResponse {
            success: false,
            error: Some("empty source".to_string()),
        };
        let json = serde_json::to_string(&failure).unwrap();
        let back: SaveCodeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);

        let ok: SaveCodeResponse = serde_json::from_str(r#"{"success":true,"error":null}"#).unwrap();
        assert!(ok.success);
        assert!(ok.error.is_none());
    }
}
