use serde::{Deserialize, Serialize};

/// Destructive actions that go through the confirmation page before a request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationAction {
    DeleteInstance,
    DeleteMemo,
}

impl ConfirmationAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "delete-instance" => Some(Self::DeleteInstance),
            "delete-memo" => Some(Self::DeleteMemo),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::DeleteInstance => "delete-instance",
            Self::DeleteMemo => "delete-memo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DeleteInstance => "Delete instance",
            Self::DeleteMemo => "Delete memo",
        }
    }

    /// Question shown on the confirmation page and the CLI prompt
    pub fn prompt(&self, id: &str) -> String {
        match self {
            Self::DeleteInstance => format!("Really delete instance '{}'?", id),
            Self::DeleteMemo => format!("Really delete memo {}?", id),
        }
    }
}
