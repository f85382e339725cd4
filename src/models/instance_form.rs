use serde::{Deserialize, Serialize};

/// Fields submitted by the add-instance form (web console or CLI flags)
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct InstanceForm {
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub db_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub instance_name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub db: String,
}

/// What the backend should do when the instance name or host already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictAction {
    /// Overwrite the existing entry
    Update,
    /// Leave the existing entry untouched
    Cancel,
}

impl ConflictAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "update" => Some(Self::Update),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Cancel => "cancel",
        }
    }
}
