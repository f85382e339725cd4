use serde::{Deserialize, Serialize};

use crate::utils::deserialize_text;

/// A database connection profile as returned by the instance list endpoint.
/// The backend strips the password before listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub environment: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub db_type: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub region: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub cluster_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub instance_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub host: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub port: String,
}

impl InstanceRecord {
    /// Records without a cluster or instance name cannot be addressed and are not listed.
    pub fn is_listable(&self) -> bool {
        !self.cluster_name.is_empty() && !self.instance_name.is_empty()
    }
}
