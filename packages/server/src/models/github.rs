use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A repository record proxied from GitHub.
///
/// The fork flag is the only field this service inspects; everything else
/// passes through the flattened map untouched, so clients receive exactly
/// the fields GitHub returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    #[serde(default)]
    pub fork: bool,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
