use super::Metadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PullPolicy {
  Always,
  Never,
  #[serde(alias = "if-not-exists")]
  IfNotExists,
  /// Also used for any value the parser does not recognize.
  #[default]
  #[serde(other)]
  Default,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Port {
  pub port: i32,
  /// Port the service forwards to, `0` means the container port.
  #[serde(default)]
  pub host: i32,
}

/// CPU is expressed in millicores, memory in bytes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceObject {
  #[serde(default)]
  pub cpu: i64,
  #[serde(default)]
  pub memory: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resources {
  pub limits: Option<ResourceObject>,
  pub requests: Option<ResourceObject>,
}

/// A specification secret exposed to the step as an environment variable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretVar {
  pub name: String,
  pub env: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileMount {
  pub name: String,
  pub path: String,
  pub mode: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
  pub name: String,
  pub path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Step {
  pub metadata: Metadata,
  pub image: String,
  #[serde(default)]
  pub command: Vec<String>,
  #[serde(default)]
  pub args: Vec<String>,
  pub working_dir: Option<String>,
  #[serde(default)]
  pub pull_policy: PullPolicy,
  #[serde(default)]
  pub privileged: bool,
  #[serde(default)]
  pub envs: BTreeMap<String, String>,
  #[serde(default)]
  pub ports: Vec<Port>,
  pub resources: Option<Resources>,
  #[serde(default)]
  pub secrets: Vec<SecretVar>,
  #[serde(default)]
  pub files: Vec<FileMount>,
  #[serde(default)]
  pub volumes: Vec<VolumeMount>,
  /// Takes precedence over the `PLUGIN_AUTOMOUNTSERVICEACCOUNTTOKEN`
  /// environment variable when set.
  pub automount_service_account_token: Option<bool>,
}
