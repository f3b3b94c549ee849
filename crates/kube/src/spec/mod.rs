//! The portable pipeline specification consumed by the compiler.
//!
//! Every referenceable entity carries a [`Metadata`] block: `name` is what
//! steps use to refer to it, `uid` is what the produced cluster objects are
//! named after.

mod parser;
mod step;
mod volume;

pub use step::*;
pub use volume::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Metadata {
  pub uid: String,
  pub name: String,
  #[serde(default)]
  pub namespace: String,
  #[serde(default)]
  pub labels: BTreeMap<String, String>,
}

impl Metadata {
  pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      uid: uid.into(),
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
    self.namespace = namespace.into();
    self
  }

  pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.labels.insert(key.into(), value.into());
    self
  }
}

/// Registry credentials used to pull step images.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DockerAuth {
  pub address: String,
  pub username: String,
  pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DockerConfig {
  #[serde(default)]
  pub auths: Vec<DockerAuth>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Secret {
  pub metadata: Metadata,
  #[serde(default)]
  pub data: String,
}

/// Configuration data mounted into a step as a single file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct File {
  pub metadata: Metadata,
  #[serde(default)]
  pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Specification {
  pub metadata: Metadata,
  #[serde(default)]
  pub docker: DockerConfig,
  #[serde(default)]
  pub steps: Vec<Step>,
  #[serde(default)]
  pub secrets: Vec<Secret>,
  #[serde(default)]
  pub files: Vec<File>,
  #[serde(default)]
  pub volumes: Vec<Volume>,
}

impl Specification {
  pub fn lookup_step(&self, name: &str) -> Option<&Step> {
    self.steps.iter().find(|step| step.metadata.name == name)
  }

  pub fn lookup_secret(&self, name: &str) -> Option<&Secret> {
    self
      .secrets
      .iter()
      .find(|secret| secret.metadata.name == name)
  }

  pub fn lookup_file(&self, name: &str) -> Option<&File> {
    self.files.iter().find(|file| file.metadata.name == name)
  }

  pub fn lookup_volume(&self, name: &str) -> Option<&Volume> {
    self
      .volumes
      .iter()
      .find(|volume| volume.metadata.name == name)
  }
}
