use crate::Result;
use k8s_openapi::api::core::v1::{ConfigMap, Pod, Secret, Service};

/// Everything the cluster needs to run one step.
///
/// Secrets and config maps must exist before the pod is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStep {
  pub pod: Pod,
  /// Only present when the step declares ports
  pub service: Option<Service>,
  pub secrets: Vec<Secret>,
  pub config_maps: Vec<ConfigMap>,
}

impl CompiledStep {
  /// Renders the objects as YAML documents in submission order.
  pub fn manifests(&self) -> Result<Vec<String>> {
    let mut manifests = vec![];
    for secret in &self.secrets {
      manifests.push(serde_yaml::to_string(secret)?);
    }
    for config_map in &self.config_maps {
      manifests.push(serde_yaml::to_string(config_map)?);
    }
    manifests.push(serde_yaml::to_string(&self.pod)?);
    if let Some(service) = &self.service {
      manifests.push(serde_yaml::to_string(service)?);
    }

    Ok(manifests)
  }
}
