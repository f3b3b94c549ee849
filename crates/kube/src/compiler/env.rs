use super::{AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV, NODE_NAME_ENV};
use crate::{Specification, Step};
use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, ObjectFieldSelector, SecretKeySelector};

/// Builds the container environment.
///
/// Declared variables come first, then the node name reference, then one
/// entry per resolvable step secret. Secret references are optional so a
/// secret missing at schedule time does not block the pod.
pub fn to_env(spec: &Specification, step: &Step) -> Vec<EnvVar> {
  let mut to: Vec<EnvVar> = step
    .envs
    .iter()
    .filter(|(key, _)| key.as_str() != AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV)
    .map(|(key, value)| EnvVar {
      name: key.clone(),
      value: Some(value.clone()),
      value_from: None,
    })
    .collect();

  to.push(EnvVar {
    name: NODE_NAME_ENV.to_string(),
    value: None,
    value_from: Some(EnvVarSource {
      field_ref: Some(ObjectFieldSelector {
        field_path: "spec.nodeName".to_string(),
        ..Default::default()
      }),
      ..Default::default()
    }),
  });

  for secret_var in &step.secrets {
    let Some(secret) = spec.lookup_secret(&secret_var.name) else {
      log::debug!(
        "Step `{}` references unknown secret `{}`, skipping env {}",
        step.metadata.name,
        secret_var.name,
        secret_var.env
      );
      continue;
    };

    to.push(EnvVar {
      name: secret_var.env.clone(),
      value: None,
      value_from: Some(EnvVarSource {
        secret_key_ref: Some(SecretKeySelector {
          name: secret.metadata.uid.clone(),
          key: secret.metadata.uid.clone(),
          optional: Some(true),
        }),
        ..Default::default()
      }),
    });
  }

  to
}
