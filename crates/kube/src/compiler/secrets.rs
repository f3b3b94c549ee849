use super::{namespace_of, resolve_secret_items, DOCKER_AUTH_SECRET_NAME};
use crate::{Result, Specification, Step, VolumeKind};
use base64::{engine::general_purpose::STANDARD, Engine};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use serde_json::json;
use std::collections::{BTreeMap, HashSet};

/// Materializes a specification secret.
///
/// The uid is both the object name and the only data key, which is what
/// env and volume references rely on.
pub fn to_secret(spec: &Specification, from: &crate::Secret) -> Secret {
  Secret {
    metadata: ObjectMeta {
      name: Some(from.metadata.uid.clone()),
      namespace: namespace_of(&spec.metadata),
      ..Default::default()
    },
    type_: Some("Opaque".to_string()),
    string_data: Some(BTreeMap::from([(
      from.metadata.uid.clone(),
      from.data.clone(),
    )])),
    ..Default::default()
  }
}

/// Materializes every distinct secret the step references, either as an env
/// variable or through a secret volume, in order of first reference.
pub fn to_secrets(spec: &Specification, step: &Step) -> Vec<Secret> {
  let mut referenced: Vec<&crate::Secret> = step
    .secrets
    .iter()
    .filter_map(|secret_var| spec.lookup_secret(&secret_var.name))
    .collect();

  for mount in &step.volumes {
    let Some(volume) = spec.lookup_volume(&mount.name) else {
      continue;
    };
    if let Some(VolumeKind::Secret(secret_volume)) = volume.kind() {
      referenced.extend(
        resolve_secret_items(spec, volume, secret_volume)
          .into_iter()
          .map(|(_, item_ref)| item_ref.secret),
      );
    }
  }

  let mut seen = HashSet::new();
  referenced
    .into_iter()
    .filter(|secret| seen.insert(secret.metadata.uid.as_str()))
    .map(|secret| to_secret(spec, secret))
    .collect()
}

/// Builds the registry credential secret the pods pull images with, if the
/// specification declares any registry credentials.
pub fn to_docker_auth_secret(spec: &Specification) -> Result<Option<Secret>> {
  if spec.docker.auths.is_empty() {
    return Ok(None);
  }

  let auths: serde_json::Map<String, serde_json::Value> = spec
    .docker
    .auths
    .iter()
    .map(|auth| {
      let token = STANDARD.encode(format!("{}:{}", auth.username, auth.password));
      (auth.address.clone(), json!({ "auth": token }))
    })
    .collect();

  let config = serde_json::to_vec(&json!({ "auths": auths }))?;

  Ok(Some(Secret {
    metadata: ObjectMeta {
      name: Some(DOCKER_AUTH_SECRET_NAME.to_string()),
      namespace: namespace_of(&spec.metadata),
      ..Default::default()
    },
    type_: Some("kubernetes.io/dockerconfigjson".to_string()),
    data: Some(BTreeMap::from([(
      ".dockerconfigjson".to_string(),
      ByteString(config),
    )])),
    ..Default::default()
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    DockerAuth, DockerConfig, Metadata, SecretItem, SecretVar, SecretVolume, Volume, VolumeMount,
  };

  fn secret(uid: &str, name: &str) -> crate::Secret {
    crate::Secret {
      metadata: Metadata::new(uid, name),
      data: format!("{}-data", name),
    }
  }

  fn specification() -> Specification {
    Specification {
      metadata: Metadata::new("spec-uid", "pipeline").namespace("ns1"),
      secrets: vec![
        secret("uid-token", "token"),
        secret("uid-cert", "certs-tls-cert"),
      ],
      volumes: vec![Volume {
        metadata: Metadata::new("vol-uid", "certs"),
        secret: Some(SecretVolume {
          name: "tls".to_string(),
          items: vec![
            SecretItem {
              key: "cert".to_string(),
              path: "tls.crt".to_string(),
              mode: None,
            },
            SecretItem {
              key: "key".to_string(),
              path: "tls.key".to_string(),
              mode: None,
            },
          ],
        }),
        ..Default::default()
      }],
      ..Default::default()
    }
  }

  #[astro_run_test::test]
  fn test_to_secret() {
    let spec = specification();
    let secret = to_secret(&spec, &spec.secrets[0]);

    assert_eq!(secret.metadata.name.as_deref(), Some("uid-token"));
    assert_eq!(secret.metadata.namespace.as_deref(), Some("ns1"));
    assert_eq!(secret.type_.as_deref(), Some("Opaque"));

    let data = secret.string_data.unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data.get("uid-token"), Some(&"token-data".to_string()));
  }

  #[astro_run_test::test]
  fn test_to_secrets_dedupes_and_skips_missing() {
    let spec = specification();
    let step = Step {
      metadata: Metadata::new("step-uid", "build"),
      secrets: vec![
        SecretVar {
          name: "token".to_string(),
          env: "TOKEN".to_string(),
        },
        SecretVar {
          name: "token".to_string(),
          env: "TOKEN_AGAIN".to_string(),
        },
        SecretVar {
          name: "missing".to_string(),
          env: "MISSING".to_string(),
        },
      ],
      volumes: vec![VolumeMount {
        name: "certs".to_string(),
        path: "/etc/tls".to_string(),
      }],
      ..Default::default()
    };

    let secrets = to_secrets(&spec, &step);
    let names: Vec<&str> = secrets
      .iter()
      .filter_map(|s| s.metadata.name.as_deref())
      .collect();

    assert_eq!(names, vec!["uid-token", "uid-cert"]);
  }

  #[astro_run_test::test]
  fn test_no_docker_auth_secret() {
    assert!(to_docker_auth_secret(&specification()).unwrap().is_none());
  }

  #[astro_run_test::test]
  fn test_docker_auth_secret() {
    let spec = Specification {
      docker: DockerConfig {
        auths: vec![DockerAuth {
          address: "index.docker.io".to_string(),
          username: "octocat".to_string(),
          password: "correct-horse".to_string(),
        }],
      },
      ..specification()
    };

    let secret = to_docker_auth_secret(&spec).unwrap().unwrap();
    assert_eq!(secret.metadata.name.as_deref(), Some(DOCKER_AUTH_SECRET_NAME));
    assert_eq!(
      secret.type_.as_deref(),
      Some("kubernetes.io/dockerconfigjson")
    );

    let data = secret.data.unwrap();
    let config: serde_json::Value =
      serde_json::from_slice(&data.get(".dockerconfigjson").unwrap().0).unwrap();
    assert_eq!(
      config["auths"]["index.docker.io"]["auth"],
      STANDARD.encode("octocat:correct-horse")
    );
  }
}
