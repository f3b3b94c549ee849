use super::Metadata;
use serde::{Deserialize, Serialize};

/// Scratch space shared by the steps of one pipeline run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyDirVolume {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPathVolume {
  pub path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretItem {
  pub key: String,
  pub path: String,
  pub mode: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretVolume {
  pub name: String,
  #[serde(default)]
  pub items: Vec<SecretItem>,
}

/// A volume declared at the specification level. At most one source is
/// expected to be set; a volume with none of them is ignored by the compiler.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Volume {
  pub metadata: Metadata,
  pub empty_dir: Option<EmptyDirVolume>,
  pub host_path: Option<HostPathVolume>,
  pub secret: Option<SecretVolume>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind<'a> {
  EmptyDir(&'a EmptyDirVolume),
  HostPath(&'a HostPathVolume),
  Secret(&'a SecretVolume),
}

impl Volume {
  pub fn kind(&self) -> Option<VolumeKind<'_>> {
    if let Some(empty_dir) = &self.empty_dir {
      Some(VolumeKind::EmptyDir(empty_dir))
    } else if let Some(host_path) = &self.host_path {
      Some(VolumeKind::HostPath(host_path))
    } else {
      self.secret.as_ref().map(VolumeKind::Secret)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[astro_run_test::test]
  fn test_volume_kind() {
    let yaml = r#"
- metadata: { uid: a, name: workspace }
  empty_dir: {}
- metadata: { uid: b, name: docker }
  host_path:
    path: /var/run/docker.sock
- metadata: { uid: c, name: certs }
  secret:
    name: tls
    items:
      - { key: cert, path: tls.crt, mode: 256 }
- metadata: { uid: d, name: unknown }
"#;
    let volumes: Vec<Volume> = serde_yaml::from_str(yaml).unwrap();

    assert!(matches!(volumes[0].kind(), Some(VolumeKind::EmptyDir(_))));
    assert!(matches!(
      volumes[1].kind(),
      Some(VolumeKind::HostPath(HostPathVolume { path })) if path == "/var/run/docker.sock"
    ));
    match volumes[2].kind() {
      Some(VolumeKind::Secret(secret)) => {
        assert_eq!(secret.name, "tls");
        assert_eq!(secret.items[0].mode, Some(256));
      }
      kind => panic!("Expected secret volume, got {:?}", kind),
    }
    assert!(volumes[3].kind().is_none());
  }

  #[astro_run_test::test]
  fn test_empty_dir_takes_precedence() {
    let volume = Volume {
      metadata: Metadata::new("uid", "mixed"),
      empty_dir: Some(EmptyDirVolume::default()),
      host_path: Some(HostPathVolume {
        path: "/data".to_string(),
      }),
      secret: None,
    };

    assert!(matches!(volume.kind(), Some(VolumeKind::EmptyDir(_))));
  }
}
