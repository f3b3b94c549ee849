use super::EMPTY_DIR_ROOT;
use crate::{SecretItem, SecretVolume, Specification, Step, Volume, VolumeKind};
use k8s_openapi::api::core::v1::{
  HostPathVolumeSource, KeyToPath, SecretVolumeSource, Volume as KubeVolume,
  VolumeMount as KubeVolumeMount,
};

/// How one item of a secret volume resolves against the specification.
///
/// Secret volume items are materialized as standalone secrets, found by a
/// name derived from the volume, while the pod refers to them by uid.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretVolumeItemRef<'a> {
  /// `{volume name}-{secret name}-{item key}`
  pub lookup_key: String,
  /// Uid of the resolved secret, used as object name and data key.
  pub reference_id: &'a str,
  pub secret: &'a crate::Secret,
}

/// Resolves the items of a secret volume, dropping the ones whose secret is
/// not part of the specification.
pub fn resolve_secret_items<'a>(
  spec: &'a Specification,
  volume: &Volume,
  secret_volume: &'a SecretVolume,
) -> Vec<(&'a SecretItem, SecretVolumeItemRef<'a>)> {
  secret_volume
    .items
    .iter()
    .filter_map(|item| {
      let lookup_key = format!(
        "{}-{}-{}",
        volume.metadata.name, secret_volume.name, item.key
      );
      match spec.lookup_secret(&lookup_key) {
        Some(secret) => Some((
          item,
          SecretVolumeItemRef {
            lookup_key,
            reference_id: &secret.metadata.uid,
            secret,
          },
        )),
        None => {
          log::debug!(
            "Secret volume `{}` item `{}` has no secret `{}`, skipping",
            volume.metadata.name,
            item.key,
            lookup_key
          );
          None
        }
      }
    })
    .collect()
}

/// Empty dir volumes cannot be shared between the pods of one pipeline run,
/// so they are emulated with a host directory under
/// `/tmp/drone/{namespace}/{uid}`. Nothing here removes that directory.
pub fn to_host_path_volume(spec: &Specification, volume: &Volume) -> Option<KubeVolume> {
  let path = match volume.kind()? {
    VolumeKind::EmptyDir(_) => empty_dir_path(&spec.metadata.namespace, &volume.metadata.uid),
    VolumeKind::HostPath(host_path) => host_path.path.clone(),
    VolumeKind::Secret(_) => return None,
  };

  Some(KubeVolume {
    name: volume.metadata.uid.clone(),
    host_path: Some(HostPathVolumeSource {
      path,
      type_: Some("DirectoryOrCreate".to_string()),
    }),
    ..Default::default()
  })
}

/// Joins namespace and uid under [`EMPTY_DIR_ROOT`]. Each of them is cleaned
/// on its own, so neither a leading `/` nor `..` can leave its segment.
fn empty_dir_path(namespace: &str, uid: &str) -> String {
  let mut path = EMPTY_DIR_ROOT.to_string();
  for element in clean_segments(namespace)
    .into_iter()
    .chain(clean_segments(uid))
  {
    path.push('/');
    path.push_str(element);
  }
  path
}

/// The elements of a slash separated path with `.` dropped and `..`
/// resolved, never climbing above the first element.
fn clean_segments(path: &str) -> Vec<&str> {
  let mut elements = vec![];
  for element in path.split('/') {
    match element {
      "" | "." => {}
      ".." => {
        elements.pop();
      }
      element => elements.push(element),
    }
  }
  elements
}

/// One volume per resolvable item, named `{volume uid}-{item key}`.
pub fn to_secret_volumes(
  spec: &Specification,
  volume: &Volume,
  secret_volume: &SecretVolume,
) -> Vec<KubeVolume> {
  resolve_secret_items(spec, volume, secret_volume)
    .into_iter()
    .map(|(item, item_ref)| KubeVolume {
      name: format!("{}-{}", volume.metadata.uid, item.key),
      secret: Some(SecretVolumeSource {
        secret_name: Some(item_ref.reference_id.to_string()),
        items: Some(vec![KeyToPath {
          key: item_ref.reference_id.to_string(),
          path: item.path.clone(),
          mode: item.mode,
        }]),
        ..Default::default()
      }),
      ..Default::default()
    })
    .collect()
}

pub fn to_volumes(spec: &Specification, step: &Step) -> Vec<KubeVolume> {
  let mut to = vec![];
  for mount in &step.volumes {
    let Some(volume) = spec.lookup_volume(&mount.name) else {
      log::debug!(
        "Step `{}` references unknown volume `{}`, skipping",
        step.metadata.name,
        mount.name
      );
      continue;
    };

    match volume.kind() {
      Some(VolumeKind::EmptyDir(_)) | Some(VolumeKind::HostPath(_)) => {
        to.extend(to_host_path_volume(spec, volume));
      }
      Some(VolumeKind::Secret(secret_volume)) => {
        to.extend(to_secret_volumes(spec, volume, secret_volume));
      }
      None => {
        log::debug!(
          "Volume `{}` has no recognized source, skipping",
          volume.metadata.name
        );
      }
    }
  }
  to
}

/// Mounts pair up with [`to_volumes`] by name. Secret volume items are
/// mounted one by one at `{path}/{item path}`.
pub fn to_volume_mounts(spec: &Specification, step: &Step) -> Vec<KubeVolumeMount> {
  let mut to = vec![];
  for mount in &step.volumes {
    let Some(volume) = spec.lookup_volume(&mount.name) else {
      continue;
    };

    match volume.kind() {
      Some(VolumeKind::Secret(secret_volume)) => {
        for (item, _) in resolve_secret_items(spec, volume, secret_volume) {
          to.push(KubeVolumeMount {
            name: format!("{}-{}", volume.metadata.uid, item.key),
            mount_path: format!("{}/{}", mount.path, item.path),
            sub_path: Some(item.path.clone()),
            ..Default::default()
          });
        }
      }
      Some(_) => to.push(KubeVolumeMount {
        name: volume.metadata.uid.clone(),
        mount_path: mount.path.clone(),
        ..Default::default()
      }),
      None => {}
    }
  }
  to
}
