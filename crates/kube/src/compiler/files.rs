use super::namespace_of;
use crate::{Specification, Step};
use k8s_openapi::api::core::v1::{
  ConfigMap, ConfigMapVolumeSource, KeyToPath, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::{BTreeMap, HashSet};

/// Materializes a specification file as a ConfigMap keyed by its uid.
pub fn to_config_map(spec: &Specification, from: &crate::File) -> ConfigMap {
  ConfigMap {
    metadata: ObjectMeta {
      name: Some(from.metadata.uid.clone()),
      namespace: namespace_of(&spec.metadata),
      ..Default::default()
    },
    data: Some(BTreeMap::from([(
      from.metadata.uid.clone(),
      from.data.clone(),
    )])),
    ..Default::default()
  }
}

pub fn to_config_maps(spec: &Specification, step: &Step) -> Vec<ConfigMap> {
  let mut seen = HashSet::new();
  step
    .files
    .iter()
    .filter_map(|mount| spec.lookup_file(&mount.name))
    .filter(|file| seen.insert(file.metadata.uid.as_str()))
    .map(|file| to_config_map(spec, file))
    .collect()
}

/// The ConfigMap projects a single key named after the base name of the
/// mount path, and [`to_config_mounts`] mounts it on the parent directory.
/// The two only place the file correctly together.
pub fn to_config_volumes(spec: &Specification, step: &Step) -> Vec<Volume> {
  let mut to = vec![];
  for mount in &step.files {
    let Some(file) = spec.lookup_file(&mount.name) else {
      log::debug!(
        "Step `{}` references unknown file `{}`, skipping",
        step.metadata.name,
        mount.name
      );
      continue;
    };

    to.push(Volume {
      name: file.metadata.uid.clone(),
      config_map: Some(ConfigMapVolumeSource {
        name: file.metadata.uid.clone(),
        optional: Some(false),
        items: Some(vec![KeyToPath {
          key: file.metadata.uid.clone(),
          path: base(&mount.path),
          mode: mount.mode,
        }]),
        ..Default::default()
      }),
      ..Default::default()
    });
  }
  to
}

pub fn to_config_mounts(spec: &Specification, step: &Step) -> Vec<VolumeMount> {
  step
    .files
    .iter()
    .filter_map(|mount| {
      spec.lookup_file(&mount.name).map(|file| VolumeMount {
        name: file.metadata.uid.clone(),
        mount_path: dir(&mount.path),
        ..Default::default()
      })
    })
    .collect()
}

/// Last element of a slash separated path, trailing slashes ignored.
fn base(path: &str) -> String {
  if path.is_empty() {
    return ".".to_string();
  }

  match path.trim_end_matches('/').rsplit('/').next() {
    Some(last) if !last.is_empty() => last.to_string(),
    _ => "/".to_string(),
  }
}

/// Everything but the last element of a slash separated path.
fn dir(path: &str) -> String {
  match path.rsplit_once('/') {
    Some((parent, _)) if parent.trim_end_matches('/').is_empty() => "/".to_string(),
    Some((parent, _)) => parent.trim_end_matches('/').to_string(),
    None => ".".to_string(),
  }
}
