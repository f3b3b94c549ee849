use super::{
  automount_service_account_token, labels_of, step_namespace, to_config_mounts,
  to_config_volumes, to_env, to_ports, to_pull_policy, to_resources, to_volume_mounts,
  to_volumes, DOCKER_AUTH_SECRET_NAME,
};
use crate::{Specification, Step};
use k8s_openapi::api::core::v1::{
  Container, LocalObjectReference, Pod, PodSpec, SecurityContext,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Assembles the pod running a single step.
///
/// Steps run to completion and are never restarted in place, retrying is up
/// to whoever submits the pod.
pub fn to_pod(spec: &Specification, step: &Step) -> Pod {
  let mut volumes = to_volumes(spec, step);
  volumes.extend(to_config_volumes(spec, step));

  let mut mounts = to_volume_mounts(spec, step);
  mounts.extend(to_config_mounts(spec, step));

  let pull_secrets = if spec.docker.auths.is_empty() {
    None
  } else {
    Some(vec![LocalObjectReference {
      name: DOCKER_AUTH_SECRET_NAME.to_string(),
    }])
  };

  let container = Container {
    name: step.metadata.uid.clone(),
    image: Some(step.image.clone()),
    image_pull_policy: Some(to_pull_policy(step.pull_policy).to_string()),
    command: non_empty(step.command.clone()),
    args: non_empty(step.args.clone()),
    working_dir: step.working_dir.clone(),
    security_context: Some(SecurityContext {
      privileged: Some(step.privileged),
      ..Default::default()
    }),
    env: Some(to_env(spec, step)),
    volume_mounts: non_empty(mounts),
    ports: to_ports(step),
    resources: Some(to_resources(step)),
    ..Default::default()
  };

  Pod {
    metadata: ObjectMeta {
      name: Some(step.metadata.uid.clone()),
      namespace: step_namespace(spec, step),
      labels: labels_of(&step.metadata),
      ..Default::default()
    },
    spec: Some(PodSpec {
      automount_service_account_token: Some(automount_service_account_token(step)),
      restart_policy: Some("Never".to_string()),
      containers: vec![container],
      image_pull_secrets: pull_secrets,
      volumes: non_empty(volumes),
      ..Default::default()
    }),
    ..Default::default()
  }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
  if items.is_empty() {
    None
  } else {
    Some(items)
  }
}
