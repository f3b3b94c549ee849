use super::{step_namespace, to_dns, STEP_NAME_LABEL};
use crate::{Specification, Step};
use k8s_openapi::api::core::v1::{ContainerPort, Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::collections::BTreeMap;

/// Container ports carry no host port; host ports only matter to the service.
pub fn to_ports(step: &Step) -> Option<Vec<ContainerPort>> {
  if step.ports.is_empty() {
    return None;
  }

  Some(
    step
      .ports
      .iter()
      .map(|port| ContainerPort {
        container_port: port.port,
        ..Default::default()
      })
      .collect(),
  )
}

/// Builds the cluster-internal service of a step, if it declares any ports.
///
/// The `host` of a port is the port the service forwards to, falling back to
/// the container port when unset.
pub fn to_service(spec: &Specification, step: &Step) -> Option<Service> {
  if step.ports.is_empty() {
    return None;
  }

  let ports = step
    .ports
    .iter()
    .map(|port| {
      let target = if port.host == 0 { port.port } else { port.host };
      ServicePort {
        name: Some(port.port.to_string()),
        port: port.port,
        target_port: Some(IntOrString::Int(target)),
        ..Default::default()
      }
    })
    .collect();

  Some(Service {
    metadata: ObjectMeta {
      name: Some(to_dns(&step.metadata.name)),
      namespace: step_namespace(spec, step),
      ..Default::default()
    },
    spec: Some(ServiceSpec {
      type_: Some("ClusterIP".to_string()),
      selector: Some(BTreeMap::from([(
        STEP_NAME_LABEL.to_string(),
        step.metadata.name.clone(),
      )])),
      ports: Some(ports),
      ..Default::default()
    }),
    ..Default::default()
  })
}
