use super::labels_of;
use crate::Specification;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub fn to_namespace(spec: &Specification) -> Namespace {
  Namespace {
    metadata: ObjectMeta {
      name: Some(spec.metadata.namespace.clone()),
      labels: labels_of(&spec.metadata),
      ..Default::default()
    },
    ..Default::default()
  }
}
