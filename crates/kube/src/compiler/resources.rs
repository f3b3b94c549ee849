use super::{binary_quantity, milli_quantity};
use crate::{ResourceObject, Step};
use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

/// Converts the step resources. A zero or negative value is left out, so an
/// explicit zero cannot be told apart from an unset value.
pub fn to_resources(step: &Step) -> ResourceRequirements {
  let resources = step.resources.unwrap_or_default();

  ResourceRequirements {
    limits: resources.limits.map(to_resource_list),
    requests: resources.requests.map(to_resource_list),
    ..Default::default()
  }
}

fn to_resource_list(from: ResourceObject) -> BTreeMap<String, Quantity> {
  let mut list = BTreeMap::new();
  if from.memory > 0 {
    list.insert("memory".to_string(), binary_quantity(from.memory));
  }
  if from.cpu > 0 {
    list.insert("cpu".to_string(), milli_quantity(from.cpu));
  }
  list
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Resources;

  fn step_with(resources: Option<Resources>) -> Step {
    Step {
      resources,
      ..Default::default()
    }
  }

  #[astro_run_test::test]
  fn test_no_resources() {
    let resources = to_resources(&step_with(None));

    assert!(resources.limits.is_none());
    assert!(resources.requests.is_none());
  }

  #[astro_run_test::test]
  fn test_zero_memory_is_omitted() {
    let resources = to_resources(&step_with(Some(Resources {
      limits: Some(ResourceObject {
        cpu: 500,
        memory: 0,
      }),
      requests: None,
    })));

    let limits = resources.limits.unwrap();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits.get("cpu"), Some(&Quantity("500m".to_string())));
    assert!(!limits.contains_key("memory"));
    assert!(resources.requests.is_none());
  }

  #[astro_run_test::test]
  fn test_limits_and_requests() {
    let resources = to_resources(&step_with(Some(Resources {
      limits: Some(ResourceObject {
        cpu: 2000,
        memory: 1073741824,
      }),
      requests: Some(ResourceObject {
        cpu: 250,
        memory: 268435456,
      }),
    })));

    let limits = resources.limits.unwrap();
    assert_eq!(limits.get("cpu"), Some(&Quantity("2".to_string())));
    assert_eq!(limits.get("memory"), Some(&Quantity("1Gi".to_string())));

    let requests = resources.requests.unwrap();
    assert_eq!(requests.get("cpu"), Some(&Quantity("250m".to_string())));
    assert_eq!(requests.get("memory"), Some(&Quantity("256Mi".to_string())));
  }

  #[astro_run_test::test]
  fn test_negative_values_are_omitted() {
    let resources = to_resources(&step_with(Some(Resources {
      limits: None,
      requests: Some(ResourceObject {
        cpu: -1,
        memory: -1024,
      }),
    })));

    assert!(resources.requests.unwrap().is_empty());
  }
}
