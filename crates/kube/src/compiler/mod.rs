//! Translation units from specification entities to Kubernetes objects.
//!
//! Each function reads only its arguments and returns freshly built objects.
//! References that do not resolve against the specification are skipped.

mod env;
mod files;
mod naming;
mod namespace;
mod pod;
mod policy;
mod ports;
mod quantity;
mod resources;
mod secrets;
mod volumes;

pub use env::to_env;
pub use files::{to_config_map, to_config_maps, to_config_mounts, to_config_volumes};
pub use naming::to_dns;
pub use namespace::to_namespace;
pub use pod::to_pod;
pub use policy::{automount_service_account_token, parse_bool, to_pull_policy};
pub use ports::{to_ports, to_service};
pub use quantity::{binary_quantity, milli_quantity};
pub use resources::to_resources;
pub use secrets::{to_docker_auth_secret, to_secret, to_secrets};
pub use volumes::{
  resolve_secret_items, to_host_path_volume, to_secret_volumes, to_volume_mounts, to_volumes,
  SecretVolumeItemRef,
};

/// Step environment variable controlling the pod's service account token.
pub const AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV: &str = "PLUGIN_AUTOMOUNTSERVICEACCOUNTTOKEN";

/// Environment variable resolved by the cluster to the scheduled node name.
pub const NODE_NAME_ENV: &str = "KUBERNETES_NODE";

/// Name of the registry credential secret referenced by every pod.
pub const DOCKER_AUTH_SECRET_NAME: &str = "docker-auth-config";

/// Label key services use to select the pod of a step.
pub const STEP_NAME_LABEL: &str = "io.drone.step.name";

/// Host directory under which empty dir volumes are emulated.
pub const EMPTY_DIR_ROOT: &str = "/tmp/drone";

/// Object namespace for the given metadata, unset when empty.
fn namespace_of(metadata: &crate::Metadata) -> Option<String> {
  Some(metadata.namespace.clone()).filter(|namespace| !namespace.is_empty())
}

/// Steps run in their own namespace, or the specification's when unset.
fn step_namespace(spec: &crate::Specification, step: &crate::Step) -> Option<String> {
  namespace_of(&step.metadata).or_else(|| namespace_of(&spec.metadata))
}

/// Labels for object metadata, unset when empty.
fn labels_of(
  metadata: &crate::Metadata,
) -> Option<std::collections::BTreeMap<String, String>> {
  Some(metadata.labels.clone()).filter(|labels| !labels.is_empty())
}
