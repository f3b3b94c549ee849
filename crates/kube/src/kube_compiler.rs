use crate::compiler::{
  to_config_maps, to_docker_auth_secret, to_namespace, to_pod, to_secrets, to_service,
};
use crate::{CompiledStep, Result, Specification, Step};
use k8s_openapi::api::core::v1::{Namespace, Secret};

/// Compiles the steps of a specification into Kubernetes objects.
///
/// Holds nothing but a shared borrow of the specification, so a compiler can
/// be used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct KubeCompiler<'a> {
  spec: &'a Specification,
}

impl<'a> KubeCompiler<'a> {
  pub fn new(spec: &'a Specification) -> Self {
    KubeCompiler { spec }
  }

  /// The namespace every step of the specification runs in.
  pub fn namespace(&self) -> Namespace {
    to_namespace(self.spec)
  }

  /// The registry credential secret pods pull with, if there are any credentials.
  pub fn docker_auth_secret(&self) -> Result<Option<Secret>> {
    to_docker_auth_secret(self.spec)
  }

  pub fn compile_step(&self, step: &Step) -> CompiledStep {
    log::trace!("Compiling step `{}`", step.metadata.name);

    let compiled = CompiledStep {
      pod: to_pod(self.spec, step),
      service: to_service(self.spec, step),
      secrets: to_secrets(self.spec, step),
      config_maps: to_config_maps(self.spec, step),
    };

    log::trace!(
      "Compiled step `{}` into pod `{}` with {} secrets and {} config maps",
      step.metadata.name,
      step.metadata.uid,
      compiled.secrets.len(),
      compiled.config_maps.len()
    );

    compiled
  }

  pub fn compile_steps(&self) -> Vec<CompiledStep> {
    self
      .spec
      .steps
      .iter()
      .map(|step| self.compile_step(step))
      .collect()
  }
}
