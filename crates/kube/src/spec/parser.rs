use super::Specification;
use crate::{Error, ReferenceKind, Result};
use std::collections::HashSet;

impl Specification {
  /// Checks every name a step refers to against the specification.
  ///
  /// The compiler itself skips dangling references, this is for callers that
  /// would rather reject the specification up front.
  pub fn validate(&self) -> Result<()> {
    let mut step_names = HashSet::new();

    for step in &self.steps {
      let step_name = &step.metadata.name;
      if !step_names.insert(step_name.as_str()) {
        return Err(Error::duplicate_step(step_name));
      }

      for secret in &step.secrets {
        if self.lookup_secret(&secret.name).is_none() {
          return Err(Error::dangling_reference(
            step_name,
            ReferenceKind::Secret,
            &secret.name,
          ));
        }
      }

      for file in &step.files {
        if self.lookup_file(&file.name).is_none() {
          return Err(Error::dangling_reference(
            step_name,
            ReferenceKind::File,
            &file.name,
          ));
        }
      }

      for mount in &step.volumes {
        if self.lookup_volume(&mount.name).is_none() {
          return Err(Error::dangling_reference(
            step_name,
            ReferenceKind::Volume,
            &mount.name,
          ));
        }
      }
    }

    Ok(())
  }
}

impl TryFrom<&str> for Specification {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self> {
    serde_yaml::from_str(value).map_err(Error::specification_config_error)
  }
}

impl TryFrom<String> for Specification {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    Self::try_from(value.as_str())
  }
}
