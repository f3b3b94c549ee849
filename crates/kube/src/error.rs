#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("Failed to parse specification: {0}")]
  SpecificationConfigError(String),

  #[error("Step `{step}` references {kind} `{name}`, but it is not defined")]
  DanglingReference {
    step: String,
    kind: ReferenceKind,
    name: String,
  },

  #[error("Step `{0}` is defined more than once")]
  DuplicateStep(String),

  #[error("Failed to serialize resource: {0}")]
  SerializationError(String),
}

/// The kind of specification entity a step refers to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
  Secret,
  File,
  Volume,
}

impl std::fmt::Display for ReferenceKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReferenceKind::Secret => write!(f, "secret"),
      ReferenceKind::File => write!(f, "file"),
      ReferenceKind::Volume => write!(f, "volume"),
    }
  }
}

impl Error {
  pub fn specification_config_error<T: ToString>(message: T) -> Self {
    Self::SpecificationConfigError(message.to_string())
  }

  pub fn dangling_reference(
    step: impl Into<String>,
    kind: ReferenceKind,
    name: impl Into<String>,
  ) -> Self {
    Self::DanglingReference {
      step: step.into(),
      kind,
      name: name.into(),
    }
  }

  pub fn duplicate_step<T: ToString>(name: T) -> Self {
    Self::DuplicateStep(name.to_string())
  }

  pub fn serialization_error<T: ToString>(message: T) -> Self {
    Self::SerializationError(message.to_string())
  }
}

impl From<serde_yaml::Error> for Error {
  fn from(err: serde_yaml::Error) -> Self {
    Self::serialization_error(err)
  }
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Self::serialization_error(err)
  }
}

// implement Eq and PartialEq for Error so that we can compare errors in tests
impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::SpecificationConfigError(a), Self::SpecificationConfigError(b)) => a == b,
      (
        Self::DanglingReference {
          step: a_step,
          kind: a_kind,
          name: a_name,
        },
        Self::DanglingReference {
          step: b_step,
          kind: b_kind,
          name: b_name,
        },
      ) => a_step == b_step && a_kind == b_kind && a_name == b_name,
      (Self::DuplicateStep(a), Self::DuplicateStep(b)) => a == b,
      (Self::SerializationError(a), Self::SerializationError(b)) => a == b,
      _ => false,
    }
  }
}
