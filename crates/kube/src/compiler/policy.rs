use super::AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV;
use crate::{PullPolicy, Step};

pub fn to_pull_policy(policy: PullPolicy) -> &'static str {
  match policy {
    PullPolicy::Always => "Always",
    PullPolicy::Never => "Never",
    PullPolicy::IfNotExists | PullPolicy::Default => "IfNotPresent",
  }
}

/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and the matching false
/// spellings, nothing else.
pub fn parse_bool(value: &str) -> Option<bool> {
  match value {
    "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
    "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
    _ => None,
  }
}

/// Resolves whether the pod mounts its service account token.
///
/// The typed step option wins, then the reserved environment variable.
/// Anything missing or unparsable means `false`.
pub fn automount_service_account_token(step: &Step) -> bool {
  if let Some(automount) = step.automount_service_account_token {
    return automount;
  }

  match step.envs.get(AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV) {
    Some(value) => parse_bool(value).unwrap_or_else(|| {
      log::warn!(
        "Step `{}` has an invalid {} value `{}`, defaulting to false",
        step.metadata.name,
        AUTOMOUNT_SERVICE_ACCOUNT_TOKEN_ENV,
        value
      );
      false
    }),
    None => false,
  }
}
