/// Turns a step name into something usable as a service name.
///
/// Only underscores are replaced, the result is not otherwise validated.
pub fn to_dns(name: &str) -> String {
  name.replace('_', "-")
}
