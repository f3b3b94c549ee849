//! Prints the manifests of every step of a specification.
//!
//! cargo run --example compile -- path/to/spec.yml

use astro_run_kube::{KubeCompiler, Specification};

const SPECIFICATION: &str = r#"
metadata:
  uid: pipeline-1
  name: hello-world
  namespace: drone-hello-world
steps:
  - metadata:
      uid: step-1
      name: build_and_test
      labels:
        io.drone.step.name: build_and_test
    image: rust:1.75
    command: [/bin/sh, -c]
    args: [cargo test]
    working_dir: /drone/src
    volumes:
      - name: workspace
        path: /drone/src
    ports:
      - port: 8080
volumes:
  - metadata: { uid: volume-1, name: workspace }
    empty_dir: {}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  astro_run_logger::init_logger_with_level(log::Level::Warn);

  let content = match std::env::args().nth(1) {
    Some(path) => std::fs::read_to_string(path)?,
    None => SPECIFICATION.to_string(),
  };

  let spec = Specification::try_from(content)?;
  if let Err(err) = spec.validate() {
    log::warn!("{}", err);
  }

  let compiler = KubeCompiler::new(&spec);

  let mut documents = vec![serde_yaml::to_string(&compiler.namespace())?];
  if let Some(secret) = compiler.docker_auth_secret()? {
    documents.push(serde_yaml::to_string(&secret)?);
  }
  for compiled in compiler.compile_steps() {
    documents.extend(compiled.manifests()?);
  }

  println!("{}", documents.join("---\n"));

  Ok(())
}
