//! Compiles the steps of a portable pipeline specification into the
//! Kubernetes objects needed to run each step as an isolated pod.
//!
//! Compilation is a pure transformation: nothing here talks to a cluster.
//!
//! ```rust,ignore
//! let spec = Specification::try_from(yaml)?;
//! let compiler = KubeCompiler::new(&spec);
//!
//! let namespace = compiler.namespace();
//! for compiled in compiler.compile_steps() {
//!   // submit compiled.secrets, compiled.config_maps, compiled.pod, compiled.service
//! }
//! ```

mod compiled;
pub mod compiler;
mod error;
mod kube_compiler;
mod spec;

pub use compiled::CompiledStep;
pub use error::*;
pub use kube_compiler::KubeCompiler;
pub use spec::*;

pub type Result<T> = std::result::Result<T, Error>;
