pub mod config;
pub mod logging;

pub mod backend_url;
pub mod environment;
pub mod error;
pub mod export;
pub mod host;
pub mod published;
pub mod resolver;

pub use backend_url::BackendUrl;
pub use config::BackendConfig;
pub use environment::Environment;
pub use host::{HostContext, HostSource};
pub use resolver::{EnvironmentResolver, ResolvedBackend, Selection};
