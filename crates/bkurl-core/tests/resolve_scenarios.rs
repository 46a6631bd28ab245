//! Integration test: load a config file from disk and resolve the usual
//! host scenarios through the public API.

use bkurl_core::config::{self, PLACEHOLDER_PRODUCTION_URL};
use bkurl_core::error::ResolveError;
use bkurl_core::export::{self, Format};
use bkurl_core::{Environment, EnvironmentResolver, HostContext, Selection};
use tempfile::tempdir;

const CONFIG: &str = r#"
local = "http://localhost:3000"
production = "https://mineka-backend.onrender.com"
"#;

fn resolver_from_file(contents: &str) -> EnvironmentResolver {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    EnvironmentResolver::new(config::load_from(&path).unwrap())
}

#[test]
fn scenarios_from_config_file() {
    let r = resolver_from_file(CONFIG);
    assert_eq!(r.resolve("localhost").as_str(), "http://localhost:3000");
    assert_eq!(r.resolve("127.0.0.1").as_str(), "http://localhost:3000");
    assert_eq!(
        r.resolve("example.com").as_str(),
        "https://mineka-backend.onrender.com"
    );
    assert_eq!(r.resolve("").as_str(), "https://mineka-backend.onrender.com");
}

#[test]
fn page_location_drives_resolution() {
    let r = resolver_from_file(CONFIG);
    let ctx = HostContext::from_page_url("http://localhost:5500/booking.html").unwrap();
    let resolved = r.resolve_context(&ctx).unwrap();
    assert_eq!(resolved.environment, Environment::Local);
    assert_eq!(
        export::render(&resolved, Format::Js).unwrap(),
        "window.BACKEND_URL = \"http://localhost:3000\";"
    );

    let ctx = HostContext::from_page_url("https://www.example.com/").unwrap();
    let resolved = r.resolve_context(&ctx).unwrap();
    assert_eq!(resolved.as_str(), "https://mineka-backend.onrender.com");
    assert_eq!(resolved.selection, Selection::Host("www.example.com".to_string()));
}

#[test]
fn explicit_environment_in_file() {
    let contents = format!("{CONFIG}environment = \"local\"\n");
    let r = resolver_from_file(&contents);
    let resolved = r
        .resolve_context(&HostContext::host("example.com"))
        .unwrap();
    assert_eq!(resolved.as_str(), "http://localhost:3000");
    assert_eq!(resolved.selection, Selection::Explicit);
}

#[test]
fn missing_host_context_is_reported() {
    let r = resolver_from_file(CONFIG);
    assert_eq!(
        r.resolve_context(&HostContext::Unavailable),
        Err(ResolveError::NoHostContext)
    );
}

#[test]
fn fresh_install_uses_placeholder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bkurl").join("config.toml");
    let cfg = config::load_or_init_at(&path).unwrap();
    assert!(path.exists());
    let r = EnvironmentResolver::new(cfg);
    assert_eq!(r.resolve("example.com").as_str(), PLACEHOLDER_PRODUCTION_URL);
    assert!(!r.config().warnings().is_empty());
}
