use std::sync::Arc;
use wodi_domain::config::WodiConfig;
use wodi_domain::value::{GameTitle, MapFileName};
use wodi_kernel::{Kernel, KernelError};
use wodi_logger::{DiagnosticSink, MemorySink, Severity};
use wodi_registry::{ContainerKey, Lifetime, ServiceRegistry};

fn config_with_target(target: Option<&str>) -> WodiConfig {
    let mut cfg = WodiConfig::default();
    cfg.registry.target_key = target.map(str::to_owned);
    cfg
}

#[test]
fn build_without_config_fails() {
    let err = Kernel::builder().build().unwrap_err();
    assert!(matches!(err, KernelError::Validation { .. }));
}

#[test]
fn invalid_target_key_is_rejected() {
    let err = Kernel::builder().config(config_with_target(Some("a\nb"))).build().unwrap_err();

    assert!(matches!(err, KernelError::Registry { .. }));
    assert!(err.to_string().contains("registry.target_key"));
}

#[test]
fn default_target_gets_a_sink() {
    let kernel = Kernel::builder().config(WodiConfig::default()).build().unwrap();

    assert!(kernel.registry.target_key().is_default());
    assert!(kernel.registry.has_create_method::<dyn DiagnosticSink>());
}

#[test]
fn configured_target_inherits_the_default_sink() {
    let kernel = Kernel::builder().config(config_with_target(Some("Project"))).build().unwrap();

    assert_eq!(kernel.registry.target_key().as_str(), "Project");
    assert_eq!(kernel.registry.container_keys().len(), 2);
    assert!(kernel.registry.has_create_method::<dyn DiagnosticSink>());

    let default = kernel.registry.scope(ContainerKey::DEFAULT);
    assert!(default.has_create_method::<dyn DiagnosticSink>());
}

#[test]
fn existing_registry_keeps_its_sink() {
    let registry = ServiceRegistry::new();
    let sink = Arc::new(MemorySink::new());
    let shared = Arc::clone(&sink);
    registry.register::<dyn DiagnosticSink>(
        move || Arc::clone(&shared) as Arc<dyn DiagnosticSink>,
        Lifetime::PerContainer,
    );

    let kernel =
        Kernel::builder().config(WodiConfig::default()).registry(registry).build().unwrap();
    kernel.diagnostics().info("hello");

    assert_eq!(sink.len(), 1);
}

#[test]
fn advisory_notices_reach_the_sink() {
    let registry = ServiceRegistry::new();
    let sink = Arc::new(MemorySink::new());
    let shared = Arc::clone(&sink);
    registry.register::<dyn DiagnosticSink>(
        move || Arc::clone(&shared) as Arc<dyn DiagnosticSink>,
        Lifetime::PerContainer,
    );
    let kernel =
        Kernel::builder().config(WodiConfig::default()).registry(registry).build().unwrap();

    let ascii = MapFileName::new("Dungeon01.mps").unwrap();
    assert!(!kernel.report_advisory(&ascii));
    assert!(sink.is_empty());

    let wide = MapFileName::new("ダンジョン.mps").unwrap();
    assert!(kernel.report_advisory(&wide));

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Warning);
    assert!(records[0].message.contains("ダンジョン.mps"));

    let title = GameTitle::new("Sample").unwrap();
    assert!(!kernel.report_advisory(&title));
}

#[test]
fn clones_share_the_registry() {
    let kernel = Kernel::builder().config(WodiConfig::default()).build().unwrap();
    let clone = kernel.clone();

    clone.registry.change_target_key(ContainerKey::try_from("Other").unwrap());
    assert_eq!(kernel.registry.target_key().as_str(), "Other");
}
