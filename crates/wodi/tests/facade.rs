use wodi::domain::config::WodiConfig;
use wodi::domain::list::ChoiceCaseList;
use wodi::kernel::KernelError;
use wodi::logger::DiagnosticSink;

#[test]
fn init_switches_to_the_configured_container() {
    let mut cfg = WodiConfig::default();
    cfg.registry.target_key = Some("Project".to_owned());

    let kernel = wodi::init(cfg).unwrap();
    assert_eq!(kernel.registry.target_key().as_str(), "Project");
    assert!(kernel.registry.has_create_method::<dyn DiagnosticSink>());
}

#[test]
fn init_rejects_an_empty_target_key() {
    let mut cfg = WodiConfig::default();
    cfg.registry.target_key = Some(String::new());

    assert!(matches!(wodi::init(cfg), Err(KernelError::Registry { .. })));
}

#[test]
fn reexports_reach_the_foundations() {
    let cases = ChoiceCaseList::new().unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(ChoiceCaseList::capacity(), wodi::collection::Capacity::bounded(1, 10));
}
