use solder::{
    BindError, BindOptions, BindSummary, Binder, ContractRef, Lifetime, ServiceCollection,
    TypeDescriptor, TypeUniverse,
};

mod acme {
    pub trait Billing {}
    pub trait Audit {}

    pub struct LedgerService;

    impl Billing for LedgerService {}
    impl Audit for LedgerService {}

    pub struct ReportService;

    pub struct MailService;

    pub struct SessionCache;
}

mod vendor {
    pub struct MetricsSink;
}

#[test]
fn registers_scoped_type_under_first_contract() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::LedgerService>()
                .with_lifetime(Lifetime::Scoped)
                .with_contract(ContractRef::of::<dyn acme::Billing>()),
        )
        .build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(
        summary,
        BindSummary {
            scoped: 1,
            transient: 0,
            singleton: 0,
        }
    );
    let registration = services.iter().next().unwrap();
    assert_eq!(registration.contract.name(), "Billing");
    assert_eq!(registration.implementation.name(), "LedgerService");
    assert_eq!(registration.lifetime, Lifetime::Scoped);
    assert!(!registration.is_self_registration());
}

#[test]
fn self_registers_type_without_contracts() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Singleton),
        )
        .build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(summary.singleton, 1);
    let registration = services.iter().next().unwrap();
    assert!(registration.is_self_registration());
    assert_eq!(registration.contract.name(), "ReportService");
    assert_eq!(registration.lifetime, Lifetime::Singleton);
}

#[test]
fn override_validates_without_changing_selection() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::LedgerService>()
                .with_lifetime(Lifetime::Transient)
                .with_contract(ContractRef::of::<dyn acme::Billing>())
                .with_contract(ContractRef::of::<dyn acme::Audit>())
                .with_override("Audit"),
        )
        .build();

    let mut services = ServiceCollection::new();
    Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    // The override is only a validity check; the first declared contract
    // is still the one registered.
    let registration = services.iter().next().unwrap();
    assert_eq!(registration.contract.name(), "Billing");
}

#[test]
fn unknown_override_aborts_bind() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::LedgerService>()
                .with_lifetime(Lifetime::Scoped)
                .with_contract(ContractRef::of::<dyn acme::Billing>())
                .with_override("Shipping"),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::SessionCache>().with_lifetime(Lifetime::Singleton),
        )
        .build();

    let mut services = ServiceCollection::new();
    let err = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap_err();

    assert!(matches!(
        err,
        BindError::UnknownContract {
            contract: "Shipping",
            ..
        }
    ));
    assert!(err.to_string().contains("Shipping"));
    // Registrations issued before the failing type stay issued; nothing
    // after it is registered.
    assert_eq!(services.len(), 1);
    assert_eq!(
        services.iter().next().unwrap().implementation.name(),
        "ReportService"
    );
}

#[test]
fn buckets_fill_in_fixed_order() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::SessionCache>().with_lifetime(Lifetime::Singleton),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::MailService>().with_lifetime(Lifetime::Transient),
        )
        .build();

    let mut services = ServiceCollection::new();
    Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    let lifetimes: Vec<_> = services
        .iter()
        .map(|registration| registration.lifetime)
        .collect();
    assert_eq!(
        lifetimes,
        vec![Lifetime::Scoped, Lifetime::Transient, Lifetime::Singleton]
    );
}

#[test]
fn skips_types_outside_project() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .add_descriptor(
            TypeDescriptor::of::<vendor::MetricsSink>().with_lifetime(Lifetime::Scoped),
        )
        .build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(summary.total(), 1);
    assert_eq!(
        services.iter().next().unwrap().implementation.name(),
        "ReportService"
    );
}

#[test]
fn skips_untagged_and_non_concrete_types() {
    let universe = TypeUniverse::builder()
        .add_descriptor(TypeDescriptor::of::<acme::MailService>())
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>()
                .with_lifetime(Lifetime::Scoped)
                .non_concrete(),
        )
        .build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(summary.total(), 0);
    assert!(services.is_empty());
}

#[test]
fn empty_universe_binds_nothing() {
    let universe = TypeUniverse::builder().build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(summary, BindSummary::default());
    assert!(services.is_empty());
}

#[test]
fn missing_project_key_fails_before_scanning() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .build();

    let mut services = ServiceCollection::new();
    let err = Binder::new(BindOptions::default())
        .bind(&universe, &mut services)
        .unwrap_err();

    assert!(matches!(err, BindError::MissingProjectKey));
    assert!(services.is_empty());
}

#[test]
fn duplicate_type_is_rejected() {
    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Singleton),
        )
        .build();

    let mut services = ServiceCollection::new();
    let err = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap_err();

    assert!(matches!(err, BindError::DuplicateType { .. }));
    assert!(services.is_empty());
}

#[test]
fn summary_counts_registrations_per_lifetime() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("solder=debug")
        .try_init();

    let universe = TypeUniverse::builder()
        .add_descriptor(
            TypeDescriptor::of::<acme::LedgerService>()
                .with_lifetime(Lifetime::Scoped)
                .with_contract(ContractRef::of::<dyn acme::Billing>()),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::ReportService>().with_lifetime(Lifetime::Scoped),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::MailService>().with_lifetime(Lifetime::Transient),
        )
        .add_descriptor(
            TypeDescriptor::of::<acme::SessionCache>().with_lifetime(Lifetime::Singleton),
        )
        .build();

    let mut services = ServiceCollection::new();
    let summary = Binder::new(BindOptions::new("acme"))
        .bind(&universe, &mut services)
        .unwrap();

    assert_eq!(
        summary,
        BindSummary {
            scoped: 2,
            transient: 1,
            singleton: 1,
        }
    );
    assert_eq!(summary.total(), services.len());
}
