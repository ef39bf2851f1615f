use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    BindError, Lifetime, Registrar, StdError, TypeDescriptor, TypeUniverse, classify,
    resolve_contract,
};

/// Options for a bind pass.
///
/// The project key scopes the type universe: only types whose module path
/// and fully-qualified name contain the key are considered. An empty key
/// is a fatal configuration error, raised before any type is inspected.
///
/// # Examples
///
/// ```rust
/// use solder::BindOptions;
///
/// let options = BindOptions::parse(r#"{"project_key": "acme"}"#).unwrap();
/// assert_eq!(options.project_key, "acme");
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BindOptions {
    #[serde(default)]
    pub project_key: String,
}

impl BindOptions {
    pub fn new(project_key: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
        }
    }

    pub fn parse(text: impl AsRef<str>) -> Result<Self, StdError> {
        Ok(serde_json::from_str(text.as_ref())?)
    }

    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, StdError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(text)
    }
}

/// Counts of registrations issued by a successful bind, per lifetime
/// bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindSummary {
    pub scoped: usize,
    pub transient: usize,
    pub singleton: usize,
}

impl BindSummary {
    pub fn total(&self) -> usize {
        self.scoped + self.transient + self.singleton
    }
}

/// Drives one bind pass: scopes the universe, classifies the candidates,
/// resolves each type's contract, and issues registrations to the
/// container.
///
/// The pass is synchronous and run-to-completion. Buckets are filled in
/// the fixed order Scoped, Transient, Singleton; the order carries no
/// semantic guarantee. A resolution failure aborts the remaining loop and
/// the whole bind — already-issued registrations stay issued, there is no
/// rollback.
///
/// # Examples
///
/// ```rust
/// use solder::{
///     BindOptions, Binder, ContractRef, Lifetime, ServiceCollection, TypeDescriptor,
///     TypeUniverse,
/// };
///
/// trait Mailer {}
///
/// struct SmtpMailer;
///
/// impl Mailer for SmtpMailer {}
///
/// fn main() {
///     let universe = TypeUniverse::builder()
///         .add_descriptor(
///             TypeDescriptor::named::<SmtpMailer>("acme::SmtpMailer")
///                 .with_lifetime(Lifetime::Singleton)
///                 .with_contract(ContractRef::of::<dyn Mailer>()),
///         )
///         .build();
///
///     let mut services = ServiceCollection::new();
///     let summary = Binder::new(BindOptions::new("acme"))
///         .bind(&universe, &mut services)
///         .unwrap();
///
///     assert_eq!(summary.singleton, 1);
///     let registration = services.iter().next().unwrap();
///     assert_eq!(registration.contract.name(), "Mailer");
///     assert_eq!(registration.implementation.name(), "SmtpMailer");
/// }
/// ```
pub struct Binder {
    options: BindOptions,
}

impl Binder {
    pub fn new(options: BindOptions) -> Self {
        Self { options }
    }

    /// The binder's options. Fails if the project key is empty.
    pub fn options(&self) -> Result<&BindOptions, BindError> {
        if self.options.project_key.is_empty() {
            return Err(BindError::MissingProjectKey);
        }
        Ok(&self.options)
    }

    /// Runs one bind pass against the given universe and registrar.
    pub fn bind<R>(
        &self,
        universe: &TypeUniverse,
        registrar: &mut R,
    ) -> Result<BindSummary, BindError>
    where
        R: Registrar,
    {
        let project_key = self.options()?.project_key.as_str();
        let span = tracing::info_span!("bind", project_key);
        let _enter = span.enter();
        let types = universe.belonging_to(project_key);
        let mut seen = HashSet::new();
        for descriptor in &types {
            if !seen.insert(descriptor.type_id()) {
                return Err(BindError::DuplicateType {
                    full_name: descriptor.full_name(),
                });
            }
        }
        let buckets = classify(types.iter().copied());
        let summary = BindSummary {
            scoped: fill(&buckets.scoped, Lifetime::Scoped, registrar)?,
            transient: fill(&buckets.transient, Lifetime::Transient, registrar)?,
            singleton: fill(&buckets.singleton, Lifetime::Singleton, registrar)?,
        };
        tracing::info!(
            scoped = summary.scoped,
            transient = summary.transient,
            singleton = summary.singleton,
            "Services bound"
        );
        Ok(summary)
    }
}

fn fill<R>(
    bucket: &[&TypeDescriptor],
    lifetime: Lifetime,
    registrar: &mut R,
) -> Result<usize, BindError>
where
    R: Registrar,
{
    for descriptor in bucket {
        let contract = resolve_contract(descriptor)?;
        match lifetime {
            Lifetime::Scoped => registrar.register_scoped(contract, descriptor),
            Lifetime::Transient => registrar.register_transient(contract, descriptor),
            Lifetime::Singleton => registrar.register_singleton(contract, descriptor),
        }
        tracing::debug!(
            implementation = descriptor.full_name(),
            contract = contract.map(|contract| contract.path()),
            ?lifetime,
            "Service registered"
        );
    }
    Ok(bucket.len())
}
