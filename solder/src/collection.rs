use crate::{ContractRef, Lifetime, TypeDescriptor};

/// Identity of one side of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceKey {
    name: &'static str,
    path: &'static str,
}

impl ServiceKey {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl From<&ContractRef> for ServiceKey {
    fn from(contract: &ContractRef) -> Self {
        Self {
            name: contract.name(),
            path: contract.path(),
        }
    }
}

impl From<&TypeDescriptor> for ServiceKey {
    fn from(descriptor: &TypeDescriptor) -> Self {
        Self {
            name: descriptor.name(),
            path: descriptor.full_name(),
        }
    }
}

/// One registration issued to the container: the contract the service is
/// exposed as, the implementation behind it, and the lifetime. For a
/// self-registration the contract key equals the implementation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistration {
    pub contract: ServiceKey,
    pub implementation: ServiceKey,
    pub lifetime: Lifetime,
}

impl ServiceRegistration {
    pub fn is_self_registration(&self) -> bool {
        self.contract == self.implementation
    }
}

/// The container's registration boundary: one primitive per lifetime.
///
/// The binder is the sole writer during a bind pass and never reads back.
/// Passing `None` as the contract requests a self-registration.
pub trait Registrar {
    fn register_scoped(&mut self, contract: Option<&ContractRef>, implementation: &TypeDescriptor);

    fn register_transient(
        &mut self,
        contract: Option<&ContractRef>,
        implementation: &TypeDescriptor,
    );

    fn register_singleton(
        &mut self,
        contract: Option<&ContractRef>,
        implementation: &TypeDescriptor,
    );
}

/// An ordered, in-memory collection of service registrations.
///
/// Backs tests and simple hosts; real containers implement [`Registrar`]
/// directly.
///
/// # Examples
///
/// ```rust
/// use solder::{ContractRef, Lifetime, ServiceCollection, TypeDescriptor};
///
/// trait Mailer {}
///
/// struct SmtpMailer;
///
/// impl Mailer for SmtpMailer {}
///
/// let contract = ContractRef::of::<dyn Mailer>();
/// let implementation = TypeDescriptor::named::<SmtpMailer>("acme::SmtpMailer");
///
/// let mut services = ServiceCollection::new();
/// services.add_or_replace(&contract, &implementation, Lifetime::Singleton);
/// services.add_or_replace(&contract, &implementation, Lifetime::Singleton);
///
/// assert_eq!(services.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    registrations: Vec<ServiceRegistration>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRegistration> {
        self.registrations.iter()
    }

    /// All registrations in issue order.
    pub fn registrations(&self) -> &[ServiceRegistration] {
        &self.registrations
    }

    /// Looks up the registration for a contract by its fully-qualified
    /// path.
    pub fn find(&self, contract_path: &str) -> Option<&ServiceRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.contract.path() == contract_path)
    }

    pub fn contains_contract(&self, contract_path: &str) -> bool {
        self.find(contract_path).is_some()
    }

    /// Issues one registration. `None` as the contract self-registers the
    /// implementation.
    pub fn add(
        &mut self,
        contract: Option<&ContractRef>,
        implementation: &TypeDescriptor,
        lifetime: Lifetime,
    ) {
        let implementation = ServiceKey::from(implementation);
        let contract = match contract {
            Some(contract) => ServiceKey::from(contract),
            None => implementation.clone(),
        };
        self.registrations.push(ServiceRegistration {
            contract,
            implementation,
            lifetime,
        });
    }

    /// Removes any existing registration for the exact contract and
    /// inserts a fresh one. Calling twice with identical arguments leaves
    /// the collection in the same end state as calling once.
    pub fn add_or_replace(
        &mut self,
        contract: &ContractRef,
        implementation: &TypeDescriptor,
        lifetime: Lifetime,
    ) {
        let key = ServiceKey::from(contract);
        if let Some(index) = self
            .registrations
            .iter()
            .position(|registration| registration.contract == key)
        {
            self.registrations.remove(index);
        }
        self.registrations.push(ServiceRegistration {
            contract: key,
            implementation: ServiceKey::from(implementation),
            lifetime,
        });
    }
}

impl Registrar for ServiceCollection {
    fn register_scoped(&mut self, contract: Option<&ContractRef>, implementation: &TypeDescriptor) {
        self.add(contract, implementation, Lifetime::Scoped);
    }

    fn register_transient(
        &mut self,
        contract: Option<&ContractRef>,
        implementation: &TypeDescriptor,
    ) {
        self.add(contract, implementation, Lifetime::Transient);
    }

    fn register_singleton(
        &mut self,
        contract: Option<&ContractRef>,
        implementation: &TypeDescriptor,
    ) {
        self.add(contract, implementation, Lifetime::Singleton);
    }
}
