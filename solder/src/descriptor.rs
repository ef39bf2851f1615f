use std::any::{TypeId, type_name};

/// How long a container-resolved instance is retained and shared.
///
/// A registrable type declares exactly one lifetime tag; a type declaring
/// none is invisible to the binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// One instance per logical request or unit of work.
    Scoped,
    /// One instance for the lifetime of the process.
    Singleton,
    /// A fresh instance per resolution.
    Transient,
}

/// Identity of a contract (abstract interface) an implementation may be
/// registered under.
///
/// # Examples
///
/// ```rust
/// use solder::ContractRef;
///
/// trait Mailer {}
///
/// let contract = ContractRef::of::<dyn Mailer>();
/// assert_eq!(contract.name(), "Mailer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRef {
    name: &'static str,
    path: &'static str,
}

impl ContractRef {
    /// Creates a contract identity from a type, typically a trait object.
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        let path = type_name::<T>();
        Self {
            name: short_name(path),
            path,
        }
    }

    /// Creates a contract identity from explicit names, for tables
    /// assembled out of generated metadata.
    pub fn named(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// The contract's short name, used for override matching.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The contract's fully-qualified path.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// An opaque handle to a registrable type.
///
/// Descriptors are the unit the type universe stores and the binder
/// consumes: the type's identity and names, whether it is concrete, its
/// lifetime tag, the ordered sequence of contracts it declares, and an
/// optional contract-override name. Once assembled into a universe a
/// descriptor is never mutated.
///
/// # Examples
///
/// ```rust
/// use solder::{ContractRef, Lifetime, TypeDescriptor};
///
/// trait Mailer {}
///
/// struct SmtpMailer;
///
/// impl Mailer for SmtpMailer {}
///
/// let descriptor = TypeDescriptor::named::<SmtpMailer>("acme::SmtpMailer")
///     .with_lifetime(Lifetime::Singleton)
///     .with_contract(ContractRef::of::<dyn Mailer>());
///
/// assert_eq!(descriptor.name(), "SmtpMailer");
/// assert_eq!(descriptor.module(), "acme");
/// assert_eq!(descriptor.lifetime(), Some(Lifetime::Singleton));
/// ```
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    type_id: TypeId,
    name: &'static str,
    full_name: &'static str,
    module: &'static str,
    concrete: bool,
    lifetime: Option<Lifetime>,
    contracts: Vec<ContractRef>,
    contract_override: Option<&'static str>,
}

impl TypeDescriptor {
    /// Creates a descriptor for a type, deriving its names from the type's
    /// Rust path.
    pub fn of<T>() -> Self
    where
        T: 'static,
    {
        Self::named::<T>(type_name::<T>())
    }

    /// Creates a descriptor with an explicit fully-qualified name, for
    /// hosts whose logical module layout differs from the Rust path.
    pub fn named<T>(full_name: &'static str) -> Self
    where
        T: 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            name: short_name(full_name),
            full_name,
            module: module_path_of(full_name),
            concrete: true,
            lifetime: None,
            contracts: Vec::new(),
            contract_override: None,
        }
    }

    /// Declares the type's lifetime tag.
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Appends a declared contract. Declaration order is significant:
    /// the resolver infers the first declared contract.
    pub fn with_contract(mut self, contract: ContractRef) -> Self {
        self.contracts.push(contract);
        self
    }

    /// Pins the contract name the resolver must validate against.
    pub fn with_override(mut self, contract_name: &'static str) -> Self {
        self.contract_override = Some(contract_name);
        self
    }

    /// Marks the descriptor as non-concrete, excluding it from every
    /// lifetime bucket.
    pub fn non_concrete(mut self) -> Self {
        self.concrete = false;
        self
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// The originating module path: the fully-qualified name without the
    /// trailing type segment.
    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn is_concrete(&self) -> bool {
        self.concrete
    }

    pub fn lifetime(&self) -> Option<Lifetime> {
        self.lifetime
    }

    pub fn contracts(&self) -> &[ContractRef] {
        &self.contracts
    }

    pub fn contract_override(&self) -> Option<&'static str> {
        self.contract_override
    }
}

fn short_name(path: &'static str) -> &'static str {
    let base = &path[..path.find('<').unwrap_or(path.len())];
    match base.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path.strip_prefix("dyn ").unwrap_or(path),
    }
}

fn module_path_of(full_name: &'static str) -> &'static str {
    let base = &full_name[..full_name.find('<').unwrap_or(full_name.len())];
    match base.rfind("::") {
        Some(index) => &full_name[..index],
        None => "",
    }
}
