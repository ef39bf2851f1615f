use std::mem::take;

use crate::TypeDescriptor;

/// Trait for types that can describe themselves to the type universe.
///
/// Implemented by hand or through `#[derive(Injectable)]` with the
/// `macros` feature enabled.
pub trait Discoverable: 'static {
    /// Returns the descriptor the type registers itself under.
    fn descriptor() -> TypeDescriptor;
}

/// The statically assembled table of registrable types.
///
/// The universe replaces runtime type discovery: every module contributes
/// its types explicitly through the builder, and the result is an
/// immutable snapshot for the duration of a bind pass.
///
/// # Examples
///
/// ```rust
/// use solder::{Lifetime, TypeDescriptor, TypeUniverse};
///
/// struct LedgerService;
///
/// let universe = TypeUniverse::builder()
///     .add_descriptor(
///         TypeDescriptor::named::<LedgerService>("acme::billing::LedgerService")
///             .with_lifetime(Lifetime::Scoped),
///     )
///     .build();
///
/// assert_eq!(universe.len(), 1);
/// assert_eq!(universe.belonging_to("acme").len(), 1);
/// assert!(universe.belonging_to("vendor").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TypeUniverse {
    types: Vec<TypeDescriptor>,
}

impl TypeUniverse {
    /// Creates a new builder for assembling a universe.
    pub fn builder() -> TypeUniverseBuilder {
        TypeUniverseBuilder { types: Vec::new() }
    }

    /// All descriptors in insertion order.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns, in insertion order, the descriptors belonging to the given
    /// project: those whose originating module path contains the key and
    /// whose fully-qualified name contains the key.
    pub fn belonging_to(&self, project_key: &str) -> Vec<&TypeDescriptor> {
        self.types
            .iter()
            .filter(|descriptor| {
                descriptor.module().contains(project_key)
                    && descriptor.full_name().contains(project_key)
            })
            .collect()
    }
}

/// Builder for assembling a [`TypeUniverse`].
#[derive(Debug, Default)]
pub struct TypeUniverseBuilder {
    types: Vec<TypeDescriptor>,
}

impl TypeUniverseBuilder {
    /// Adds a single discoverable type.
    pub fn add<T>(&mut self) -> &mut Self
    where
        T: Discoverable,
    {
        self.types.push(T::descriptor());
        self
    }

    /// Adds a descriptor assembled by hand.
    pub fn add_descriptor(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.push(descriptor);
        self
    }

    /// Adds the output of a module's initialization routine.
    pub fn add_module<I>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        self.types.extend(types);
        self
    }

    /// Builds the universe, draining the builder.
    pub fn build(&mut self) -> TypeUniverse {
        TypeUniverse {
            types: take(&mut self.types),
        }
    }
}
