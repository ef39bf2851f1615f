/// Type alias for boxed errors that can be sent across threads.
///
/// Used for operations that can fail at the host's boundary, such as
/// parsing bind options from a configuration file.
pub type StdError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can abort a bind pass.
///
/// Every variant is a programmer or configuration mistake that should fail
/// loudly at startup. There are no retries and no partial-success mode:
/// registrations issued before the failing type stay issued.
#[derive(Debug)]
pub enum BindError {
    /// The project key was empty when the binder's options were accessed.
    MissingProjectKey,
    /// A contract override named a contract the type does not declare.
    UnknownContract {
        /// Fully-qualified name of the implementation carrying the override.
        implementation: &'static str,
        /// The contract name the override requested.
        contract: &'static str,
    },
    /// The same type appeared more than once in the scoped universe.
    DuplicateType {
        /// Fully-qualified name of the conflicting type.
        full_name: &'static str,
    },
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::MissingProjectKey => write!(f, "Project key is not set"),
            BindError::UnknownContract {
                implementation,
                contract,
            } => write!(
                f,
                "Unable to register {implementation} with contract {contract}"
            ),
            BindError::DuplicateType { full_name } => {
                write!(f, "Type {full_name} is registered more than once")
            }
        }
    }
}

impl std::error::Error for BindError {}
