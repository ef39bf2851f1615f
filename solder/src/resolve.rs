use crate::{BindError, ContractRef, TypeDescriptor};

/// Determines the contract a type is registered under.
///
/// An override, when present, must name one of the type's declared
/// contracts; a miss aborts the whole bind with
/// [`BindError::UnknownContract`]. The override only proves the contract
/// exists — selection still follows declaration order, so the first
/// declared contract is what gets registered. `None` means the type
/// self-registers.
pub fn resolve_contract(descriptor: &TypeDescriptor) -> Result<Option<&ContractRef>, BindError> {
    if let Some(requested) = descriptor.contract_override() {
        let declared = descriptor
            .contracts()
            .iter()
            .any(|contract| contract.name() == requested);
        if !declared {
            return Err(BindError::UnknownContract {
                implementation: descriptor.full_name(),
                contract: requested,
            });
        }
    }
    Ok(descriptor.contracts().first())
}
