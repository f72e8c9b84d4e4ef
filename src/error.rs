use crate::solver::graph::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fatal, malformed-problem conditions.
///
/// Infeasibility signals (domain wipeout, search exhaustion) are *not*
/// errors: they are ordinary `None` results handled by backtracking. Only a
/// problem definition that can never be searched correctly is an `Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variable {0} has an empty initial domain")]
    EmptyDomain(VariableId),

    #[error("neighbour set of variable {variable} references unknown variable {neighbour}")]
    UnknownNeighbour {
        variable: VariableId,
        neighbour: VariableId,
    },

    #[error("reference to unknown variable {0}")]
    UnknownVariable(VariableId),

    #[error("assignment binds variable {0} to a value outside its current domain")]
    ValueOutsideDomain(VariableId),
}
