/// Errors produced while interpreting an operator's alias metadata selection.
///
/// These are always caused by bad input, and should be reported back to the operator as a rejected request.
#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The selection named a field that is neither `default` nor part of the catalog.
    #[error("{field:?} is not an available field, please select from: {}", .available.join(", "))]
    InvalidField {
        /// The offending field name.
        field: String,

        /// The fields the operator may add on top of the defaults.
        available: Vec<String>,
    },
}
