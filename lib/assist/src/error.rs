use crate::validator::QueryForm;

/// A reason why a query is rejected by the validator.
///
/// The [`Display`](std::fmt::Display) output is the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    Empty,
    #[error("Query must start with SELECT, CONSTRUCT, ASK, or DESCRIBE")]
    MissingQueryForm,
    #[error("{form} query must include a WHERE clause")]
    MissingWhere { form: QueryForm },
    #[error("Unbalanced braces: {open} opening and {close} closing braces")]
    UnbalancedBraces { open: usize, close: usize },
    #[error("Unclosed double quotes in query")]
    UnclosedDoubleQuotes,
    #[error("Unclosed single quotes in query")]
    UnclosedSingleQuotes,
}

/// A non-fatal advisory attached to a valid query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum QueryWarning {
    #[error("DESCRIBE query does not have a WHERE clause")]
    DescribeWithoutWhere,
    #[error("Query does not have a LIMIT clause, which might return large result sets")]
    MissingLimit,
}

/// An error returned when a session is not ready to be sent to an endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("SPARQL endpoint cannot be empty")]
    MissingEndpoint,
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
}
