//! Heuristic structural checks for SPARQL query text.
//!
//! The validator does not parse the query. It looks for keywords with
//! case-insensitive substring search and counts delimiters, which is enough to
//! catch the usual mistakes made while typing a query by hand.

use crate::error::{QueryError, QueryWarning};
use std::fmt::{Display, Formatter};

/// The form of a SPARQL query, as guessed from its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryForm {
    Select,
    Construct,
    Ask,
    Describe,
}

impl QueryForm {
    /// All forms, in detection priority order.
    pub const ALL: [QueryForm; 4] = [
        QueryForm::Select,
        QueryForm::Construct,
        QueryForm::Ask,
        QueryForm::Describe,
    ];

    /// The keyword introducing this form.
    pub fn keyword(self) -> &'static str {
        match self {
            QueryForm::Select => "SELECT",
            QueryForm::Construct => "CONSTRUCT",
            QueryForm::Ask => "ASK",
            QueryForm::Describe => "DESCRIBE",
        }
    }

    /// Returns the first form in [`QueryForm::ALL`] whose keyword appears anywhere in `query`.
    ///
    /// The keyword does not need to be the first token, nor even a whole word.
    pub fn detect(query: &str) -> Option<Self> {
        Self::detect_upper(&query.to_uppercase())
    }

    /// Same as [`QueryForm::detect`] on text that is already uppercased.
    pub(crate) fn detect_upper(upper: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|form| upper.contains(form.keyword()))
    }

    /// Whether a query of this form is rejected when it has no `WHERE` clause.
    pub fn requires_where(self) -> bool {
        !matches!(self, QueryForm::Describe)
    }
}

impl Display for QueryForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The verdict of [`validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    /// The query passed every check. Warnings are advisory only.
    Valid { warnings: Vec<QueryWarning> },
    /// The query failed the first check reported by `error`.
    Invalid { error: QueryError },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { error } => Some(error),
        }
    }

    /// The message shown to the user for an invalid query.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// The warnings of a valid query. Empty for an invalid one.
    pub fn warnings(&self) -> &[QueryWarning] {
        match self {
            ValidationResult::Valid { warnings } => warnings,
            ValidationResult::Invalid { .. } => &[],
        }
    }

    /// Converts the verdict into a [`Result`], keeping the warnings on success.
    pub fn into_result(self) -> Result<Vec<QueryWarning>, QueryError> {
        match self {
            ValidationResult::Valid { warnings } => Ok(warnings),
            ValidationResult::Invalid { error } => Err(error),
        }
    }
}

impl From<QueryError> for ValidationResult {
    fn from(error: QueryError) -> Self {
        ValidationResult::Invalid { error }
    }
}

/// Checks `query` and reports the first failure, or the advisory warnings if every check passes.
///
/// The checks run in this order: emptiness, query form, `WHERE` clause, brace balance, double
/// quote balance and single quote balance.
pub fn validate(query: &str) -> ValidationResult {
    let result = match check(query) {
        Ok(warnings) => ValidationResult::Valid { warnings },
        Err(error) => error.into(),
    };
    tracing::debug!(?result, "validated query");
    result
}

/// Validates `query` only once it is longer than `threshold` characters.
///
/// This is the check run while the user is still typing, where short fragments would only produce
/// noise.
pub fn validate_live(query: &str, threshold: usize) -> Option<ValidationResult> {
    (query.chars().count() > threshold).then(|| validate(query))
}

fn check(query: &str) -> Result<Vec<QueryWarning>, QueryError> {
    if query.trim().is_empty() {
        return Err(QueryError::Empty);
    }

    let upper = query.to_uppercase();
    let form = QueryForm::detect_upper(&upper).ok_or(QueryError::MissingQueryForm)?;

    let mut warnings = Vec::new();
    if !upper.contains("WHERE") {
        if form.requires_where() {
            return Err(QueryError::MissingWhere { form });
        }
        warnings.push(QueryWarning::DescribeWithoutWhere);
    }

    let open = query.matches('{').count();
    let close = query.matches('}').count();
    if open != close {
        return Err(QueryError::UnbalancedBraces { open, close });
    }

    if query.matches('"').count() % 2 != 0 {
        return Err(QueryError::UnclosedDoubleQuotes);
    }
    if query.matches('\'').count() % 2 != 0 {
        return Err(QueryError::UnclosedSingleQuotes);
    }

    if !upper.contains("LIMIT") {
        warnings.push(QueryWarning::MissingLimit);
    }
    Ok(warnings)
}
