//! The state of one query editor.
//!
//! An [`EditSession`] is a value. Applying an [`Edit`] consumes the session and returns the next
//! one, with the derived state (line count, live validation) recomputed from the new query text.

use crate::config::SessionConfig;
use crate::editor::{add_limit_with, add_prefix, add_skeleton, line_count};
use crate::error::{ExecutionError, QueryWarning};
use crate::formatter::format;
use crate::validator::{validate, validate_live, ValidationResult};

/// A change requested by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Replaces the whole query text, e.g. after typing.
    Replace(String),
    SetEndpoint(String),
    Format,
    AddPrefix { name: String, namespace: String },
    AddLimit,
    AddSkeleton,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    query: String,
    endpoint: String,
    line_count: usize,
    validation: Option<ValidationResult>,
    config: SessionConfig,
}

impl EditSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_query(String::new(), String::new(), config)
    }

    fn with_query(query: String, endpoint: String, config: SessionConfig) -> Self {
        Self {
            line_count: line_count(&query),
            validation: validate_live(&query, config.live_validation_threshold),
            query,
            endpoint,
            config,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// The result of the last live validation, if the query was long enough to be checked.
    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Applies `edit` and returns the resulting session.
    #[must_use]
    pub fn apply(self, edit: Edit) -> Self {
        tracing::debug!(?edit, "applying edit");
        let Self {
            query,
            endpoint,
            config,
            ..
        } = self;
        match edit {
            Edit::Replace(query) => Self::with_query(query, endpoint, config),
            Edit::SetEndpoint(endpoint) => Self::with_query(query, endpoint, config),
            Edit::Format => Self::with_query(format(&query), endpoint, config),
            Edit::AddPrefix { name, namespace } => {
                Self::with_query(add_prefix(&query, &name, &namespace), endpoint, config)
            }
            Edit::AddLimit => Self::with_query(
                add_limit_with(&query, config.default_limit),
                endpoint,
                config,
            ),
            Edit::AddSkeleton => Self::with_query(add_skeleton(&query), endpoint, config),
        }
    }

    /// Checks that the session can be sent to its endpoint.
    ///
    /// Both an endpoint and a valid query are required. The query is always validated here, even
    /// when it is too short for live validation.
    pub fn prepare_execution(&self) -> Result<ExecutionRequest<'_>, ExecutionError> {
        if self.endpoint.trim().is_empty() {
            return Err(ExecutionError::MissingEndpoint);
        }
        let warnings = validate(&self.query).into_result()?;
        Ok(ExecutionRequest {
            query: &self.query,
            endpoint: self.endpoint.trim(),
            warnings,
        })
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// A query that passed the checks of [`EditSession::prepare_execution`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionRequest<'a> {
    pub query: &'a str,
    pub endpoint: &'a str,
    pub warnings: Vec<QueryWarning>,
}
