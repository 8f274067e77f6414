//! Helpers for composing SPARQL query text.
//!
//! The crate works on plain strings and never parses SPARQL into an algebra. It offers:
//! - [`validate`]: heuristic structural checks returning a [`ValidationResult`],
//! - [`format`]: one clause per line, indented by brace depth,
//! - [`editor`]: insertion of `PREFIX` declarations, a `LIMIT` clause or a query skeleton,
//! - [`EditSession`]: the state of one editor, replaced wholesale after every [`Edit`].
//!
//! ```
//! use sparql_assist::{format, validate, EditSession, Edit};
//!
//! let result = validate("SELECT ?s WHERE { ?s ?p ?o }");
//! assert!(result.is_valid());
//! assert_eq!(result.warnings().len(), 1);
//!
//! assert_eq!(format("SELECT ?s WHERE ?o"), "SELECT ?s\nWHERE ?o");
//!
//! let session = EditSession::default().apply(Edit::AddSkeleton);
//! assert!(session.query().ends_with("LIMIT 100"));
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod formatter;
pub mod session;
pub mod validator;
pub mod vocab;

pub use config::SessionConfig;
pub use editor::{add_limit, add_prefix, add_skeleton, line_count};
pub use error::{ExecutionError, QueryError, QueryWarning};
pub use formatter::format;
pub use session::{Edit, EditSession, ExecutionRequest};
pub use validator::{validate, QueryForm, ValidationResult};
