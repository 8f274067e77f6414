//! Text insertions used while composing a query.
//!
//! Every helper takes the current query and returns the new one. A helper that has nothing to do
//! returns its input unchanged.

/// The row count appended by [`add_limit`].
pub const DEFAULT_LIMIT: u64 = 100;

/// The query returned by [`add_skeleton`] for an empty editor.
pub const SKELETON: &str = "\
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?subject ?predicate ?object
WHERE {
  ?subject ?predicate ?object .
  # Add your triple patterns here
}
LIMIT 100";

/// Declares `prefix_name` as `namespace` after the last existing `PREFIX` line.
///
/// The declaration goes on the first line if the query has no `PREFIX` line yet. Nothing happens
/// if the query already contains `PREFIX <prefix_name>:`.
pub fn add_prefix(query: &str, prefix_name: &str, namespace: &str) -> String {
    if query.contains(&format!("PREFIX {prefix_name}:")) {
        return query.to_owned();
    }

    let declaration = format!("PREFIX {prefix_name}: <{namespace}>");
    let mut lines = query.split('\n').collect::<Vec<_>>();
    let position = lines
        .iter()
        .rposition(|line| line.trim().to_uppercase().starts_with("PREFIX"))
        .map_or(0, |last| last + 1);
    lines.insert(position, declaration.as_str());
    tracing::debug!(prefix_name, position, "added prefix declaration");
    lines.join("\n")
}

/// Appends `LIMIT 100` unless the query already mentions `LIMIT`.
pub fn add_limit(query: &str) -> String {
    add_limit_with(query, DEFAULT_LIMIT)
}

/// Appends `LIMIT <limit>` on its own line unless the query already mentions `LIMIT`.
pub fn add_limit_with(query: &str, limit: u64) -> String {
    if query.to_uppercase().contains("LIMIT") {
        return query.to_owned();
    }
    format!("{}\nLIMIT {limit}", query.trim_end())
}

/// Returns [`SKELETON`] for an empty or blank query, the query itself otherwise.
pub fn add_skeleton(query: &str) -> String {
    if query.trim().is_empty() {
        SKELETON.to_owned()
    } else {
        query.to_owned()
    }
}

/// The number of lines shown in the editor gutter.
pub fn line_count(query: &str) -> usize {
    query.matches('\n').count() + 1
}
