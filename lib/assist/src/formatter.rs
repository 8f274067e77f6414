//! Re-layout of SPARQL query text.
//!
//! Formatting works in two passes over plain text. The first pass starts a new line before every
//! clause keyword, the second pass re-indents every line by the brace nesting depth. No parsing
//! takes place, so keywords inside literals or IRIs are treated like any other keyword.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// The keywords that start a new line. Multi-word keywords match with their inner whitespace.
pub const KEYWORDS: [&str; 20] = [
    "SELECT",
    "CONSTRUCT",
    "DESCRIBE",
    "ASK",
    "WHERE",
    "FILTER",
    "OPTIONAL",
    "UNION",
    "MINUS",
    "GRAPH",
    "SERVICE",
    "BIND",
    "VALUES",
    "GROUP BY",
    "ORDER BY",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "PREFIX",
    "BASE",
];

/// Indentation emitted per nesting level.
pub const INDENT: &str = "  ";

const PREFIX: &str = "PREFIX";

static KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|keyword| {
            RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// Formats `query` into one clause per line, indented by brace depth.
///
/// Formatting an already formatted query returns it unchanged.
pub fn format(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let broken = KEYWORD_PATTERNS
        .iter()
        .fold(query.to_owned(), |text, pattern| break_before(&text, pattern));
    reindent(&broken)
}

/// Inserts a line break before every match of `pattern` in `text` that is not guarded.
fn break_before(text: &str, pattern: &Regex) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for found in pattern.find_iter(text) {
        let start = found.start();
        if is_guarded(&text[..start]) || starts_line(&text[..start]) {
            continue;
        }
        result.push_str(&text[last..start]);
        result.push('\n');
        last = start;
    }
    result.push_str(&text[last..]);
    result
}

/// A keyword is not broken when it directly follows `PREFIX` or a word character.
fn is_guarded(before: &str) -> bool {
    let follows_word = before
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    // Subsumed by `follows_word` for regex matches, as `X` is a word character.
    let follows_prefix = before.len() >= PREFIX.len()
        && before.is_char_boundary(before.len() - PREFIX.len())
        && before[before.len() - PREFIX.len()..].eq_ignore_ascii_case(PREFIX);
    follows_word || follows_prefix
}

/// Whether only blanks separate the position from the start of its line.
fn starts_line(before: &str) -> bool {
    before
        .rsplit_once('\n')
        .map_or(before, |(_, line)| line)
        .trim()
        .is_empty()
}

fn reindent(text: &str) -> String {
    let mut level: usize = 0;
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        if line.contains('}') {
            level = level.saturating_sub(1);
        }
        lines.push(format!("{}{line}", INDENT.repeat(level)));
        if line.contains('{') {
            level += 1;
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn empty_query_is_unchanged() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn select_query() {
        assert_snapshot!(
            format("PREFIX foaf: <http://xmlns.com/foaf/0.1/> SELECT ?name WHERE {\n?p foaf:name ?name .\nOPTIONAL {\n?p foaf:mbox ?mbox\n} FILTER(?name != \"\")\n} ORDER BY ?name LIMIT 10"),
            @r#"
        PREFIX foaf: <http://xmlns.com/foaf/0.1/>
        SELECT ?name
        WHERE {
          ?p foaf:name ?name .
          OPTIONAL {
            ?p foaf:mbox ?mbox
          }
          FILTER(?name != "")
        }
        ORDER BY ?name
        LIMIT 10
        "#
        );
    }

    #[test]
    fn nested_braces_are_indented() {
        assert_snapshot!(
            format("select ?s where {\n?s ?p ?o .\n{\n?s a ?t\n}\nunion {\n?s ?q ?o\n}\n}"),
            @r"
        select ?s
        where {
          ?s ?p ?o .
          {
            ?s a ?t
          }
          union {
            ?s ?q ?o
          }
        }
        "
        );
    }

    #[test]
    fn line_with_both_braces_closes_before_it_opens() {
        assert_eq!(
            format("SELECT ?s WHERE { ?s ?p ?o } LIMIT 10"),
            "SELECT ?s\nWHERE { ?s ?p ?o }\n  LIMIT 10"
        );
    }

    #[test]
    fn every_occurrence_is_broken() {
        assert_eq!(
            format("SELECT ?a WHERE ?b LIMIT 1 OFFSET 2 LIMIT 3"),
            "SELECT ?a\nWHERE ?b\nLIMIT 1\nOFFSET 2\nLIMIT 3"
        );
    }

    #[test]
    fn multi_word_keywords_keep_their_spacing() {
        assert_eq!(
            format("SELECT ?s WHERE ?x group by ?s ORDER  BY ?s"),
            "SELECT ?s\nWHERE ?x\ngroup by ?s ORDER  BY ?s"
        );
    }

    #[test]
    fn keywords_inside_words_are_not_broken() {
        assert_eq!(
            format("SELECT ?myWHERE ?limit_x ?x_limit WHERE { }"),
            "SELECT ?myWHERE ?limit_x ?x_limit\nWHERE { }"
        );
        assert_eq!(format("SELECT ?s PREFIXSELECT"), "SELECT ?s PREFIXSELECT");
    }

    #[test]
    fn keywords_after_punctuation_are_broken() {
        assert_eq!(format("SELECT ?limit WHERE"), "SELECT ?\nlimit\nWHERE");
    }

    #[test]
    fn guard_checks_the_preceding_text() {
        assert!(is_guarded("PREFIX"));
        assert!(is_guarded("?s prefix"));
        assert!(is_guarded("?my_"));
        assert!(!is_guarded("PREFIX "));
        assert!(!is_guarded("<http://example.com/"));
        assert!(!is_guarded(""));
    }

    #[test]
    fn closing_brace_is_clamped_at_zero() {
        assert_eq!(format("}\n} x {\ny"), "}\n} x {\n  y");
    }

    #[test]
    fn blank_lines_are_kept_empty() {
        assert_eq!(
            format("SELECT ?s\n   \nWHERE {\n\n?s ?p ?o }"),
            "SELECT ?s\n\nWHERE {\n\n?s ?p ?o }"
        );
    }

    #[test]
    fn format_is_idempotent() {
        for query in [
            "SELECT ?s WHERE { ?s ?p ?o } LIMIT 10",
            "  prefix ex: <http://example.com/select/> select * where { ?s ex:where ?o . filter(?o > 1) }",
            "ASK { { ?a ?b ?c } UNION { ?a ?b ?d } }",
            "} } { where",
            "SELECT ?s\n\n\nWHERE { ?s ?p ?o }\n",
        ] {
            let once = format(query);
            assert_eq!(format(&once), once, "formatting {query:?} twice");
        }
    }
}
