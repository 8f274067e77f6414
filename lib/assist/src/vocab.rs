//! Namespaces and endpoints offered to the user while composing a query.

/// A well-known namespace that can be declared with a `PREFIX` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrefixDeclaration {
    pub name: &'static str,
    pub namespace: &'static str,
    pub description: &'static str,
}

impl PrefixDeclaration {
    const fn new(name: &'static str, namespace: &'static str, description: &'static str) -> Self {
        Self {
            name,
            namespace,
            description,
        }
    }

    /// Finds a common prefix by its name.
    pub fn lookup(name: &str) -> Option<&'static Self> {
        COMMON_PREFIXES.iter().find(|prefix| prefix.name == name)
    }

    /// The `PREFIX name: <namespace>` line declaring this prefix.
    pub fn declaration(&self) -> String {
        format!("PREFIX {}: <{}>", self.name, self.namespace)
    }
}

pub const COMMON_PREFIXES: &[PrefixDeclaration] = &[
    PrefixDeclaration::new(
        "rdf",
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        "RDF vocabulary",
    ),
    PrefixDeclaration::new(
        "rdfs",
        "http://www.w3.org/2000/01/rdf-schema#",
        "RDF Schema vocabulary",
    ),
    PrefixDeclaration::new(
        "owl",
        "http://www.w3.org/2002/07/owl#",
        "Web Ontology Language",
    ),
    PrefixDeclaration::new(
        "xsd",
        "http://www.w3.org/2001/XMLSchema#",
        "XML Schema datatypes",
    ),
    PrefixDeclaration::new(
        "foaf",
        "http://xmlns.com/foaf/0.1/",
        "Friend of a Friend vocabulary",
    ),
    PrefixDeclaration::new(
        "dc",
        "http://purl.org/dc/elements/1.1/",
        "Dublin Core elements",
    ),
    PrefixDeclaration::new("dcterms", "http://purl.org/dc/terms/", "Dublin Core terms"),
    PrefixDeclaration::new(
        "skos",
        "http://www.w3.org/2004/02/skos/core#",
        "Simple Knowledge Organization System",
    ),
    PrefixDeclaration::new("schema", "http://schema.org/", "Schema.org vocabulary"),
    PrefixDeclaration::new("wd", "http://www.wikidata.org/entity/", "Wikidata entities"),
    PrefixDeclaration::new(
        "wdt",
        "http://www.wikidata.org/prop/direct/",
        "Wikidata direct properties",
    ),
    PrefixDeclaration::new("dbo", "http://dbpedia.org/ontology/", "DBpedia ontology"),
    PrefixDeclaration::new("dbr", "http://dbpedia.org/resource/", "DBpedia resources"),
];

/// A public SPARQL endpoint suggested to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SUGGESTED_ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "Wikidata",
        url: "https://query.wikidata.org/sparql",
    },
    Endpoint {
        name: "DBpedia",
        url: "https://dbpedia.org/sparql",
    },
    Endpoint {
        name: "UniProt",
        url: "https://sparql.uniprot.org/sparql",
    },
    Endpoint {
        name: "Europeana",
        url: "http://sparql.europeana.eu/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefix_names_are_unique() {
        let names = COMMON_PREFIXES
            .iter()
            .map(|prefix| prefix.name)
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), COMMON_PREFIXES.len());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            PrefixDeclaration::lookup("foaf").map(PrefixDeclaration::declaration),
            Some("PREFIX foaf: <http://xmlns.com/foaf/0.1/>".to_owned())
        );
        assert_eq!(PrefixDeclaration::lookup("FOAF"), None);
    }
}
