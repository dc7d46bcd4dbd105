//! SPARQL 1.1 query results in JSON format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single bound value in a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SparqlValue {
    /// An IRI reference.
    Uri {
        /// The IRI.
        value: String,
    },

    /// A plain, language-tagged or typed literal.
    Literal {
        /// Lexical form.
        value: String,

        /// Language tag.
        #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,

        /// Datatype IRI.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },

    /// Typed literal as emitted by older Virtuoso releases.
    TypedLiteral {
        /// Lexical form.
        value: String,

        /// Datatype IRI.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },

    /// A blank node.
    Bnode {
        /// Blank node label.
        value: String,
    },
}

impl SparqlValue {
    /// Create an IRI value.
    #[must_use]
    pub fn uri(value: impl Into<String>) -> Self {
        Self::Uri { value: value.into() }
    }

    /// Create a plain literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal { value: value.into(), lang: None, datatype: None }
    }

    /// The lexical value regardless of term type.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Uri { value }
            | Self::Literal { value, .. }
            | Self::TypedLiteral { value, .. }
            | Self::Bnode { value } => value,
        }
    }

    /// Check if this value is an IRI.
    #[must_use]
    pub const fn is_uri(&self) -> bool {
        matches!(self, Self::Uri { .. })
    }
}

/// One solution: variable name to bound value. Unbound variables are absent.
pub type SparqlRow = HashMap<String, SparqlValue>;

/// Convenience accessors on result rows.
pub trait SparqlRowExt {
    /// Lexical value of a variable, if bound.
    fn text(&self, var: &str) -> Option<&str>;

    /// Lexical value of a variable, if bound and not blank.
    fn non_empty(&self, var: &str) -> Option<&str> {
        self.text(var).filter(|v| !v.trim().is_empty())
    }
}

impl SparqlRowExt for SparqlRow {
    fn text(&self, var: &str) -> Option<&str> {
        self.get(var).map(SparqlValue::value)
    }
}

/// Result header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparqlHead {
    /// Projected variable names.
    #[serde(default)]
    pub vars: Vec<String>,
}

/// Body of a `results` member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparqlBindings {
    /// Solutions.
    #[serde(default)]
    pub bindings: Vec<SparqlRow>,
}

/// A complete `application/sparql-results+json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparqlResults {
    /// Header.
    #[serde(default)]
    pub head: SparqlHead,

    /// Solutions, absent for ASK queries.
    #[serde(default)]
    pub results: Option<SparqlBindings>,
}

impl SparqlResults {
    /// Consume the document, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<SparqlRow> {
        self.results.map(|r| r.bindings).unwrap_or_default()
    }
}
