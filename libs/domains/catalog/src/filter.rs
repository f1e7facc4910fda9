//! Filter Builder
//!
//! Turns the optional facet lists of a request into a conjunctive match
//! expression understood by the vector store. The JSON form mirrors the
//! store's REST filter shape, which keeps request logs readable:
//!
//! ```json
//! {"must": [{"key": "index_group_name", "match": {"any": ["Menswear"]}}]}
//! ```

use serde::{Deserialize, Serialize};

pub const GROUP_FIELD: &str = "index_group_name";
pub const ITEM_FIELD: &str = "product_type_name";

/// How a single payload field must match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCondition {
    /// Field equals any of the listed keywords
    Any(Vec<String>),
    /// Field equals exactly this keyword
    Value(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClause {
    pub key: String,
    #[serde(rename = "match")]
    pub condition: MatchCondition,
}

impl MatchClause {
    pub fn any(key: &str, values: &[String]) -> Self {
        Self {
            key: key.to_string(),
            condition: MatchCondition::Any(values.to_vec()),
        }
    }

    pub fn value(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            condition: MatchCondition::Value(value.to_string()),
        }
    }
}

/// Conjunction of match clauses ("must" semantics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub must: Vec<MatchClause>,
}

impl CatalogFilter {
    /// Build the facet filter for a search request.
    ///
    /// Returns `None` when both lists are empty. The group clause always
    /// precedes the item clause.
    pub fn from_facets(groups: &[String], items: &[String]) -> Option<Self> {
        let mut must = Vec::with_capacity(2);

        if !groups.is_empty() {
            must.push(MatchClause::any(GROUP_FIELD, groups));
        }
        if !items.is_empty() {
            must.push(MatchClause::any(ITEM_FIELD, items));
        }

        if must.is_empty() {
            None
        } else {
            Some(Self { must })
        }
    }

    /// Equality filter restricting a listing to one category group
    pub fn group_equals(group: &str) -> Self {
        Self {
            must: vec![MatchClause::value(GROUP_FIELD, group)],
        }
    }
}

impl std::fmt::Display for CatalogFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
