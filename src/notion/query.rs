//! Database query filters and sorts

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// A database query filter
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    CheckboxEquals { property: String, equals: bool },
    RichTextEquals { property: String, equals: String },
    And(Vec<Filter>),
}

impl Filter {
    pub fn checkbox(property: &str, equals: bool) -> Self {
        Filter::CheckboxEquals {
            property: property.to_string(),
            equals,
        }
    }

    pub fn rich_text(property: &str, equals: &str) -> Self {
        Filter::RichTextEquals {
            property: property.to_string(),
            equals: equals.to_string(),
        }
    }

    /// The filter in Notion's JSON shape
    pub fn to_json(&self) -> Value {
        match self {
            Filter::CheckboxEquals { property, equals } => json!({
                "property": property,
                "checkbox": { "equals": equals }
            }),
            Filter::RichTextEquals { property, equals } => json!({
                "property": property,
                "rich_text": { "equals": equals }
            }),
            Filter::And(filters) => json!({
                "and": filters.iter().map(Filter::to_json).collect::<Vec<_>>()
            }),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    pub fn descending(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: Direction::Descending,
        }
    }
}

/// Filter and sort for one database query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

impl DatabaseQuery {
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }
}
