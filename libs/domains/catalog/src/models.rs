use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::filter::CatalogFilter;

/// Raw payload of a stored point, as returned by the vector store
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A product as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    pub image_url: String,
    pub prod_name: String,
    pub detail_desc: String,
    pub product_type_name: String,
    pub index_group_name: String,
    pub price: f64,
    pub article_id: String,
    pub available: bool,
    pub color: String,
    pub size: String,
}

/// Input of a catalog search, already trimmed and decoded by the HTTP layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub query: String,
    pub groups: Vec<String>,
    pub items: Vec<String>,
    pub limit: u32,
    pub offset: u64,
}

impl CatalogQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 20,
            ..Default::default()
        }
    }

    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// Scroll position inside a collection (a point id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointCursor {
    Num(u64),
    Uuid(String),
}

/// Which payload fields to return with each point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSelection {
    All,
    Fields(Vec<String>),
}

/// Plain paginated listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollQuery {
    pub filter: Option<CatalogFilter>,
    pub limit: u32,
    pub offset: Option<PointCursor>,
    pub payload: PayloadSelection,
    pub with_vectors: bool,
}

impl ScrollQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            filter: None,
            limit,
            offset: None,
            payload: PayloadSelection::All,
            with_vectors: false,
        }
    }

    pub fn with_filter(mut self, filter: Option<CatalogFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_offset(mut self, offset: Option<PointCursor>) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_payload_fields(mut self, fields: &[&str]) -> Self {
        self.payload = PayloadSelection::Fields(fields.iter().map(|f| f.to_string()).collect());
        self
    }
}

/// One page of a scroll
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollPage {
    pub records: Vec<Payload>,
    pub next_offset: Option<PointCursor>,
}

/// Similarity search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub vector: Vec<f32>,
    pub limit: u64,
    pub offset: u64,
    pub filter: Option<CatalogFilter>,
    pub with_payload: bool,
}

impl SearchQuery {
    pub fn new(vector: Vec<f32>, limit: u64) -> Self {
        Self {
            vector,
            limit,
            offset: 0,
            filter: None,
            with_payload: true,
        }
    }
}

/// Collection metadata used by health and diagnostic endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CollectionInfo {
    pub name: String,
    pub points_count: u64,
    pub indexed_vectors_count: u64,
    pub vector_size: u64,
    pub status: CollectionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Green,
    Yellow,
    Red,
    Grey,
}

/// Featured products keyed by category, in facet order.
///
/// Serializes as a JSON object whose keys keep the facet ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedProducts {
    categories: Vec<(String, Vec<SearchResult>)>,
}

impl FeaturedProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: String, products: Vec<SearchResult>) {
        self.categories.push((category, products));
    }

    pub fn get(&self, category: &str) -> Option<&[SearchResult]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, products)| products.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for FeaturedProducts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (category, products) in &self.categories {
            map.serialize_entry(category, products)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> SearchResult {
        SearchResult {
            image_url: String::new(),
            prod_name: name.to_string(),
            detail_desc: String::new(),
            product_type_name: String::new(),
            index_group_name: String::new(),
            price: 0.0,
            article_id: String::new(),
            available: true,
            color: String::new(),
            size: String::new(),
        }
    }

    #[test]
    fn test_featured_products_serialize_in_insertion_order() {
        let mut featured = FeaturedProducts::new();
        featured.insert("Sport".to_string(), vec![product("Tights")]);
        featured.insert("Menswear".to_string(), vec![product("Shirt")]);

        let json = serde_json::to_string(&featured).unwrap();
        let sport = json.find("\"Sport\"").unwrap();
        let menswear = json.find("\"Menswear\"").unwrap();
        assert!(sport < menswear);
        assert_eq!(featured.get("Menswear").unwrap()[0].prod_name, "Shirt");
    }

    #[test]
    fn test_catalog_query_defaults() {
        let query = CatalogQuery::new("jeans");
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
        assert!(query.groups.is_empty());
        assert!(query.items.is_empty());
    }

    #[test]
    fn test_collection_status_serializes_lowercase() {
        let json = serde_json::to_value(CollectionStatus::Green).unwrap();
        assert_eq!(json, serde_json::json!("green"));
    }
}
