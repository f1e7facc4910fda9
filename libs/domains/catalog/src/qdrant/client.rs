use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    self, Condition, Filter, PayloadIncludeSelector, PointId, ScrollPointsBuilder,
    SearchPointsBuilder, Value as QdrantValue, WithPayloadSelector,
    with_payload_selector::SelectorOptions,
};
use tracing::debug;

use super::QdrantConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::filter::{CatalogFilter, MatchCondition};
use crate::models::{
    CollectionInfo, CollectionStatus, Payload, PayloadSelection, PointCursor, ScrollPage,
    ScrollQuery, SearchQuery,
};
use crate::repository::CatalogRepository;

/// Qdrant-backed implementation of CatalogRepository
pub struct QdrantRepository {
    client: Qdrant,
}

impl QdrantRepository {
    pub fn new(config: &QdrantConfig) -> CatalogResult<Self> {
        let mut builder = Qdrant::from_url(&config.url);

        if let Some(api_key) = &config.api_key {
            builder = builder.api_key(api_key.clone());
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| CatalogError::Store(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    fn to_qdrant_filter(filter: &CatalogFilter) -> Filter {
        let conditions: Vec<Condition> = filter
            .must
            .iter()
            .map(|clause| match &clause.condition {
                MatchCondition::Any(values) => Condition::matches(&clause.key, values.clone()),
                MatchCondition::Value(value) => Condition::matches(&clause.key, value.clone()),
            })
            .collect();

        Filter::must(conditions)
    }

    fn to_point_id(cursor: &PointCursor) -> PointId {
        match cursor {
            PointCursor::Num(num) => PointId::from(*num),
            PointCursor::Uuid(uuid) => PointId::from(uuid.clone()),
        }
    }

    fn from_point_id(point_id: &PointId) -> Option<PointCursor> {
        match &point_id.point_id_options {
            Some(qdrant::point_id::PointIdOptions::Num(num)) => Some(PointCursor::Num(*num)),
            Some(qdrant::point_id::PointIdOptions::Uuid(uuid)) => {
                Some(PointCursor::Uuid(uuid.clone()))
            }
            None => None,
        }
    }

    fn payload_selector(selection: &PayloadSelection) -> WithPayloadSelector {
        match selection {
            PayloadSelection::All => WithPayloadSelector::from(true),
            PayloadSelection::Fields(fields) => WithPayloadSelector {
                selector_options: Some(SelectorOptions::Include(PayloadIncludeSelector {
                    fields: fields.clone(),
                })),
            },
        }
    }

    fn to_payload(payload: std::collections::HashMap<String, QdrantValue>) -> Payload {
        payload
            .into_iter()
            .filter_map(|(key, val)| qdrant_value_to_json(val).map(|json| (key, json)))
            .collect()
    }
}

fn qdrant_value_to_json(val: QdrantValue) -> Option<serde_json::Value> {
    use qdrant::value::Kind;

    match val.kind {
        Some(Kind::NullValue(_)) => Some(serde_json::Value::Null),
        Some(Kind::BoolValue(b)) => Some(serde_json::Value::Bool(b)),
        Some(Kind::IntegerValue(i)) => Some(serde_json::Value::Number(i.into())),
        Some(Kind::DoubleValue(f)) => {
            serde_json::Number::from_f64(f).map(serde_json::Value::Number)
        }
        Some(Kind::StringValue(s)) => Some(serde_json::Value::String(s)),
        Some(Kind::ListValue(list)) => Some(serde_json::Value::Array(
            list.values
                .into_iter()
                .filter_map(qdrant_value_to_json)
                .collect(),
        )),
        Some(Kind::StructValue(object)) => Some(serde_json::Value::Object(
            object
                .fields
                .into_iter()
                .filter_map(|(key, val)| qdrant_value_to_json(val).map(|json| (key, json)))
                .collect(),
        )),
        None => None,
    }
}

#[async_trait]
impl CatalogRepository for QdrantRepository {
    async fn scroll(
        &self,
        collection_name: &str,
        query: ScrollQuery,
    ) -> CatalogResult<ScrollPage> {
        let mut builder = ScrollPointsBuilder::new(collection_name)
            .limit(query.limit)
            .with_vectors(query.with_vectors);

        if let Some(options) = Self::payload_selector(&query.payload).selector_options {
            builder = builder.with_payload(options);
        }

        if let Some(filter) = &query.filter {
            builder = builder.filter(Self::to_qdrant_filter(filter));
        }
        if let Some(offset) = &query.offset {
            builder = builder.offset(Self::to_point_id(offset));
        }

        let response = self.client.scroll(builder).await?;
        debug!(
            "Scrolled {} points from {}",
            response.result.len(),
            collection_name
        );

        Ok(ScrollPage {
            records: response
                .result
                .into_iter()
                .map(|point| Self::to_payload(point.payload))
                .collect(),
            next_offset: response
                .next_page_offset
                .as_ref()
                .and_then(Self::from_point_id),
        })
    }

    async fn search(
        &self,
        collection_name: &str,
        query: SearchQuery,
    ) -> CatalogResult<Vec<Payload>> {
        let mut builder = SearchPointsBuilder::new(collection_name, query.vector, query.limit)
            .offset(query.offset)
            .with_payload(query.with_payload);

        if let Some(filter) = &query.filter {
            builder = builder.filter(Self::to_qdrant_filter(filter));
        }

        let response = self.client.search_points(builder).await?;

        Ok(response
            .result
            .into_iter()
            .map(|point| Self::to_payload(point.payload))
            .collect())
    }

    async fn get_collection(
        &self,
        collection_name: &str,
    ) -> CatalogResult<Option<CollectionInfo>> {
        if !self.client.collection_exists(collection_name).await? {
            return Ok(None);
        }

        let info = self.client.collection_info(collection_name).await?;
        let result = info
            .result
            .ok_or_else(|| CatalogError::Store("Collection info missing result".to_string()))?;

        let status = match result.status() {
            qdrant::CollectionStatus::Green => CollectionStatus::Green,
            qdrant::CollectionStatus::Yellow => CollectionStatus::Yellow,
            qdrant::CollectionStatus::Red => CollectionStatus::Red,
            _ => CollectionStatus::Grey,
        };

        Ok(Some(CollectionInfo {
            name: collection_name.to_string(),
            points_count: result.points_count.unwrap_or_default(),
            indexed_vectors_count: result.indexed_vectors_count.unwrap_or_default(),
            vector_size: Self::extract_vector_size(&result.config),
            status,
        }))
    }
}

impl QdrantRepository {
    fn extract_vector_size(config: &Option<qdrant::CollectionConfig>) -> u64 {
        let vectors_config = config
            .as_ref()
            .and_then(|config| config.params.as_ref())
            .and_then(|params| params.vectors_config.as_ref())
            .and_then(|vc| vc.config.as_ref());

        match vectors_config {
            Some(qdrant::vectors_config::Config::Params(p)) => p.size,
            // Named vectors: report the first one
            Some(qdrant::vectors_config::Config::ParamsMap(map)) => {
                map.map.values().next().map(|p| p.size).unwrap_or_default()
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdrant::r#match::MatchValue;

    #[test]
    fn test_facet_filter_converts_to_keyword_matches() {
        let groups = vec!["Menswear".to_string(), "Sport".to_string()];
        let filter = CatalogFilter::from_facets(&groups, &[]).unwrap();

        let qdrant_filter = QdrantRepository::to_qdrant_filter(&filter);

        assert_eq!(qdrant_filter.must.len(), 1);
        let Some(qdrant::condition::ConditionOneOf::Field(field)) =
            &qdrant_filter.must[0].condition_one_of
        else {
            panic!("expected a field condition");
        };
        assert_eq!(field.key, "index_group_name");
        let match_value = field
            .r#match
            .as_ref()
            .and_then(|m| m.match_value.clone())
            .unwrap();
        match match_value {
            MatchValue::Keywords(keywords) => assert_eq!(keywords.strings, groups),
            other => panic!("unexpected match: {:?}", other),
        }
    }

    #[test]
    fn test_group_equals_converts_to_keyword_match() {
        let filter = CatalogFilter::group_equals("Sport");

        let qdrant_filter = QdrantRepository::to_qdrant_filter(&filter);

        let Some(qdrant::condition::ConditionOneOf::Field(field)) =
            &qdrant_filter.must[0].condition_one_of
        else {
            panic!("expected a field condition");
        };
        let match_value = field
            .r#match
            .as_ref()
            .and_then(|m| m.match_value.clone())
            .unwrap();
        assert_eq!(match_value, MatchValue::Keyword("Sport".to_string()));
    }

    #[test]
    fn test_point_cursor_round_trips() {
        let num = QdrantRepository::to_point_id(&PointCursor::Num(42));
        assert_eq!(
            QdrantRepository::from_point_id(&num),
            Some(PointCursor::Num(42))
        );
    }

    #[test]
    fn test_payload_conversion_keeps_nested_values() {
        let mut payload = std::collections::HashMap::new();
        payload.insert("prod_name".to_string(), QdrantValue::from("Tee"));
        payload.insert("price".to_string(), QdrantValue::from(12.5));
        payload.insert("available".to_string(), QdrantValue::from(false));
        payload.insert(
            "sizes".to_string(),
            QdrantValue {
                kind: Some(qdrant::value::Kind::ListValue(qdrant::ListValue {
                    values: vec![QdrantValue::from("S"), QdrantValue::from("M")],
                })),
            },
        );

        let json = QdrantRepository::to_payload(payload);

        assert_eq!(json["prod_name"], serde_json::json!("Tee"));
        assert_eq!(json["price"], serde_json::json!(12.5));
        assert_eq!(json["available"], serde_json::json!(false));
        assert_eq!(json["sizes"], serde_json::json!(["S", "M"]));
    }

    #[test]
    fn test_field_selector_includes_requested_fields() {
        let selector = QdrantRepository::payload_selector(&PayloadSelection::Fields(vec![
            "index_group_name".to_string(),
        ]));

        match selector.selector_options {
            Some(SelectorOptions::Include(include)) => {
                assert_eq!(include.fields, vec!["index_group_name".to_string()])
            }
            other => panic!("unexpected selector: {:?}", other),
        }
    }
}
