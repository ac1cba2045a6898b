use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    self, CollectionExistsRequest, CountPointsBuilder, CreateCollectionBuilder, Distance,
    PointId, PointStruct, UpsertPointsBuilder, Value as QdrantValue, VectorParamsBuilder,
};
use uuid::Uuid;

use super::{QdrantConfig, StoreLocation};
use crate::error::{VectorError, VectorResult};
use crate::models::{Vector, VectorConfig};
use crate::repository::VectorRepository;

/// Qdrant-backed implementation of VectorRepository
pub struct QdrantRepository {
    client: Qdrant,
}

impl QdrantRepository {
    pub async fn new(config: QdrantConfig) -> VectorResult<Self> {
        let StoreLocation::Url(url) = &config.location else {
            return Err(VectorError::Config(
                "Qdrant repository needs a server URL, not the in-memory location".to_string(),
            ));
        };

        let mut builder = Qdrant::from_url(url);

        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| VectorError::Qdrant(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    fn uuid_to_point_id(id: Uuid) -> PointId {
        PointId::from(id.to_string())
    }

    fn payload_to_qdrant(payload: Option<serde_json::Value>) -> HashMap<String, QdrantValue> {
        let Some(serde_json::Value::Object(map)) = payload else {
            return HashMap::new();
        };

        map.into_iter()
            .filter_map(|(key, val)| json_to_qdrant_value(val).map(|v| (key, v)))
            .collect()
    }
}

fn json_to_qdrant_value(val: serde_json::Value) -> Option<QdrantValue> {
    use qdrant::value::Kind;

    match val {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(QdrantValue::from(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(QdrantValue::from(i))
            } else {
                n.as_f64().map(QdrantValue::from)
            }
        }
        serde_json::Value::String(s) => Some(QdrantValue::from(s)),
        serde_json::Value::Array(items) => Some(QdrantValue {
            kind: Some(Kind::ListValue(qdrant::ListValue {
                values: items.into_iter().filter_map(json_to_qdrant_value).collect(),
            })),
        }),
        serde_json::Value::Object(map) => Some(QdrantValue {
            kind: Some(Kind::StructValue(qdrant::Struct {
                fields: map
                    .into_iter()
                    .filter_map(|(key, val)| json_to_qdrant_value(val).map(|v| (key, v)))
                    .collect(),
            })),
        }),
    }
}

#[async_trait]
impl VectorRepository for QdrantRepository {
    async fn collection_exists(&self, collection_name: &str) -> VectorResult<bool> {
        let exists = self
            .client
            .collection_exists(CollectionExistsRequest {
                collection_name: collection_name.to_string(),
            })
            .await?;
        Ok(exists)
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        config: VectorConfig,
    ) -> VectorResult<()> {
        let builder = CreateCollectionBuilder::new(collection_name).vectors_config(
            VectorParamsBuilder::new(config.dimension as u64, Distance::Cosine),
        );

        self.client.create_collection(builder).await?;
        Ok(())
    }

    async fn upsert(
        &self,
        collection_name: &str,
        vector: Vector,
        wait: bool,
    ) -> VectorResult<Uuid> {
        let point = PointStruct::new(
            Self::uuid_to_point_id(vector.id),
            vector.values,
            Self::payload_to_qdrant(vector.payload),
        );

        let mut builder = UpsertPointsBuilder::new(collection_name, vec![point]);
        if wait {
            builder = builder.wait(true);
        }

        self.client.upsert_points(builder).await?;

        Ok(vector.id)
    }

    async fn count(&self, collection_name: &str) -> VectorResult<u64> {
        let response = self
            .client
            .count(CountPointsBuilder::new(collection_name).exact(true))
            .await?;

        Ok(response.result.map(|r| r.count).unwrap_or(0))
    }
}
