//! Item Fetcher
//!
//! GET `{api_endpoint}/Company/{company_id}/Item` com Bearer token e normalização
//! do corpo retornado para uma lista plana de [`Item`].

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MyobError, Result};

/// Company file alvo das consultas de inventário
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyFile {
    pub api_endpoint: String,
    pub company_id: String,
}

impl CompanyFile {
    pub fn items_url(&self) -> String {
        format!(
            "{}/Company/{}/Item",
            self.api_endpoint.trim_end_matches('/'),
            self.company_id
        )
    }
}

/// Item de inventário (SKU) já normalizado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub number: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Item {
    /// Mapeia um registro cru do MYOB. Nunca falha: campos ausentes viram `""` / `0`.
    pub fn from_record(record: &Value) -> Self {
        Self {
            number: text_field(record, "Number"),
            name: text_field(record, "Name"),
            description: text_field(record, "Description"),
            price: number_field(record, "SellPrice"),
        }
    }
}

fn text_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number_field(record: &Value, key: &str) -> f64 {
    let price: Option<f64> = match record.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };

    // "NaN" e "inf" são aceitos pelo parse mas não viram JSON numérico
    price.filter(|p| p.is_finite()).unwrap_or(0.0)
}

/// Formatos conhecidos do corpo da Item collection
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsPayload {
    /// `[ {...}, {...} ]`
    Sequence(Vec<Value>),
    /// `{ "Item": [ {...}, {...} ] }`
    WrappedSequence(Vec<Value>),
    /// `{ "Item": {...} }`
    SingleObject(Value),
    Empty,
}

impl ItemsPayload {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(records) => ItemsPayload::Sequence(records),
            Value::Object(mut map) => match map.remove("Item") {
                Some(Value::Array(records)) => ItemsPayload::WrappedSequence(records),
                Some(record) if is_truthy(&record) => ItemsPayload::SingleObject(record),
                _ => ItemsPayload::Empty,
            },
            _ => ItemsPayload::Empty,
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        match self {
            ItemsPayload::Sequence(records) | ItemsPayload::WrappedSequence(records) => {
                records.iter().map(Item::from_record).collect()
            }
            ItemsPayload::SingleObject(record) => vec![Item::from_record(&record)],
            ItemsPayload::Empty => Vec::new(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normaliza o corpo JSON da Item collection
pub fn normalize_items(body: Value) -> Vec<Item> {
    ItemsPayload::classify(body).into_items()
}

/// Cliente da Item collection de um company file
#[derive(Debug, Clone)]
pub struct ItemFetcher {
    http_client: Client,
    company: CompanyFile,
}

impl ItemFetcher {
    pub fn new(http_client: Client, company: CompanyFile) -> Self {
        Self {
            http_client,
            company,
        }
    }

    /// Busca os itens do company file usando um access token válido
    pub async fn fetch_items(&self, access_token: &str) -> Result<Vec<Item>> {
        let url = self.company.items_url();

        tracing::info!("📦 [MYOB] GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", access_token))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ [MYOB] Items request failed: {} - {}", status, body);
            return Err(MyobError::ItemFetch {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ [MYOB] Items response is not valid JSON: {}", e);
            MyobError::InvalidResponse(format!("items response: {}", e))
        })?;

        let items = normalize_items(json);
        tracing::info!("✅ [MYOB] {} itens recebidos", items.len());

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_single_object_is_wrapped_with_defaults() {
        let items = normalize_items(json!({ "Item": { "Number": "1", "Name": "Widget" } }));

        assert_eq!(
            items,
            vec![Item {
                number: "1".to_string(),
                name: "Widget".to_string(),
                description: String::new(),
                price: 0.0,
            }]
        );
    }

    #[test]
    fn test_wrapped_sequence_keeps_order() {
        let items = normalize_items(json!({
            "Item": [
                { "Number": "A-1", "Name": "Box", "Description": "Small box", "SellPrice": 2.5 },
                { "Number": "A-2", "Name": "Tape", "SellPrice": 4 }
            ]
        }));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].number, "A-1");
        assert_eq!(items[0].description, "Small box");
        assert_eq!(items[0].price, 2.5);
        assert_eq!(items[1].name, "Tape");
        assert_eq!(items[1].price, 4.0);
    }

    #[test]
    fn test_empty_shapes_yield_empty_list() {
        assert!(normalize_items(json!([])).is_empty());
        assert!(normalize_items(json!({})).is_empty());
        assert!(normalize_items(json!({ "Item": null })).is_empty());
        assert!(normalize_items(json!("unexpected")).is_empty());
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(ItemsPayload::classify(json!([{}])), ItemsPayload::Sequence(vec![json!({})]));
        assert_eq!(
            ItemsPayload::classify(json!({ "Item": [] })),
            ItemsPayload::WrappedSequence(vec![])
        );
        assert_eq!(
            ItemsPayload::classify(json!({ "Item": { "Name": "x" } })),
            ItemsPayload::SingleObject(json!({ "Name": "x" }))
        );
        assert_eq!(ItemsPayload::classify(json!({ "Item": "" })), ItemsPayload::Empty);
        assert_eq!(ItemsPayload::classify(json!({ "Other": [1] })), ItemsPayload::Empty);
    }

    #[test]
    fn test_record_mapping_never_fails_on_odd_values() {
        let item = Item::from_record(&json!({
            "Number": 42,
            "Name": null,
            "Description": { "value": "nested" },
            "SellPrice": "19.90"
        }));

        assert_eq!(item.number, "42");
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 19.9);

        assert_eq!(
            Item::from_record(&Value::Null),
            Item {
                number: String::new(),
                name: String::new(),
                description: String::new(),
                price: 0.0,
            }
        );
    }

    #[test]
    fn test_non_finite_price_falls_back_to_zero() {
        for raw in ["NaN", "inf", "-infinity"] {
            let item = Item::from_record(&json!({ "SellPrice": raw }));
            assert_eq!(item.price, 0.0, "SellPrice {}", raw);
        }

        let serialized = serde_json::to_value(Item::from_record(&json!({ "SellPrice": "NaN" }))).unwrap();
        assert_eq!(serialized["price"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_items_url() {
        let company = CompanyFile {
            api_endpoint: "https://api.myob.com/accountright/".to_string(),
            company_id: "c-123".to_string(),
        };
        assert_eq!(company.items_url(), "https://api.myob.com/accountright/Company/c-123/Item");
    }

    #[tokio::test]
    async fn test_fetch_items_sends_bearer_and_is_idempotent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/Company/c-1/Item")
                    .header("Authorization", "Bearer abc")
                    .header("Accept", "application/json");
                then.status(200).json_body(json!([
                    { "Number": "1", "Name": "Widget", "SellPrice": 10 },
                    { "Number": "2", "Name": "Gadget" }
                ]));
            })
            .await;

        let fetcher = ItemFetcher::new(
            Client::new(),
            CompanyFile {
                api_endpoint: server.base_url(),
                company_id: "c-1".to_string(),
            },
        );

        let first = fetcher.fetch_items("abc").await.unwrap();
        let second = fetcher.fetch_items("abc").await.unwrap();

        mock.assert_hits_async(2).await;
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_items_non_success_carries_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/Company/c-1/Item");
                then.status(403).body("forbidden");
            })
            .await;

        let fetcher = ItemFetcher::new(
            Client::new(),
            CompanyFile {
                api_endpoint: server.base_url(),
                company_id: "c-1".to_string(),
            },
        );

        let err = fetcher.fetch_items("abc").await.unwrap_err();
        assert!(matches!(err, MyobError::ItemFetch { status: 403, .. }));
        assert_eq!(err.to_string(), "Items request failed: 403");
    }
}
