use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PlaceLookup;
use crate::{
    entities::{strip_tags, Place},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalItem {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mapx: Option<String>,
    #[serde(default)]
    pub mapy: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub road_address: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    #[serde(default)]
    items: Vec<LocalItem>,
}

impl From<LocalItem> for Place {
    fn from(item: LocalItem) -> Self {
        let id = item
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("custom-{}", Uuid::new_v4()));

        Place {
            id,
            title: strip_tags(&item.title),
            description: item.category.unwrap_or_default(),
            mapx: item.mapx,
            mapy: item.mapy,
            address: item.address,
            road_address: item.road_address,
            link: item.link,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct LocalSearchClient {
    api_base: String,
    client: reqwest::Client,
}

impl LocalSearchClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlaceLookup for LocalSearchClient {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Place>, Error> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search/locals", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("query", query.trim())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        Ok(data.items.into_iter().map(Place::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::RouteSequencer;

    #[test]
    fn maps_items_to_places() {
        let item: LocalItem = serde_json::from_str(
            r#"{
                "title": "<b>Namsan</b> Seoul Tower",
                "category": "Landmark",
                "mapx": "1269882266",
                "mapy": "375511694",
                "roadAddress": "105 Namsangongwon-gil"
            }"#,
        )
        .unwrap();

        let place = Place::from(item);
        assert!(place.id.starts_with("custom-"));
        assert_eq!(place.title, "Namsan Seoul Tower");
        assert_eq!(place.description, "Landmark");
        assert_eq!(place.road_address.as_deref(), Some("105 Namsangongwon-gil"));
        assert!(place.has_coordinates());
    }

    #[test]
    fn keeps_provider_ids() {
        let item = LocalItem {
            id: Some("local-42".into()),
            title: "Cafe".into(),
            category: None,
            mapx: None,
            mapy: None,
            address: None,
            road_address: None,
            link: None,
        };

        assert_eq!(Place::from(item).id, "local-42");
    }

    #[test]
    fn repeated_results_match_by_location() {
        let item = LocalItem {
            id: None,
            title: "<b>Gyeongbokgung</b>".into(),
            category: None,
            mapx: Some("1269770162".into()),
            mapy: Some("375788407".into()),
            address: None,
            road_address: None,
            link: None,
        };

        let first = Place::from(item.clone());
        let again = Place::from(item);
        assert_ne!(first.id, again.id);

        let mut sequencer = RouteSequencer::new();
        sequencer.add(first.clone()).unwrap();
        assert_eq!(sequencer.find_similar(&again).unwrap().place.id, first.id);
        assert!(sequencer.add(again).is_ok());
        assert_eq!(sequencer.len(), 2);
    }

    #[test]
    fn blank_query_skips_the_request() {
        let client = LocalSearchClient::new("http://127.0.0.1:9");
        let places = tokio_test::block_on(client.search("   ")).unwrap();
        assert!(places.is_empty());
    }
}
