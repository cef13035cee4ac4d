use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::params::append_page_size;
use crate::http::{HttpClient, QueryParams};
use crate::pagination;
use crate::schema::{to_body, validate};
use crate::types::common::MAX_PAGE_SIZE;
use crate::types::smart_category::{self, SmartCategory};

/// `/smart_categories`: keyword and prompt tagging rules.
pub struct SmartCategories<'a> {
    http: &'a HttpClient,
}

impl<'a> SmartCategories<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Every smart category. The server pages this listing; all pages are
    /// collected, requested at the largest page size.
    pub async fn list(&self) -> Result<Vec<SmartCategory>, Error> {
        let mut params = QueryParams::new();
        append_page_size(&mut params, None, true, MAX_PAGE_SIZE)?;
        let page: smart_category::List =
            pagination::list(self.http, "smart_categories", &params, true).await?;
        Ok(page.results)
    }

    pub async fn get(&self, uuid: Uuid) -> Result<SmartCategory, Error> {
        validate(
            self.http
                .request(
                    Method::GET,
                    &format!("smart_categories/{}", uuid),
                    None,
                    None,
                )
                .await?,
        )
    }

    pub async fn create(&self, category: &smart_category::Create) -> Result<SmartCategory, Error> {
        let body = to_body(category)?;
        validate(
            self.http
                .request(Method::POST, "smart_categories", None, Some(&body))
                .await?,
        )
    }

    /// Partially updates a category with `PATCH`.
    pub async fn update(
        &self,
        uuid: Uuid,
        update: &smart_category::Update,
    ) -> Result<SmartCategory, Error> {
        let body = to_body(update)?;
        validate(
            self.http
                .request(
                    Method::PATCH,
                    &format!("smart_categories/{}", uuid),
                    None,
                    Some(&body),
                )
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_client;
    use crate::schema::Field;
    use crate::types::smart_category;
    use mockito::{Matcher, Server};
    use serde_json::{json, Value};
    use uuid::Uuid;

    const CATEGORY_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn settings_json(length: &str) -> Value {
        json!({
            "aug_notes_enabled": true,
            "keyword_notes_enabled": true,
            "keyword_tracking_enabled": true,
            "prompt_extract_length": length,
            "prompt_extract_strategy": "after",
            "prompt_notes_enabled": true
        })
    }

    fn category_json(uuid: &str, name: &str) -> Value {
        json!({
            "uuid": uuid,
            "name": name,
            "key": "test_category",
            "is_default": false,
            "keywords": [],
            "prompts": [],
            "settings": settings_json("medium")
        })
    }

    #[tokio::test]
    async fn test_list_collects_every_page() {
        let mut server = Server::new_async().await;
        let next_url = format!("{}/smart_categories?page=2", server.url());
        let page_1 = server
            .mock("GET", "/smart_categories")
            .match_query(Matcher::UrlEncoded("page_size".into(), "20".into()))
            .with_status(200)
            .with_body(
                json!({
                    "count": 2,
                    "next": next_url,
                    "previous": null,
                    "results": [category_json(CATEGORY_UUID, "Pricing")]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let page_2 = server
            .mock("GET", "/smart_categories")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(
                json!({
                    "count": 2,
                    "next": null,
                    "previous": null,
                    "results": [category_json("123e4567-e89b-12d3-a456-426614174009", "Competitors")]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let categories = client.smart_categories().list().await.unwrap();

        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Pricing", "Competitors"]);
        page_1.assert_async().await;
        page_2.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_smart_category() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/smart_categories")
            .match_body(Matcher::Json(json!({
                "name": "New Category",
                "keywords": ["keyword1", "keyword2"],
                "prompts": ["prompt1"],
                "settings": settings_json("medium")
            })))
            .with_status(201)
            .with_body(category_json(CATEGORY_UUID, "New Category").to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let create = smart_category::Create {
            name: "New Category".to_string(),
            keywords: vec!["keyword1".to_string(), "keyword2".to_string()],
            prompts: vec!["prompt1".to_string()],
            settings: serde_json::from_value(settings_json("medium")).unwrap(),
        };
        let category = client.smart_categories().create(&create).await.unwrap();

        assert_eq!(category.settings.prompt_extract_length, "medium");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_patches_only_set_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", format!("/smart_categories/{}", CATEGORY_UUID).as_str())
            .match_body(Matcher::Json(json!({"settings": settings_json("short")})))
            .with_status(200)
            .with_body(
                json!({
                    "uuid": CATEGORY_UUID,
                    "name": "Test Category",
                    "key": "test_category",
                    "is_default": false,
                    "keywords": [],
                    "prompts": [],
                    "settings": settings_json("short")
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let update = smart_category::Update {
            settings: Field::Set(serde_json::from_value(settings_json("short")).unwrap()),
            ..Default::default()
        };
        let category = client
            .smart_categories()
            .update(Uuid::parse_str(CATEGORY_UUID).unwrap(), &update)
            .await
            .unwrap();

        assert_eq!(category.settings.prompt_extract_length, "short");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_smart_category() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", format!("/smart_categories/{}", CATEGORY_UUID).as_str())
            .with_status(200)
            .with_body(category_json(CATEGORY_UUID, "Test Category").to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let category = client
            .smart_categories()
            .get(Uuid::parse_str(CATEGORY_UUID).unwrap())
            .await
            .unwrap();

        assert_eq!(category.key, "test_category");
    }
}
