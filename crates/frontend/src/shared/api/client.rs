use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::list::{ListPage, ListQuery, ResourceDescriptor};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// REST access to one resource.
///
/// The list store depends only on this trait, so tests and previews can
/// substitute canned responses.
#[async_trait(?Send)]
pub trait ResourceClient<T>: Send + Sync {
    /// `GET <resource>/?<filters>&page=<n>&page_size=<m>`
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<T>, ApiError>;

    /// `PUT <resource>/?<key_field>=<key>` with `{"<status_field>": active}`
    async fn update_status(&self, key: &str, active: bool) -> Result<(), ApiError>;

    /// `DELETE <resource>/?<key_field>=<key>`
    async fn delete(&self, key: &str) -> Result<(), ApiError>;
}

/// URL of one list page.
pub fn list_url(
    base: &str,
    descriptor: &ResourceDescriptor,
    query: &ListQuery,
) -> Result<String, ApiError> {
    let params: BTreeMap<String, String> = query.to_params().into_iter().collect();
    let query_string = serde_qs::to_string(&params)
        .map_err(|e| ApiError::Transport(format!("Failed to encode query: {}", e)))?;
    Ok(format!("{}{}/?{}", base, descriptor.endpoint, query_string))
}

/// URL addressing a single record for PUT/DELETE.
pub fn record_url(base: &str, descriptor: &ResourceDescriptor, key: &str) -> String {
    format!(
        "{}{}/?{}={}",
        base,
        descriptor.endpoint,
        descriptor.key_field,
        urlencoding::encode(key)
    )
}

/// gloo-net implementation used by the running application.
pub struct HttpResourceClient<T> {
    base: String,
    descriptor: &'static ResourceDescriptor,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpResourceClient<T> {
    pub fn new(base: impl Into<String>, descriptor: &'static ResourceDescriptor) -> Self {
        Self {
            base: base.into(),
            descriptor,
            _record: PhantomData,
        }
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status, &body)
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl<T> ResourceClient<T> for HttpResourceClient<T>
where
    T: DeserializeOwned + 'static,
{
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<T>, ApiError> {
        let url = list_url(&self.base, self.descriptor, query)?;
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(transport)?;

        if !response.ok() {
            return Err(error_from(response).await);
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str::<ListPage<T>>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_status(&self, key: &str, active: bool) -> Result<(), ApiError> {
        let field = self.descriptor.status_field.ok_or_else(|| {
            ApiError::Transport(format!("{} has no status field", self.descriptor.title))
        })?;
        let url = record_url(&self.base, self.descriptor, key);
        log::debug!("PUT {} {}={}", url, field, active);

        let body = serde_json::json!({ field: active });
        let response = Request::put(&url)
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        if !response.ok() {
            return Err(error_from(response).await);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ApiError> {
        let url = record_url(&self.base, self.descriptor, key);
        log::debug!("DELETE {}", url);

        let response = Request::delete(&url).send().await.map_err(transport)?;

        if !response.ok() {
            return Err(error_from(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a001_category, a009_delivery_zone};
    use contracts::shared::list::{FilterSet, FilterValue, Page};

    #[test]
    fn test_list_url_carries_filters_and_paging() {
        let query = ListQuery {
            filters: FilterSet::new()
                .with_field("status", FilterValue::Choice("1".into()))
                .with_field("search", FilterValue::Text("syrup".into())),
            page: Page::new(10).set_total_count(40).go_to(3),
        };
        let url = list_url("http://host:8000", &a001_category::dto::DESCRIPTOR, &query).unwrap();
        assert_eq!(
            url,
            "http://host:8000/api/category/?page=3&page_size=10&search=syrup&status=1"
        );
    }

    #[test]
    fn test_list_url_without_filters() {
        let query = ListQuery {
            filters: FilterSet::new(),
            page: Page::new(25),
        };
        let url = list_url("", &a001_category::dto::DESCRIPTOR, &query).unwrap();
        assert_eq!(url, "/api/category/?page=1&page_size=25");
    }

    #[test]
    fn test_record_url_uses_key_field() {
        assert_eq!(
            record_url("http://h", &a009_delivery_zone::dto::DESCRIPTOR, "560 001"),
            "http://h/api/delivery-zone/?pincode=560%20001"
        );
        assert_eq!(
            record_url("http://h", &a001_category::dto::DESCRIPTOR, "42"),
            "http://h/api/category/?category_name_id=42"
        );
    }
}
