use crate::post::{Post, Slug, POST_QUERY};
use serde::Deserialize;

pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Connection details for the content backend. Project and dataset are
/// optional: without them post lookups fail per-request and no image URLs
/// are derived, but the service still starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: String,
}

impl Config {
    /// Reads `SANITY_PROJECT_ID`, `SANITY_DATASET` and `SANITY_API_VERSION`
    /// from the environment.
    pub fn from_env() -> Config {
        Config {
            project_id: std::env::var("SANITY_PROJECT_ID").ok(),
            dataset: std::env::var("SANITY_DATASET").ok(),
            api_version: std::env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| String::from(DEFAULT_API_VERSION)),
        }
    }

    /// Query endpoint URL with the projection and the bound `$slug`
    /// parameter percent-encoded. `None` if project/dataset are missing.
    pub fn query_url(&self, slug: &str) -> Option<String> {
        let (project_id, dataset) = self.project_id.as_deref().zip(self.dataset.as_deref())?;

        // GROQ string parameters are passed as quoted JSON literals
        let slug_param = urlencoding::encode(&format!("\"{slug}\"")).into_owned();

        Some(format!(
            "https://{project_id}.apicdn.sanity.io/v{}/data/query/{dataset}?query={}&%24slug={slug_param}",
            self.api_version,
            urlencoding::encode(POST_QUERY),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<Post>,
}

/// Fetches the post matching `slug`, or `None` when the backend has no such
/// document. Transport and decode failures propagate to the caller.
pub async fn fetch_post(
    http: &reqwest::Client,
    config: &Config,
    slug: &Slug,
) -> Result<Option<Post>, Box<dyn std::error::Error>> {
    let url = config
        .query_url(slug)
        .ok_or("content backend project/dataset not configured")?;

    let response = http.get(url).send().await?.error_for_status()?;
    let response = response.json::<QueryResponse>().await?;

    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::{Config, QueryResponse};

    fn config() -> Config {
        Config {
            project_id: Some(String::from("abc123")),
            dataset: Some(String::from("production")),
            api_version: String::from(super::DEFAULT_API_VERSION),
        }
    }

    #[test]
    fn query_url_binds_slug_as_quoted_parameter() {
        let url = config().query_url("hello-world").unwrap();

        assert!(url.starts_with("https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production?query="));
        assert!(url.ends_with("&%24slug=%22hello-world%22"));
    }

    #[test]
    fn query_url_encodes_the_projection() {
        let url = config().query_url("x").unwrap();

        assert!(url.contains(urlencoding::encode(super::POST_QUERY).as_ref()));
        // no raw GROQ characters may survive in the query string
        assert!(!url.contains('['));
        assert!(!url.contains('"'));
    }

    #[test]
    fn query_url_requires_project_and_dataset() {
        let mut config = config();
        config.dataset = None;
        assert!(config.query_url("x").is_none());

        let mut config = self::config();
        config.project_id = None;
        assert!(config.query_url("x").is_none());
    }

    #[test]
    fn null_query_result_decodes_to_none() {
        let response = serde_json::from_str::<QueryResponse>(r#"{"result": null}"#).unwrap();

        assert!(response.result.is_none());
    }

    #[test]
    fn query_result_decodes_to_a_typed_post() {
        let response = serde_json::from_str::<QueryResponse>(
            r#"{
                "result": {
                    "title": "Hello",
                    "publishedAt": "2024-01-15T00:00:00Z",
                    "slug": "hello",
                    "image": {
                        "_type": "image",
                        "asset": {"_ref": "image-deadbeef01-1200x900-jpg", "_type": "reference"},
                        "alt": "A greeting"
                    },
                    "body": [
                        {
                            "_type": "block",
                            "_key": "k0",
                            "style": "normal",
                            "children": [{"_type": "span", "text": "Hi.", "marks": ["em"]}]
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let post = response.result.unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.slug, "hello");
        assert_eq!(
            post.image.as_ref().unwrap().asset.reference,
            "image-deadbeef01-1200x900-jpg"
        );
        assert_eq!(post.body[0].children[0].text, "Hi.");
        assert_eq!(post.body[0].children[0].marks, vec!["em"]);
    }
}
