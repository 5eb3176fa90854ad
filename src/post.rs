use serde::Deserialize;

pub type Slug = String;

/// GROQ query for the first post whose slug matches the bound `$slug`
/// parameter, projected down to exactly the fields the page renders.
pub const POST_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  title,
  publishedAt,
  "slug": slug.current,
  image,
  body
}"#;

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub image: Option<PostImage>,
    #[serde(default)]
    pub body: Vec<Block>,
    pub slug: Slug,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostImage {
    pub asset: AssetRef,
    pub alt: Option<String>,
}

/// Indirect pointer to an asset in the content store. The `_ref` string is
/// resolved to a CDN URL by `crate::image_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// One rich-text block. Non-`block` types (inline images and the like) are
/// skipped by the renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(rename = "_type")]
    pub block_type: String,
    pub style: Option<String>,
    #[serde(rename = "listItem")]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}
