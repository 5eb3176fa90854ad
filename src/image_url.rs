use crate::content::Config;
use crate::post::PostImage;

pub const HERO_WIDTH: u32 = 800;
pub const HERO_HEIGHT: u32 = 400;

/// Asset refs have the shape `image-{assetId}-{width}x{height}-{format}`.
fn asset_ref_regex() -> &'static regex::Regex {
    static ASSET_REF: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    ASSET_REF.get_or_init(|| {
        regex::Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$")
            .expect("asset ref pattern should parse")
    })
}

/// CDN URL for the 800×400 rendition of a post's hero image. `None` when
/// project/dataset configuration is missing or the asset ref is malformed;
/// the page then simply renders without an image.
pub fn hero_url(config: &Config, image: &PostImage) -> Option<String> {
    let project_id = config.project_id.as_deref()?;
    let dataset = config.dataset.as_deref()?;

    let captures = asset_ref_regex().captures(&image.asset.reference)?;
    let (asset_id, dimensions, format) = (&captures[1], &captures[2], &captures[3]);

    Some(format!(
        "https://cdn.sanity.io/images/{project_id}/{dataset}/{asset_id}-{dimensions}.{format}?w={HERO_WIDTH}&h={HERO_HEIGHT}&fit=crop"
    ))
}
