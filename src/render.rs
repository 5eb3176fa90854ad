use crate::post::{Block, Post, Span};

pub const NOT_FOUND_TEXT: &str = "Post not found";
pub const BACK_LINK_LABEL: &str = "← Back to posts";

const FALLBACK_TITLE: &str = "Blog Post";

/// Page metadata title: the post's title, or a generic fallback when no
/// document matched the slug.
pub fn meta_title(post: Option<&Post>) -> String {
    match post {
        Some(post) => post.title.clone(),
        None => String::from(FALLBACK_TITLE),
    }
}

/// Page metadata description: the first text span of the first body block,
/// else empty.
pub fn meta_description(post: Option<&Post>) -> String {
    post.and_then(|post| post.body.first())
        .and_then(|block| block.children.first())
        .map(|span| span.text.clone())
        .unwrap_or_default()
}

/// The page rendered when no document matches the slug: the error text plus
/// a link back to the index, nothing else.
pub fn not_found_page() -> String {
    page(
        FALLBACK_TITLE,
        "",
        &format!("<p class=\"error\">{NOT_FOUND_TEXT}</p>\n{}\n", back_link()),
    )
}

/// The full post page: back-link, optional hero image, title, publish date,
/// rich-text body.
pub fn post_page(post: &Post, hero_url: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&back_link());
    body.push('\n');

    if let Some(url) = hero_url {
        let alt = post
            .image
            .as_ref()
            .and_then(|image| image.alt.as_deref())
            .unwrap_or(&post.title);

        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">\n",
            escape(url),
            escape(alt),
            crate::image_url::HERO_WIDTH,
            crate::image_url::HERO_HEIGHT,
        ));
    }

    body.push_str(&format!("<h1>{}</h1>\n", escape(&post.title)));
    body.push_str(&format!(
        "<p>Published: {}</p>\n",
        display_date(&post.published_at)
    ));
    body.push_str(&body_html(&post.body));

    page(&meta_title(Some(post)), &meta_description(Some(post)), &body)
}

/// US-locale short date, e.g. `1/15/2024`.
pub fn display_date(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%-m/%-d/%Y").to_string()
}

fn page(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         </head>\n\
         <body>\n\
         <main class=\"container\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        escape(title),
        escape(description),
    )
}

fn back_link() -> String {
    format!("<a href=\"/\">{BACK_LINK_LABEL}</a>")
}

/// Translates the rich-text body to markup: headings and blockquotes by
/// block style, runs of `listItem` blocks grouped into lists, everything
/// else a paragraph. Blocks that aren't text (`_type != "block"`) are
/// skipped.
pub fn body_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        if block.block_type != "block" {
            continue;
        }

        let list_tag = match block.list_item.as_deref() {
            Some("number") => Some("ol"),
            Some(_) => Some("ul"),
            None => None,
        };

        if open_list != list_tag {
            if let Some(tag) = open_list {
                html.push_str(&format!("</{tag}>\n"));
            }
            if let Some(tag) = list_tag {
                html.push_str(&format!("<{tag}>\n"));
            }
            open_list = list_tag;
        }

        let spans = spans_html(&block.children);

        if list_tag.is_some() {
            html.push_str(&format!("<li>{spans}</li>\n"));
            continue;
        }

        match block.style.as_deref() {
            Some("h1") => html.push_str(&format!("<h1>{spans}</h1>\n")),
            Some("h2") => html.push_str(&format!("<h2>{spans}</h2>\n")),
            Some("h3") => html.push_str(&format!("<h3>{spans}</h3>\n")),
            Some("h4") => html.push_str(&format!("<h4>{spans}</h4>\n")),
            Some("blockquote") => html.push_str(&format!("<blockquote>{spans}</blockquote>\n")),
            _ => html.push_str(&format!("<p>{spans}</p>\n")),
        }
    }

    if let Some(tag) = open_list {
        html.push_str(&format!("</{tag}>\n"));
    }

    html
}

fn spans_html(spans: &[Span]) -> String {
    spans.iter().map(span_html).collect()
}

fn span_html(span: &Span) -> String {
    let mut html = escape(&span.text);

    for mark in span.marks.iter().rev() {
        let tag = match mark.as_str() {
            "strong" => "strong",
            "em" => "em",
            "code" => "code",
            "underline" => "u",
            // annotation keys and unknown decorators don't render
            _ => continue,
        };
        html = format!("<{tag}>{html}</{tag}>");
    }

    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
