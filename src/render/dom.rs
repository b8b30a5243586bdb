// src/render/dom.rs
// =============================================================================
// This module reads link targets out of a rendered HTML document.
//
// The browser hands us the serialized DOM *after* scripts have run, so links
// injected client-side are included. We then do what the browser's `a.href`
// property does: resolve each href against the document base.
//
// We use the `scraper` crate to:
// - Parse HTML into a DOM
// - Find elements with CSS selectors
//
// And the `url` crate to:
// - Resolve relative hrefs to absolute URLs (WHATWG rules, same as browsers)
//
// Nothing is filtered here. Duplicates, fragments and mailto: links all come
// back; the crawl engine decides what to follow.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Returns the absolute target of every <a href> in `html`, in document order
//
// Parameters:
//   html: the rendered document
//   page_url: the URL the document was loaded from (after redirects)
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = "https://example.com/guide/"
//   result = ["https://example.com/docs"]
pub fn extract_anchor_targets(html: &str, page_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let base = match document_base(&document, page_url) {
        Some(base) => base,
        None => {
            tracing::debug!("cannot resolve links against invalid base URL {}", page_url);
            return Vec::new();
        }
    };

    // The selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(&base, href))
        .collect()
}

// Works out the URL relative links are resolved against
//
// A <base href="..."> element overrides the page URL, and may itself be
// relative to the page URL.
fn document_base(document: &Html, page_url: &str) -> Option<Url> {
    let page = Url::parse(page_url).ok()?;

    let selector = Selector::parse("base[href]").unwrap();
    let declared = document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| page.join(href.trim()).ok());

    Some(declared.unwrap_or(page))
}

// Resolves one href the way a browser does
//
// Surrounding whitespace is stripped (browsers do this too). An href that
// cannot be resolved at all yields None.
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|url| url.to_string())
}
