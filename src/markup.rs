//! Markup queries over fetched pages.
//!
//! Thin layer over `scraper`: pick elements by tag and class, read their
//! visible text and first outgoing link. Results are owned so no parsed
//! document outlives the call (the DOM is not `Send`).

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

/// Visible text and first link of a matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCell {
    /// Text of the first `<a>` inside the element, or of the element itself
    pub text: String,
    /// `href` of that `<a>`, when it has one
    pub href: Option<String>,
}

/// Build a selector for `tag` elements carrying every class in `classes`.
///
/// `("td", "tal qx")` becomes `td.tal.qx`.
pub fn tag_class_selector(tag: &str, classes: &str) -> Result<Selector> {
    let mut css = tag.to_string();
    for class in classes.split_whitespace() {
        css.push('.');
        css.push_str(class);
    }
    parse_selector(&css)
}

/// Parse a CSS selector, mapping failures into our error type.
pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::parse(format!("invalid selector {css:?}: {e:?}")))
}

/// Visible text of an element, pieces joined as they appear.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Every `tag.classes` element of the page, as link cells, in document order.
pub fn select_link_cells(markup: &str, (tag, classes): (&str, &str)) -> Result<Vec<LinkCell>> {
    let cell_sel = tag_class_selector(tag, classes)?;
    let link_sel = parse_selector("a")?;
    let doc = Html::parse_document(markup);

    let cells: Vec<LinkCell> = doc
        .select(&cell_sel)
        .map(|cell| match cell.select(&link_sel).next() {
            Some(link) => LinkCell {
                text: element_text(link),
                href: link.value().attr("href").map(str::to_string),
            },
            None => LinkCell { text: element_text(cell), href: None },
        })
        .collect();
    Ok(cells)
}

/// Text of the first element matching `css`, if any.
pub fn select_first_text(markup: &str, css: &str) -> Result<Option<String>> {
    let selector = parse_selector(css)?;
    let doc = Html::parse_document(markup);
    let text = doc.select(&selector).next().map(element_text);
    Ok(text)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const PAGE: &str = r#"
        <table>
          <tr><td class="tal qx"><strong><a href="/lyric/1/Flowers">Flowers</a></strong></td></tr>
          <tr><td class="tal qx"><a href="/lyric/2/Jaded">Jaded <i>(Live)</i></a></td></tr>
          <tr><td class="tal fx">No link here</td></tr>
          <tr><td class="tal qx extra"><a>Orphan</a></td></tr>
        </table>
        <pre id="lyric-body-text">line one
line two</pre>
    "#;

    #[test]
    fn selector_joins_classes() {
        assert!(tag_class_selector("td", "tal qx").is_ok());
        assert!(parse_selector("td[").is_err());
    }

    #[test]
    fn link_cells_in_document_order() {
        let cells = select_link_cells(PAGE, ("td", "tal qx")).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].text, "Flowers");
        assert_eq!(cells[0].href.as_deref(), Some("/lyric/1/Flowers"));
        assert_eq!(cells[1].text, "Jaded (Live)");
        assert_eq!(cells[2].href, None);
    }

    #[test]
    fn cell_without_link_keeps_text() {
        let cells = select_link_cells(PAGE, ("td", "tal fx")).unwrap();
        assert_eq!(cells, vec![LinkCell { text: "No link here".into(), href: None }]);
    }

    #[test]
    fn first_text_reads_pre_block() {
        let text = select_first_text(PAGE, "pre#lyric-body-text").unwrap();
        assert_eq!(text.as_deref(), Some("line one\nline two"));
        assert_eq!(select_first_text(PAGE, "pre#missing").unwrap(), None);
    }
}
