use crate::ssr::{escape_attr, escape_text};
use indexmap::IndexMap;
use std::fmt::Write;

/// How a rendered page references the aggregated stylesheet and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLinking {
    Inline,
    External { stylesheet: String, script: String },
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDocument {
    pub title: String,
    /// CSS blocks in discovery order, palette first.
    pub styles: Vec<String>,
    /// JS blocks in discovery order.
    pub scripts: Vec<String>,
    /// Sprite symbols by icon id.
    pub icons: IndexMap<String, String>,
    /// Navigation fragment, also the first entry of `body`.
    pub navigation: String,
    /// Body fragments: navigation, mount point, then public module HTML.
    pub body: Vec<String>,
}

impl AggregatedDocument {
    pub fn stylesheet(&self) -> String {
        join_blocks(&self.styles)
    }

    pub fn script(&self) -> String {
        join_blocks(&self.scripts)
    }

    /// Hidden SVG sprite; each icon is wrapped in a `<symbol>` with its id.
    pub fn sprite(&self) -> String {
        if self.icons.is_empty() {
            return String::new();
        }
        let mut svg = String::from(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"display:none\">\n",
        );
        for (id, markup) in &self.icons {
            let _ = writeln!(svg, "<symbol id=\"{}\">{}</symbol>", escape_attr(id), markup);
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn body_html(&self) -> String {
        let mut html = String::new();
        for fragment in &self.body {
            html.push_str(fragment);
            if !fragment.ends_with('\n') {
                html.push('\n');
            }
        }
        html
    }

    pub fn render_page(&self, linking: &AssetLinking) -> String {
        let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(page, "<title>{}</title>", escape_text(&self.title));

        match linking {
            AssetLinking::Inline => {
                if !self.styles.is_empty() {
                    let _ = write!(page, "<style>\n{}</style>\n", self.stylesheet());
                }
            }
            AssetLinking::External { stylesheet, .. } => {
                let _ = writeln!(page, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(stylesheet));
            }
        }

        page.push_str("</head>\n<body>\n");
        page.push_str(&self.sprite());
        page.push_str(&self.body_html());

        match linking {
            AssetLinking::Inline => {
                if !self.scripts.is_empty() {
                    let _ = write!(page, "<script>\n{}</script>\n", self.script());
                }
            }
            AssetLinking::External { script, .. } => {
                let _ = writeln!(page, "<script src=\"{}\"></script>", escape_attr(script));
            }
        }

        page.push_str("</body>\n</html>\n");
        page
    }
}

fn join_blocks(blocks: &[String]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(block);
        if !block.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
