use crate::domain::model::ImageElement;
use crate::domain::ports::Container;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory stand-in for the page's `<main>` element. Images accumulate;
/// nothing is ever removed.
#[derive(Debug, Default)]
pub struct HtmlPage {
    title: String,
    images: Mutex<Vec<ImageElement>>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            images: Mutex::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.images.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.lock().await.is_empty()
    }

    /// Serializes the whole document, search form included, with the
    /// container's children in document order.
    pub async fn render(&self) -> String {
        let images = self.images.lock().await;
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(&format!("  <title>{}</title>\n", escape(&self.title)));
        html.push_str("</head>\n<body>\n");
        html.push_str("  <form id=\"search\">\n");
        html.push_str("    <input type=\"text\" name=\"q\">\n");
        html.push_str("  </form>\n");
        html.push_str("  <main>\n");
        for image in images.iter() {
            html.push_str(&format!("    <img src=\"{}\">\n", escape(&image.src)));
        }
        html.push_str("  </main>\n</body>\n</html>\n");
        html
    }
}

#[async_trait]
impl Container for HtmlPage {
    async fn prepend(&self, image: ImageElement) {
        self.images.lock().await.insert(0, image);
    }

    async fn children(&self) -> Vec<ImageElement> {
        self.images.lock().await.clone()
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
