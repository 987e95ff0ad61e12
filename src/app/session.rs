use crate::adapters::{HtmlPage, MetMuseumClient};
use crate::core::input::SearchForm;
use crate::core::pipeline::{SearchPage, SearchPipeline, Submission};
use crate::core::{ConfigProvider, Container, ImageElement, SearchTerm, Storage};
use crate::utils::error::{Result, SearchError};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Default)]
pub struct SessionReport {
    pub succeeded: Vec<(SearchTerm, ImageElement)>,
    pub failed: Vec<(SearchTerm, SearchError)>,
}

impl SessionReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_failed(&self) -> bool {
        self.total() > 0 && self.succeeded.is_empty()
    }
}

/// Hosts one page against the real HTTP client: the program's stand-in for
/// a browser tab.
pub struct SearchSession<S: Storage> {
    page: SearchPage<MetMuseumClient, HtmlPage>,
    container: Arc<HtmlPage>,
    storage: S,
    output_path: String,
    page_file: String,
}

impl<S: Storage> SearchSession<S> {
    pub fn from_config<C: ConfigProvider>(config: &C, storage: S) -> Result<Self> {
        let api = Arc::new(MetMuseumClient::with_timeout(
            config.api_base_url(),
            config.request_timeout(),
        )?);
        let container = Arc::new(HtmlPage::new(config.page_title()));
        let pipeline = SearchPipeline::new(api, container.clone(), config.response_policy());

        tracing::debug!(
            "Session ready: api={}, policy={:?}, timeout={:?}",
            config.api_base_url(),
            config.response_policy(),
            config.request_timeout()
        );

        Ok(Self {
            page: SearchPage::new(SearchForm::new(), pipeline),
            container,
            storage,
            output_path: config.output_path().to_string(),
            page_file: config.page_file().to_string(),
        })
    }

    /// Types `value` into the search input and submits the form. Returns
    /// immediately; the cycle runs in the background.
    pub fn submit(&mut self, value: &str) -> Submission {
        self.page.type_and_submit(value)
    }

    /// Submits one term per line of `reader` until EOF. A line that is not
    /// UTF-8 is skipped; a read error ends input. Neither abandons the
    /// submissions already made.
    pub async fn submit_lines<R>(&mut self, mut reader: R) -> Vec<Submission>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut submissions = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    line_no += 1;
                    let bytes = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
                    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
                    match std::str::from_utf8(bytes) {
                        Ok(line) => submissions.push(self.submit(line)),
                        Err(e) => tracing::warn!("Skipping input line {}: {}", line_no, e),
                    }
                }
                Err(e) => {
                    tracing::warn!("Stopped reading input after line {}: {}", line_no, e);
                    break;
                }
            }
        }

        submissions
    }

    pub async fn collect(&self, submissions: Vec<Submission>) -> SessionReport {
        let mut report = SessionReport::default();
        for submission in submissions {
            let term = submission.term().clone();
            match submission.outcome().await {
                Ok(image) => report.succeeded.push((term, image)),
                Err(e) => report.failed.push((term, e)),
            }
        }
        report
    }

    /// Submits every term without waiting in between, then waits for all.
    pub async fn run_all<I, T>(&mut self, terms: I) -> SessionReport
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let submissions: Vec<Submission> = terms
            .into_iter()
            .map(|term| self.submit(term.as_ref()))
            .collect();
        self.collect(submissions).await
    }

    pub async fn images(&self) -> Vec<ImageElement> {
        self.container.children().await
    }

    /// Writes the rendered page and returns where it went.
    pub async fn save(&self) -> Result<String> {
        let html = self.container.render().await;
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage
            .write_file(&self.page_file, html.as_bytes())
            .await?;

        Ok(Path::new(&self.output_path)
            .join(&self.page_file)
            .to_string_lossy()
            .into_owned())
    }
}
