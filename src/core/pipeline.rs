use crate::core::input::{InputHandler, SearchForm, SubmitEvent};
use crate::core::renderer::DetailRenderer;
use crate::core::resolver::SearchResolver;
use crate::domain::model::{ImageElement, ResponsePolicy, SearchTerm};
use crate::domain::ports::{Container, MuseumApi};
use crate::utils::error::{Result, SearchError};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Search, then details. The detail request is never issued before the
/// search response has been parsed.
pub struct SearchPipeline<A: MuseumApi, C: Container> {
    resolver: SearchResolver<A>,
    renderer: DetailRenderer<A, C>,
}

impl<A: MuseumApi, C: Container> SearchPipeline<A, C> {
    pub fn new(api: Arc<A>, container: Arc<C>, policy: ResponsePolicy) -> Self {
        Self {
            resolver: SearchResolver::new(api.clone(), policy),
            renderer: DetailRenderer::new(api, container, policy),
        }
    }

    pub async fn run(&self, term: SearchTerm) -> Result<ImageElement> {
        let object = self.resolver.resolve(&term).await?;
        self.renderer.render(object).await
    }
}

/// One in-flight submit-to-render cycle.
pub struct Submission {
    term: SearchTerm,
    handle: JoinHandle<Result<ImageElement>>,
}

impl Submission {
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    pub async fn outcome(self) -> Result<ImageElement> {
        self.handle.await.map_err(|e| SearchError::TaskFailed {
            message: e.to_string(),
        })?
    }
}

/// The page: a search form wired to a pipeline. Each submission runs on its
/// own task, so overlapping submissions race and land in completion order.
pub struct SearchPage<A: MuseumApi, C: Container> {
    form: SearchForm,
    handler: InputHandler,
    pipeline: Arc<SearchPipeline<A, C>>,
}

impl<A, C> SearchPage<A, C>
where
    A: MuseumApi + 'static,
    C: Container + 'static,
{
    pub fn new(form: SearchForm, pipeline: SearchPipeline<A, C>) -> Self {
        Self {
            form,
            handler: InputHandler,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    /// Must be called from within a tokio runtime.
    pub fn submit(&self, event: &mut SubmitEvent) -> Submission {
        let term = self.handler.on_submit(event, &self.form);
        let pipeline = Arc::clone(&self.pipeline);
        let task_term = term.clone();

        let handle = tokio::spawn(async move {
            let result = pipeline.run(task_term.clone()).await;
            if let Err(e) = &result {
                tracing::error!("Search for {:?} failed: {}", task_term.as_str(), e);
            }
            result
        });

        Submission { term, handle }
    }

    /// Convenience for hosts: set the input value, then submit.
    pub fn type_and_submit(&mut self, value: &str) -> Submission {
        self.form.set_value(value);
        self.submit(&mut SubmitEvent::new())
    }
}
