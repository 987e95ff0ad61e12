use crate::domain::model::{ObjectRef, ResponsePolicy, SearchResultSet, SearchTerm};
use crate::domain::ports::MuseumApi;
use crate::utils::error::Result;
use std::sync::Arc;

/// First step: term in, top object reference out.
pub struct SearchResolver<A: MuseumApi> {
    api: Arc<A>,
    policy: ResponsePolicy,
}

impl<A: MuseumApi> SearchResolver<A> {
    pub fn new(api: Arc<A>, policy: ResponsePolicy) -> Self {
        Self { api, policy }
    }

    pub async fn resolve(&self, term: &SearchTerm) -> Result<ObjectRef> {
        let response = self.api.search(term).await?;
        response.check_status(self.policy)?;

        let results = SearchResultSet::parse(&response)?;
        let top = results.top_ref(self.policy, &response.url)?;

        match top {
            ObjectRef::Id(id) => tracing::debug!(
                "Top result for {:?}: {} (of {})",
                term.as_str(),
                id,
                results.object_ids.len()
            ),
            ObjectRef::Undefined => tracing::warn!(
                "No results for {:?}, requesting details for an undefined object",
                term.as_str()
            ),
        }

        Ok(top)
    }
}
