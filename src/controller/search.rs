use std::sync::Arc;

use crate::remote::error::RemoteError;
use crate::remote::service::RemoteService;
use crate::state::results::{self, SearchEntry};

pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Every kind gets at least this many requested results, so none starves
/// under a small overall limit.
pub const PER_KIND_FLOOR: u32 = 5;

#[derive(Clone)]
pub struct SearchController {
    service: Arc<dyn RemoteService>,
    limit: u32,
}

impl SearchController {
    pub fn new(service: Arc<dyn RemoteService>) -> Self {
        Self {
            service,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Runs a catalog search. Blank queries and missing sessions are
    /// refused before any service call.
    pub async fn search(
        &self,
        query: &str,
        authenticated: bool,
    ) -> Result<Vec<SearchEntry>, RemoteError> {
        if query.trim().is_empty() {
            return Err(RemoteError::EmptyQuery);
        }
        if !authenticated {
            return Err(RemoteError::NotAuthenticated);
        }
        let per_kind = (self.limit / 4).max(PER_KIND_FLOOR);
        let items = self.service.search(query, per_kind).await?;
        Ok(results::ingest(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::FakeRemote;
    use crate::remote::model::{RawSearchItem, ResultKind};

    fn controller(fake: FakeRemote) -> (SearchController, Arc<FakeRemote>) {
        let fake = Arc::new(fake);
        (SearchController::new(fake.clone()), fake)
    }

    #[tokio::test]
    async fn blank_query_never_contacts_the_service() {
        let (search, fake) = controller(FakeRemote::new());
        assert_eq!(
            search.search("   ", true).await,
            Err(RemoteError::EmptyQuery)
        );
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn unauthenticated_search_is_refused_without_a_call() {
        let (search, fake) = controller(FakeRemote::new());
        assert_eq!(
            search.search("beatles", false).await,
            Err(RemoteError::NotAuthenticated)
        );
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn requests_the_per_kind_floor_under_the_default_limit() {
        let (search, fake) = controller(FakeRemote::new());
        search.search("beatles", true).await.unwrap();
        assert_eq!(fake.calls(), vec!["search:beatles:5"]);
    }

    #[tokio::test]
    async fn ingests_raw_items_and_drops_unplayable_ones() {
        let playable = {
            let mut item = RawSearchItem::new(ResultKind::Track, "spotify:track:1");
            item.name = Some("Yesterday".to_string());
            item.artist = Some("The Beatles".to_string());
            item
        };
        let unplayable = RawSearchItem::new(ResultKind::Track, "");
        let (search, _fake) =
            controller(FakeRemote::with_search_items(vec![unplayable, playable]));

        let entries = search.search("yesterday", true).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Yesterday – The Beatles");
    }

    #[tokio::test]
    async fn service_failure_is_reported_as_such() {
        let mut fake = FakeRemote::new();
        fake.fail_search = true;
        let (search, _fake) = controller(fake);
        assert!(matches!(
            search.search("beatles", true).await,
            Err(RemoteError::Service(_))
        ));
    }
}
