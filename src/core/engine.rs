use crate::core::page::SkipPage;
use crate::core::transform::SkipTransformer;
use crate::domain::model::{LocationQuery, ViewSkipRecord};
use crate::domain::ports::SkipSource;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs one fetch-and-transform cycle and settles a fresh page with it.
pub struct SkipEngine<S: SkipSource> {
    source: S,
    transformer: SkipTransformer<'static>,
}

impl<S: SkipSource> SkipEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            transformer: SkipTransformer::default(),
        }
    }

    /// Fetches once and transforms. No retry.
    pub async fn load(&self, query: &LocationQuery) -> Result<Vec<ViewSkipRecord>> {
        let started = Instant::now();

        tracing::info!("Fetching skips for {}", query.label());
        let raw = self.source.fetch_skips(query).await?;
        tracing::info!("Fetched {} skip records in {:?}", raw.len(), started.elapsed());

        let skips = self.transformer.transform(raw);
        tracing::info!("{} skips available for {}", skips.len(), query.label());
        Ok(skips)
    }

    /// Builds the page for `query`. Calling this again is the reload action.
    pub async fn run(&self, query: &LocationQuery) -> Result<SkipPage> {
        let mut page = SkipPage::new();

        let outcome = self.load(query).await;
        if let Err(e) = &outcome {
            tracing::error!(
                "Failed to load skips: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
        }

        page.finish_loading(outcome)?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageState;
    use crate::core::transform::raw_skip;
    use crate::domain::model::RawSkipRecord;
    use crate::utils::error::{SkipError, LOAD_FAILURE_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct MockSource {
        records: Vec<RawSkipRecord>,
        fail_with_status: Option<u16>,
        calls: Arc<AtomicUsize>,
    }

    impl MockSource {
        fn with_records(records: Vec<RawSkipRecord>) -> Self {
            Self {
                records,
                fail_with_status: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(code: u16) -> Self {
            Self {
                records: vec![raw_skip(1, 4, false, false, true)],
                fail_with_status: Some(code),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl SkipSource for MockSource {
        async fn fetch_skips(&self, _query: &LocationQuery) -> Result<Vec<RawSkipRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with_status {
                Some(code) => Err(SkipError::HttpStatusError { code }),
                None => Ok(self.records.clone()),
            }
        }
    }

    fn query() -> LocationQuery {
        LocationQuery::new("LE10", Some("Hinckley".to_string()))
    }

    #[tokio::test]
    async fn test_run_builds_ready_page() {
        let source = MockSource::with_records(vec![
            raw_skip(1, 8, false, true, true),
            raw_skip(2, 4, true, false, true),
            raw_skip(3, 6, false, false, false),
        ]);
        let calls = source.calls.clone();
        let engine = SkipEngine::new(source);

        let page = engine.run(&query()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let ids: Vec<u64> = page.skips().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(page.selected_id(), None);
    }

    #[tokio::test]
    async fn test_run_failure_yields_error_page_not_partial_list() {
        let source = MockSource::failing(502);
        let calls = source.calls.clone();
        let engine = SkipEngine::new(source);

        let page = engine.run(&query()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(page.state(), &PageState::Error(LOAD_FAILURE_MESSAGE.to_string()));
        assert!(page.skips().is_empty());
    }

    #[tokio::test]
    async fn test_load_propagates_typed_error() {
        let engine = SkipEngine::new(MockSource::failing(404));
        let result = engine.load(&query()).await;
        assert!(matches!(result, Err(SkipError::HttpStatusError { code: 404 })));
    }

    #[tokio::test]
    async fn test_each_run_fetches_again() {
        let source = MockSource::with_records(vec![raw_skip(1, 4, false, false, true)]);
        let calls = source.calls.clone();
        let engine = SkipEngine::new(source);

        engine.run(&query()).await.unwrap();
        engine.run(&query()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
