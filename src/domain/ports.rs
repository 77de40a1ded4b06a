use crate::domain::model::{LocationQuery, RawSkipRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where raw skip records come from. One call is one attempt; callers own retries.
#[async_trait]
pub trait SkipSource: Send + Sync {
    async fn fetch_skips(&self, query: &LocationQuery) -> Result<Vec<RawSkipRecord>>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn postcode(&self) -> &str;
    fn area(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;

    fn location_query(&self) -> LocationQuery {
        LocationQuery::new(self.postcode(), self.area().map(str::to_string))
    }
}
