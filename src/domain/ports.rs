use crate::domain::model::Roster;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn roster_file(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Vec<String>>>;
    async fn parse(&self, grid: Vec<Vec<String>>) -> Result<Roster>;
    async fn store(&self, roster: Roster) -> Result<String>;
}
