use anyhow::Result;

pub trait ProcessLauncher: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}
