use crate::{config::AppConfig, scrape, session::Session};

pub struct AppContext {
    pub config: AppConfig,
    pub session: Session,
    pub scraper: scrape::Client,
}

impl AppContext {
    pub fn write_session(&self) -> anyhow::Result<()> {
        self.session.write_to(&self.config.session_file_path.0)
    }
}
