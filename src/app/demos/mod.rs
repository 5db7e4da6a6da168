pub mod campaign_statistics;
pub mod list_campaigns;
pub mod send_campaign;
pub mod trigger_mail;

pub use campaign_statistics::CampaignStatisticsDemo;
pub use list_campaigns::ListCampaignsDemo;
pub use send_campaign::SendCampaignDemo;
pub use trigger_mail::TriggerMailDemo;

use crate::config::toml_config::EmsConfig;
use crate::core::report::Console;
use std::sync::Arc;

/// Everything a demo needs: the remote service, local assets, output and settings.
pub struct DemoContext<E, S> {
    pub service: Arc<E>,
    pub storage: Arc<S>,
    pub console: Arc<Console>,
    pub config: Arc<EmsConfig>,
}

impl<E, S> DemoContext<E, S> {
    pub fn new(service: E, storage: S, console: Console, config: EmsConfig) -> Self {
        Self {
            service: Arc::new(service),
            storage: Arc::new(storage),
            console: Arc::new(console),
            config: Arc::new(config),
        }
    }
}

// 手動實作，避免要求 E、S 本身 Clone
impl<E, S> Clone for DemoContext<E, S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            storage: Arc::clone(&self.storage),
            console: Arc::clone(&self.console),
            config: Arc::clone(&self.config),
        }
    }
}
