pub mod campaign_settings;
pub mod observable;

pub use campaign_settings::{CampaignSettingsState, CampaignSettingsStore};
pub use observable::{ObservableCell, Subscription};
