pub mod use_campaign_settings;

pub use use_campaign_settings::{use_campaign_settings, UseCampaignSettingsActions, UseCampaignSettingsResult};
