pub mod campaign_card;
pub mod campaign_settings_summary;
pub mod info_tag;
pub mod prospect_row;
pub mod status_badge;

pub use campaign_card::CampaignCard;
pub use campaign_settings_summary::CampaignSettingsSummary;
pub use info_tag::InfoTag;
pub use prospect_row::ProspectRow;
pub use status_badge::StatusBadge;
