use shared::{CampaignSettingsDraft, CreateCampaignSettings};

use super::observable::{ObservableCell, Subscription};
use crate::services::logging::Logger;

thread_local! {
    static GLOBAL_STORE: CampaignSettingsStore = CampaignSettingsStore::new();
}

/// Snapshot of the store, as handed to readers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignSettingsState {
    pub campaign_settings: CampaignSettingsDraft,
}

/// Holds the campaign-creation draft shared by every view in the session.
///
/// The draft starts as the empty object and is only ever replaced whole
/// through [`CampaignSettingsStore::set_campaign_settings`].
#[derive(Clone, PartialEq)]
pub struct CampaignSettingsStore {
    cell: ObservableCell<CampaignSettingsDraft>,
}

impl Default for CampaignSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignSettingsStore {
    /// A fresh, empty store, independent of the global one
    pub fn new() -> Self {
        Self {
            cell: ObservableCell::new(CampaignSettingsDraft::default()),
        }
    }

    /// The session-wide store, created empty on first use
    pub fn global() -> Self {
        GLOBAL_STORE.with(Clone::clone)
    }

    pub fn get_state(&self) -> CampaignSettingsState {
        CampaignSettingsState {
            campaign_settings: self.campaign_settings(),
        }
    }

    pub fn campaign_settings(&self) -> CampaignSettingsDraft {
        self.cell.get()
    }

    /// Replace the stored draft with `settings`; no field-level merge
    pub fn set_campaign_settings(&self, settings: CreateCampaignSettings) {
        Logger::debug_with_component(
            "campaign-settings-store",
            &format!(
                "replacing campaign settings (name: {:?}, {} prospects, {} extra fields)",
                settings.name,
                settings.prospect_ids.len(),
                settings.extra().len()
            ),
        );
        self.cell.set(settings.into());
    }

    pub fn subscribe(&self, observer: impl Fn(&CampaignSettingsDraft) + 'static) -> Subscription {
        self.cell.subscribe(observer)
    }

    pub fn subscriber_count(&self) -> usize {
        self.cell.observer_count()
    }
}
