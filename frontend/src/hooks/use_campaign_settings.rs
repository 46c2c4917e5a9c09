use shared::CreateCampaignSettings;
use yew::prelude::*;

use crate::store::{CampaignSettingsState, CampaignSettingsStore};

pub struct UseCampaignSettingsResult {
    pub state: CampaignSettingsState,
    pub actions: UseCampaignSettingsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCampaignSettingsActions {
    pub set_campaign_settings: Callback<CreateCampaignSettings>,
}

/// Subscribe the calling component to the campaign settings store.
///
/// Uses the store from the nearest `ContextProvider<CampaignSettingsStore>`,
/// or the global store. The component re-renders on every replacement.
#[hook]
pub fn use_campaign_settings() -> UseCampaignSettingsResult {
    let store = use_context::<CampaignSettingsStore>().unwrap_or_else(CampaignSettingsStore::global);

    let settings = {
        let store = store.clone();
        use_state_eq(move || store.campaign_settings())
    };

    {
        let settings = settings.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = {
                let settings = settings.clone();
                store.subscribe(move |draft| settings.set(draft.clone()))
            };
            // Catch a replacement made between the first render and now
            settings.set(store.campaign_settings());
            move || drop(subscription)
        });
    }

    let set_campaign_settings = use_callback(store, |settings: CreateCampaignSettings, store| {
        store.set_campaign_settings(settings);
    });

    UseCampaignSettingsResult {
        state: CampaignSettingsState {
            campaign_settings: (*settings).clone(),
        },
        actions: UseCampaignSettingsActions { set_campaign_settings },
    }
}
