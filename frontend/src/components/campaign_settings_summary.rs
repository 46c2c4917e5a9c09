use serde_json::Value;
use yew::prelude::*;

use super::info_tag::InfoTag;
use crate::config::use_app_config;
use crate::hooks::use_campaign_settings;
use crate::services::text_utils::snake_to_title_case;

fn summary_row(label: String, value: String) -> Html {
    html! {
        <div class="flex justify-between gap-4 py-1 text-sm">
            <dt class="font-medium">{ label }</dt>
            <dd>{ value }</dd>
        </div>
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Read-only view of the campaign settings draft held by the store
#[function_component(CampaignSettingsSummary)]
pub fn campaign_settings_summary() -> Html {
    let config = use_app_config();
    let draft = use_campaign_settings().state.campaign_settings;

    let new_client_notice = if config.is_new_client() {
        html! { <InfoTag class="mb-2">{ "New client flow is enabled" }</InfoTag> }
    } else {
        html! {}
    };

    if draft.is_empty() {
        return html! {
            <section class="campaign-settings-summary">
                { new_client_notice }
                <InfoTag>{ "No campaign settings chosen yet" }</InfoTag>
            </section>
        };
    }

    let mut rows = vec![summary_row(
        "Name".to_string(),
        draft.name.clone().unwrap_or_else(|| "Untitled campaign".to_string()),
    )];
    if let Some(description) = &draft.description {
        rows.push(summary_row("Description".to_string(), description.clone()));
    }
    if let Some(prospect_ids) = &draft.prospect_ids {
        rows.push(summary_row("Prospects".to_string(), prospect_ids.len().to_string()));
    }
    if let Some(limit) = draft.daily_send_limit {
        rows.push(summary_row("Daily send limit".to_string(), limit.to_string()));
    }
    if let Some(sequence) = &draft.sequence {
        rows.push(summary_row("Sequence".to_string(), snake_to_title_case(sequence.as_str())));
    }
    rows.extend(
        draft
            .extra()
            .iter()
            .map(|(key, value)| summary_row(snake_to_title_case(key.as_str()), display_value(value))),
    );

    html! {
        <section class="campaign-settings-summary">
            { new_client_notice }
            <dl>{ for rows }</dl>
        </section>
    }
}
