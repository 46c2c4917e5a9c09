use shared::Campaign;
use yew::prelude::*;

use super::status_badge::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct CampaignCardProps {
    pub campaign: Campaign,
}

/// "Mar 18, 2024" when `created_at` parses, the raw value otherwise
pub fn format_created_at(campaign: &Campaign) -> String {
    campaign
        .created_at_datetime()
        .map(|created| created.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| campaign.created_at.clone())
}

#[function_component(CampaignCard)]
pub fn campaign_card(props: &CampaignCardProps) -> Html {
    let campaign = &props.campaign;

    html! {
        <article class="campaign-card rounded-lg border p-4" data-campaign-id={campaign.id.clone()}>
            <header class="flex items-center justify-between gap-2">
                <h3 class="text-base font-semibold">{ campaign.name.clone() }</h3>
                <StatusBadge status={campaign.status} />
            </header>
            if let Some(description) = &campaign.description {
                <p class="mt-1 text-sm text-muted-foreground">{ description.clone() }</p>
            }
            <dl class="mt-3 flex gap-4 text-xs">
                <div>
                    <dt>{ "Created" }</dt>
                    <dd>{ format_created_at(campaign) }</dd>
                </div>
                <div>
                    <dt>{ "Prospects" }</dt>
                    <dd>{ campaign.total_prospects.to_string() }</dd>
                </div>
                <div>
                    <dt>{ "Mails sent" }</dt>
                    <dd>{ campaign.total_mails_sent.to_string() }</dd>
                </div>
            </dl>
        </article>
    }
}
