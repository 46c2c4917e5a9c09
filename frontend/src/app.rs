use yew::prelude::*;

use crate::components::CampaignSettingsSummary;
use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <main class="container mx-auto max-w-2xl p-6">
                <h1 class="mb-4 text-2xl font-semibold">{ "New campaign" }</h1>
                <CampaignSettingsSummary />
            </main>
        </ContextProvider<AppConfig>>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_renders_summary_from_global_store() {
        let rendered = yew::ServerRenderer::<App>::with_props(|| AppProps {
            config: AppConfig::from_values(Some("true"), None).unwrap_or_default(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(rendered.contains("New campaign"));
        assert!(rendered.contains("New client flow is enabled"));
    }
}
