use campaign_console_frontend::config::{AppConfig, NEW_CLIENT_VAR};
use campaign_console_frontend::services::logging::Logger;
use campaign_console_frontend::{App, AppProps};

fn main() {
    let config = AppConfig::load();
    Logger::init(config.log_level);
    Logger::info_with_component(
        "app",
        &format!(
            "starting campaign console (log level {}, {}={:?}, new client: {})",
            config.log_level,
            NEW_CLIENT_VAR,
            config.new_client,
            config.is_new_client()
        ),
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
