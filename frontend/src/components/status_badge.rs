use shared::RecordStatus;
use yew::prelude::*;

use crate::services::class_names::cn;
use crate::services::text_utils::snake_to_title_case;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: RecordStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let active = props.status.is_active();
    let class = cn!(
        "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium",
        active.then_some("bg-emerald-100 text-emerald-700"),
        (!active).then_some("bg-muted text-muted-foreground"),
    );

    html! {
        <span class={class} data-status={props.status.as_str()}>
            { snake_to_title_case(props.status.as_str()) }
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    async fn render(status: RecordStatus) -> String {
        yew::ServerRenderer::<StatusBadge>::with_props(move || StatusBadgeProps { status })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_active_badge() {
        let rendered = render(RecordStatus::Active).await;
        assert!(rendered.contains(">Active</span>"));
        assert!(rendered.contains(r#"data-status="active""#));
        assert!(rendered.contains("text-emerald-700"));
        assert!(!rendered.contains("text-muted-foreground"));
    }

    #[tokio::test]
    async fn test_inactive_badge() {
        let rendered = render(RecordStatus::Inactive).await;
        assert!(rendered.contains(">Inactive</span>"));
        assert!(rendered.contains("bg-muted"));
        assert!(!rendered.contains("emerald"));
    }
}
