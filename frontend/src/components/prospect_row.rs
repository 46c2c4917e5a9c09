use shared::Prospect;
use yew::prelude::*;

use super::status_badge::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct ProspectRowProps {
    pub prospect: Prospect,
}

/// One prospect in a campaign's recipient list
#[function_component(ProspectRow)]
pub fn prospect_row(props: &ProspectRowProps) -> Html {
    let prospect = &props.prospect;
    let name = prospect.display_name();
    // The email is already the heading when no name is known
    let show_email = name != prospect.email;

    html! {
        <li class="prospect-row flex items-center justify-between gap-3 py-2" data-prospect-id={prospect.id.clone()}>
            <div class="min-w-0">
                <p class="truncate text-sm font-medium">{ name }</p>
                if show_email {
                    <p class="truncate text-xs text-muted-foreground">{ prospect.email.clone() }</p>
                }
                if let Some(company) = &prospect.company_name {
                    <p class="truncate text-xs">{ company.clone() }</p>
                }
            </div>
            <StatusBadge status={prospect.status} />
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::RecordStatus;

    fn prospect() -> Prospect {
        Prospect {
            id: "prs_01".to_string(),
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            company_name: Some("Analytical Engines".to_string()),
            info: None,
            linkedin_url: None,
            sequence: None,
            status: RecordStatus::Active,
        }
    }

    async fn render(prospect: Prospect) -> String {
        yew::ServerRenderer::<ProspectRow>::with_props(move || ProspectRowProps { prospect })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_named_prospect() {
        let rendered = render(prospect()).await;
        assert!(rendered.contains(">Ada Lovelace</p>"));
        assert!(rendered.contains(">ada@example.com</p>"));
        assert!(rendered.contains(">Analytical Engines</p>"));
        assert!(rendered.contains(r#"data-prospect-id="prs_01""#));
        assert!(rendered.contains(">Active</span>"));
    }

    #[tokio::test]
    async fn test_unnamed_prospect_shows_email_once() {
        let mut prospect = prospect();
        prospect.first_name = None;
        prospect.last_name = None;
        prospect.company_name = None;
        prospect.status = RecordStatus::Inactive;

        let rendered = render(prospect).await;
        assert_eq!(rendered.matches("ada@example.com").count(), 1);
        assert!(rendered.contains(">Inactive</span>"));
    }
}
