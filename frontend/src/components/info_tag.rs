use yew::prelude::*;

use crate::services::class_names::cn;

#[derive(Properties, PartialEq)]
pub struct InfoTagProps {
    #[prop_or_default]
    pub children: Html,
    /// Extra classes; conflicting utilities override the defaults
    #[prop_or_default]
    pub class: AttrValue,
}

/// Small muted line of text with a leading info icon
#[function_component(InfoTag)]
pub fn info_tag(props: &InfoTagProps) -> Html {
    let class = cn!(
        "flex items-center gap-1 text-xs text-muted-foreground",
        props.class.clone()
    );

    html! {
        <div class={class}>
            <svg
                data-icon="info"
                class="h-3.5 w-3.5 shrink-0"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <circle cx="12" cy="12" r="10" />
                <path d="M12 16v-4" />
                <path d="M12 8h.01" />
            </svg>
            <span>{ props.children.clone() }</span>
        </div>
    }
}
