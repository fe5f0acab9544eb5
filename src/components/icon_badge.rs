use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
pub fn IconBadge(icon: icondata::Icon) -> impl IntoView {
    view! {
        <div class="icon-badge" aria-hidden="true">
            <Icon icon=icon />
        </div>
    }
}
