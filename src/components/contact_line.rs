use leptos::prelude::*;
use leptos_icons::Icon;

use crate::content::mailto;

#[component]
pub fn ContactLine(prompt: &'static str, email: &'static str) -> impl IntoView {
    view! {
        <p class="contact__prompt">{prompt}</p>
        <a class="contact__link" href=mailto(email)>
            <Icon icon=icondata::LuMail />
            <span>{email}</span>
        </a>
    }
}
