use leptos::prelude::*;
use leptos_icons::Icon;

use crate::content::SocialLink;

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <ul class="social__list">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a
                                class="social__link"
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                            >
                                <Icon icon=link.kind.icon() />
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
