use leptos::prelude::*;

use crate::motion::Section;

/// Slides its children up into place when the section's turn in the stagger comes.
#[component]
pub fn Reveal(
    section: Section,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div class=class style=section.reveal_style()>
            {children()}
        </div>
    }
}
