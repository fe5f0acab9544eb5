use leptos::prelude::*;

use crate::motion;

/// Keyframes and transitions for the placeholder page.
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! { <style>{motion::stylesheet()}</style> }
}
