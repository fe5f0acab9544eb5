use leptos::prelude::*;

use crate::content::percent_label;
use crate::motion::ProgressTween;

/// Labelled bar whose fill grows to the tween's target once, on first paint.
#[component]
pub fn ProgressBar(label: &'static str, tween: ProgressTween) -> impl IntoView {
    let percent = tween.target_percent.to_string();
    let value = percent_label(tween.target_percent);

    view! {
        <div class="progress">
            <div class="progress__header">
                <span class="progress__label">{label}</span>
                <span class="progress__value">{value}</span>
            </div>
            <div
                class="progress__track"
                role="progressbar"
                aria-label=label
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percent
            >
                <div class="progress__fill" style=tween.fill_style()></div>
            </div>
        </div>
    }
}
