use leptos::prelude::*;

use super::{ContactLine, IconBadge, MotionStyles, ProgressBar, Reveal, SocialLinks};
use crate::content::{
    CONTACT_EMAIL, CONTACT_PROMPT, FOOTER, LOGO_ALT, LOGO_SRC, MESSAGE_LEAD, MESSAGE_TAIL,
    PROGRESS_LABEL, SITE_NAME, SOCIAL_HEADING, SOCIAL_LINKS, SUBTITLE, TITLE,
};
use crate::motion::{ProgressTween, Section};

/// The whole "under construction" page.
///
/// Sections slide in one after another; the badge wiggles on a loop and the
/// progress bar fills once. None of it needs input or can fail.
#[component]
pub fn PlaceholderPage() -> impl IntoView {
    view! {
        <MotionStyles />
        <div class="placeholder">
            <div class="placeholder__panel">
                <Reveal section=Section::Card class="placeholder__card">
                    <Reveal section=Section::Logo class="placeholder__logo">
                        <img src=LOGO_SRC alt=LOGO_ALT />
                    </Reveal>

                    <Reveal section=Section::Icon class="placeholder__icon">
                        <IconBadge icon=icondata::LuConstruction />
                    </Reveal>

                    <Reveal section=Section::Title>
                        <h1 class="placeholder__title">{TITLE}</h1>
                    </Reveal>

                    <Reveal section=Section::Subtitle>
                        <p class="placeholder__subtitle">{SUBTITLE}</p>
                    </Reveal>

                    <Reveal section=Section::Message class="placeholder__message">
                        <p>
                            {MESSAGE_LEAD}
                            <span class="placeholder__brand">{SITE_NAME}</span>
                            {MESSAGE_TAIL}
                        </p>
                    </Reveal>

                    <Reveal section=Section::Progress>
                        <ProgressBar label=PROGRESS_LABEL tween=ProgressTween::BAR />
                    </Reveal>

                    <Reveal section=Section::Social class="placeholder__social">
                        <p class="placeholder__social-heading">{SOCIAL_HEADING}</p>
                        <SocialLinks links=&SOCIAL_LINKS />
                    </Reveal>

                    <Reveal section=Section::Contact class="placeholder__contact">
                        <ContactLine prompt=CONTACT_PROMPT email=CONTACT_EMAIL />
                    </Reveal>
                </Reveal>

                <Reveal section=Section::Footer>
                    <p class="placeholder__footer">{FOOTER}</p>
                </Reveal>
            </div>
        </div>
    }
}
