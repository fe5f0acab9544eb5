//! Animation parameters for the placeholder page and the CSS they compile to.
//!
//! The page owns no timers. Every animation is a CSS animation or transition
//! generated here, so the browser drives the timing and drops it together
//! with the nodes on unmount.

use std::fmt::Write as _;
use std::time::Duration;

/// A damped harmonic oscillator pulled from 0 toward 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Section entrance.
    pub const ENTRANCE: Self = Self {
        stiffness: 100.0,
        damping: 10.0,
        mass: 1.0,
    };

    /// Hover and press feedback on the social links.
    pub const GESTURE: Self = Self {
        stiffness: 500.0,
        damping: 25.0,
        mass: 1.0,
    };

    const STEP_MS: u64 = 1;
    const REST_DELTA: f64 = 0.001;
    const REST_SPEED: f64 = 0.01;
    const MAX_STEPS: usize = 10_000;

    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Positions sampled every millisecond until the spring comes to rest.
    ///
    /// Always starts at 0 and ends at exactly 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn trajectory(&self) -> Vec<f64> {
        let dt = Self::STEP_MS as f64 / 1000.0;
        let mut position = 0.0_f64;
        let mut velocity = 0.0_f64;
        let mut samples = vec![position];

        while samples.len() < Self::MAX_STEPS {
            let force = -self.stiffness * (position - 1.0) - self.damping * velocity;
            velocity += force / self.mass * dt;
            position += velocity * dt;
            samples.push(position);

            if (1.0 - position).abs() < Self::REST_DELTA && velocity.abs() < Self::REST_SPEED {
                break;
            }
        }

        if let Some(last) = samples.last_mut() {
            *last = 1.0;
        }
        samples
    }

    #[must_use]
    pub fn settle_time(&self) -> Duration {
        let steps = self.trajectory().len().saturating_sub(1) as u64;
        Duration::from_millis(steps * Self::STEP_MS)
    }

    /// A CSS `linear()` easing that follows the spring, overshoot included.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn css_easing(&self, points: usize) -> String {
        let trajectory = self.trajectory();
        let points = points.max(2);
        let last = trajectory.len() - 1;

        let stops: Vec<String> = (0..points)
            .map(|i| {
                let index = ((i as f64 / (points - 1) as f64) * last as f64).round() as usize;
                trim_float(trajectory[index.min(last)])
            })
            .collect();

        format!("linear({})", stops.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier(pub f64, pub f64, pub f64, pub f64);

impl CubicBezier {
    pub const EASE_OUT: Self = Self(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Self = Self(0.42, 0.0, 0.58, 1.0);

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            trim_float(self.0),
            trim_float(self.1),
            trim_float(self.2),
            trim_float(self.3)
        )
    }
}

/// Sequential entrance delays for sibling sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger: Duration,
}

impl Stagger {
    pub const PAGE: Self = Self {
        delay_children: Duration::from_millis(100),
        stagger: Duration::from_millis(200),
    };

    #[must_use]
    pub fn delay(&self, index: u32) -> Duration {
        self.delay_children + self.stagger * index
    }
}

/// Page sections that slide in.
///
/// The card and the footer stagger as siblings of the outer panel; the
/// sections inside the card stagger again from the card's own start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Card,
    Logo,
    Icon,
    Title,
    Subtitle,
    Message,
    Progress,
    Social,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Self; 10] = [
        Self::Card,
        Self::Logo,
        Self::Icon,
        Self::Title,
        Self::Subtitle,
        Self::Message,
        Self::Progress,
        Self::Social,
        Self::Contact,
        Self::Footer,
    ];

    /// The section whose entrance this one is staggered under.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Card | Self::Footer => None,
            _ => Some(Self::Card),
        }
    }

    /// Position among siblings sharing the same parent.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Card | Self::Logo => 0,
            Self::Footer | Self::Icon => 1,
            Self::Title => 2,
            Self::Subtitle => 3,
            Self::Message => 4,
            Self::Progress => 5,
            Self::Social => 6,
            Self::Contact => 7,
        }
    }

    #[must_use]
    pub fn delay(self) -> Duration {
        let start = self.parent().map_or(Duration::ZERO, Self::delay);
        start + Stagger::PAGE.delay(self.order())
    }

    /// Inline style carrying this section's place in the stagger.
    #[must_use]
    pub fn reveal_style(self) -> String {
        format!("animation-delay: {}", css_seconds(self.delay()))
    }
}

/// Slide-up-and-fade entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_px: f64,
    pub spring: Spring,
}

impl Entrance {
    pub const PAGE: Self = Self {
        offset_px: 30.0,
        spring: Spring::ENTRANCE,
    };

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "@keyframes reveal {{ from {{ opacity: 0; transform: translateY({}px); }} to {{ opacity: 1; transform: none; }} }}\n\
             .reveal {{ animation: reveal {} {} both; }}\n",
            trim_float(self.offset_px),
            css_seconds(self.spring.settle_time()),
            self.spring.css_easing(EASING_POINTS),
        )
    }
}

/// Looping rotate/scale wiggle on the icon badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconWiggle {
    pub rotate_deg: [f64; 5],
    pub scale: [f64; 5],
    pub duration: Duration,
    pub repeat_delay: Duration,
}

impl IconWiggle {
    pub const BADGE: Self = Self {
        rotate_deg: [0.0, -10.0, 10.0, -10.0, 0.0],
        scale: [1.0, 1.1, 1.1, 1.1, 1.0],
        duration: Duration::from_secs(2),
        repeat_delay: Duration::from_secs(2),
    };

    /// One cycle, active motion followed by the pause.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.duration + self.repeat_delay
    }

    /// Share of the period spent moving.
    #[must_use]
    pub fn active_fraction(&self) -> f64 {
        self.duration.as_secs_f64() / self.period().as_secs_f64()
    }

    /// Keyframe offsets in percent, paired with their transform.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn keyframes(&self) -> Vec<(f64, String)> {
        let last = (self.rotate_deg.len() - 1) as f64;
        let mut frames: Vec<(f64, String)> = self
            .rotate_deg
            .iter()
            .zip(self.scale.iter())
            .enumerate()
            .map(|(i, (rotate, scale))| {
                let offset = i as f64 / last * self.active_fraction() * 100.0;
                (offset, transform(*rotate, *scale))
            })
            .collect();

        if self.repeat_delay > Duration::ZERO {
            let rest = transform(self.rotate_deg[0], self.scale[0]);
            frames.push((100.0, rest));
        }
        frames
    }

    #[must_use]
    pub fn css(&self) -> String {
        let mut css = String::from("@keyframes icon-wiggle {");
        for (offset, transform) in self.keyframes() {
            let _ = write!(css, " {}% {{ transform: {transform}; }}", trim_float(offset));
        }
        let _ = writeln!(
            css,
            " }}\n.icon-badge {{ animation: icon-wiggle {} {} infinite; }}",
            css_seconds(self.period()),
            CubicBezier::EASE_IN_OUT.css(),
        );
        css
    }
}

/// One-shot width fill of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTween {
    pub target_percent: u8,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: CubicBezier,
}

impl ProgressTween {
    pub const BAR: Self = Self {
        target_percent: crate::content::PROGRESS_PERCENT,
        duration: Duration::from_millis(1500),
        delay: Duration::from_millis(500),
        easing: CubicBezier::EASE_OUT,
    };

    /// Inline style of the fill; the keyframes animate up to this width.
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%", self.target_percent)
    }

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "@keyframes progress-fill {{ from {{ width: 0; }} }}\n\
             .progress__fill {{ animation: progress-fill {} {} {} both; }}\n",
            css_seconds(self.duration),
            self.easing.css(),
            css_seconds(self.delay),
        )
    }
}

/// Hover lift and press squash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressFeedback {
    pub hover_scale: f64,
    pub hover_lift_px: f64,
    pub press_scale: f64,
    pub spring: Spring,
}

impl PressFeedback {
    pub const SOCIAL: Self = Self {
        hover_scale: 1.15,
        hover_lift_px: 3.0,
        press_scale: 0.95,
        spring: Spring::GESTURE,
    };

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            ".social__link {{ transition: transform {} {}; }}\n\
             .social__link:hover {{ transform: translateY(-{}px) scale({}); }}\n\
             .social__link:active {{ transform: translateY(-{}px) scale({}); }}\n",
            css_seconds(self.spring.settle_time()),
            self.spring.css_easing(EASING_POINTS),
            trim_float(self.hover_lift_px),
            trim_float(self.hover_scale),
            trim_float(self.hover_lift_px),
            trim_float(self.press_scale),
        )
    }
}

const EASING_POINTS: usize = 32;

const REDUCED_MOTION: &str = "@media (prefers-reduced-motion: reduce) {\n\
    .reveal, .icon-badge, .progress__fill { animation: none; }\n\
    .social__link { transition: none; }\n\
}\n";

/// Every rule the page's animations need.
#[must_use]
pub fn stylesheet() -> String {
    [
        Entrance::PAGE.css(),
        IconWiggle::BADGE.css(),
        ProgressTween::BAR.css(),
        PressFeedback::SOCIAL.css(),
        REDUCED_MOTION.to_string(),
    ]
    .concat()
}

fn transform(rotate_deg: f64, scale: f64) -> String {
    format!(
        "rotate({}deg) scale({})",
        trim_float(rotate_deg),
        trim_float(scale)
    )
}

fn css_seconds(duration: Duration) -> String {
    format!("{}s", trim_float(duration.as_secs_f64()))
}

fn trim_float(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.abs() < f64::EPSILON {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_spring_is_underdamped_and_overshoots() {
        let spring = Spring::ENTRANCE;
        assert!((spring.damping_ratio() - 0.5).abs() < 1e-9);

        let trajectory = spring.trajectory();
        let peak = trajectory.iter().copied().fold(f64::MIN, f64::max);
        assert!(peak > 1.1, "expected overshoot, peak was {peak}");
        assert_eq!(trajectory.first().copied(), Some(0.0));
        assert_eq!(trajectory.last().copied(), Some(1.0));
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let spring = Spring {
            stiffness: 100.0,
            damping: 40.0,
            mass: 1.0,
        };
        assert!(spring.damping_ratio() > 1.0);
        assert!(spring.trajectory().iter().all(|x| *x <= 1.0));
    }

    #[test]
    fn entrance_spring_settles_in_under_two_seconds() {
        let settle = Spring::ENTRANCE.settle_time();
        assert!(settle > Duration::from_millis(800), "{settle:?}");
        assert!(settle < Duration::from_secs(2), "{settle:?}");
        assert!(Spring::GESTURE.settle_time() < settle);
    }

    #[test]
    fn css_easing_spans_zero_to_one() {
        let easing = Spring::ENTRANCE.css_easing(8);
        assert!(easing.starts_with("linear(0, "), "{easing}");
        assert!(easing.ends_with(", 1)"), "{easing}");
        assert_eq!(easing.matches(", ").count(), 7);
    }

    #[test]
    fn stagger_delays_follow_section_order() {
        assert_eq!(Section::Card.reveal_style(), "animation-delay: 0.1s");
        assert_eq!(Section::Footer.reveal_style(), "animation-delay: 0.3s");
        assert_eq!(Section::Logo.reveal_style(), "animation-delay: 0.2s");
        assert_eq!(Section::Contact.reveal_style(), "animation-delay: 1.6s");

        let inside_card: Vec<_> = Section::ALL
            .iter()
            .filter(|s| s.parent() == Some(Section::Card))
            .map(|s| s.delay())
            .collect();
        assert_eq!(inside_card.len(), 8);
        assert!(inside_card
            .windows(2)
            .all(|w| w[1] - w[0] == Stagger::PAGE.stagger));
        assert!(inside_card.iter().all(|d| *d > Section::Card.delay()));
    }

    #[test]
    fn icon_wiggle_moves_then_pauses() {
        let wiggle = IconWiggle::BADGE;
        assert_eq!(wiggle.period(), Duration::from_secs(4));

        let frames = wiggle.keyframes();
        let offsets: Vec<_> = frames.iter().map(|(o, _)| *o).collect();
        assert_eq!(offsets, [0.0, 12.5, 25.0, 37.5, 50.0, 100.0]);
        assert_eq!(frames[1].1, "rotate(-10deg) scale(1.1)");
        assert_eq!(frames[4].1, frames[5].1);
    }

    #[test]
    fn icon_wiggle_loops_forever() {
        let css = IconWiggle::BADGE.css();
        assert!(css.contains("icon-wiggle 4s"), "{css}");
        assert!(css.contains("infinite"));
        assert!(css.contains("37.5% { transform: rotate(-10deg) scale(1.1); }"));
    }

    #[test]
    fn progress_fills_once_to_target() {
        let tween = ProgressTween::BAR;
        assert_eq!(tween.fill_style(), "width: 75%");

        let css = tween.css();
        assert!(css.contains("progress-fill 1.5s cubic-bezier(0, 0, 0.58, 1) 0.5s both"));
        assert!(!css.contains("infinite"));
    }

    #[test]
    fn press_feedback_lifts_and_squashes() {
        let css = PressFeedback::SOCIAL.css();
        assert!(css.contains(":hover { transform: translateY(-3px) scale(1.15); }"));
        assert!(css.contains(":active { transform: translateY(-3px) scale(0.95); }"));
    }

    #[test]
    fn stylesheet_honours_reduced_motion() {
        let css = stylesheet();
        assert!(css.contains("@keyframes reveal"));
        assert!(css.contains("@keyframes icon-wiggle"));
        assert!(css.contains("@keyframes progress-fill"));
        assert!(css.contains("prefers-reduced-motion: reduce"));
    }

    #[test]
    fn trim_float_drops_noise() {
        assert_eq!(trim_float(0.1 + 0.2), "0.3");
        assert_eq!(trim_float(-0.0001), "0");
        assert_eq!(trim_float(12.5), "12.5");
        assert_eq!(trim_float(100.0), "100");
    }
}
