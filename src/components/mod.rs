mod contact_line;
mod icon_badge;
mod motion_styles;
mod placeholder_page;
mod progress_bar;
mod reveal;
mod social_links;

pub use contact_line::ContactLine;
pub use icon_badge::IconBadge;
pub use motion_styles::MotionStyles;
pub use placeholder_page::PlaceholderPage;
pub use progress_bar::ProgressBar;
pub use reveal::Reveal;
pub use social_links::SocialLinks;
