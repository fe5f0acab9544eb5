//! Static copy and link data for the placeholder page.
//!
//! Everything here is fixed at compile time; the page renders it verbatim.

use icondata::Icon;

pub const SITE_NAME: &str = "De Leon Rehab";
pub const DOCUMENT_LANG: &str = "es";

pub const LOGO_SRC: &str = "/logo.png";
pub const LOGO_ALT: &str = "De Leon Rehab Logo";

pub const TITLE: &str = "Under Construction";
pub const SUBTITLE: &str =
    "Estamos trabajando en algo increíble para ti. Nuestro sitio web estará disponible muy pronto.";

/// The message is split around the brand name so it can be emphasised.
pub const MESSAGE_LEAD: &str = "En ";
pub const MESSAGE_TAIL: &str = ", nos dedicamos a brindarte el mejor servicio. Mientras tanto, síguenos en nuestras redes sociales para mantenerte al día con nuestras novedades.";

pub const PROGRESS_LABEL: &str = "Progreso del sitio";
pub const PROGRESS_PERCENT: u8 = 75;

pub const SOCIAL_HEADING: &str = "Síguenos en nuestras redes sociales";

pub const CONTACT_PROMPT: &str = "¿Tienes alguna pregunta?";
pub const CONTACT_EMAIL: &str = "info@deleonrehab.com";

pub const FOOTER: &str = "© 2025 De Leon Rehab. Todos los derechos reservados.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
}

impl SocialKind {
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Facebook => icondata::LuFacebook,
            Self::Instagram => icondata::LuInstagram,
            Self::Twitter => icondata::LuTwitter,
            Self::LinkedIn => icondata::LuLinkedin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        kind: SocialKind::Facebook,
        url: "https://facebook.com/deleonrehab",
        label: "Facebook",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        url: "https://instagram.com/deleonrehab",
        label: "Instagram",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        url: "https://twitter.com/deleonrehab",
        label: "Twitter",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        url: "https://linkedin.com/company/deleonrehab",
        label: "LinkedIn",
    },
];

#[must_use]
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[must_use]
pub fn percent_label(percent: u8) -> String {
    format!("{percent}%")
}
