use crate::typewriter::TypewriterTiming;

/// Site-wide settings baked into the binary.
///
/// `public_url` must match `public_url` in `Trunk.toml`; the PDF links are
/// relative, so the browser resolves them against it.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub intro: &'static str,
    pub author: &'static str,
    pub division: &'static str,
    pub roll_number: &'static str,
    pub public_url: &'static str,
    pub resources_dir: &'static str,
    pub headline_prefix: &'static str,
    pub headline_phrases: &'static [&'static str],
    pub typewriter: TypewriterTiming,
    /// Delay between consecutive resource cards sliding in
    pub card_stagger_ms: u32,
}

pub const SITE: SiteConfig = SiteConfig {
    brand: "ANM",
    intro: "Comprehensive study materials for science and mathematics to help you excel in your academic journey",
    author: "Atharva Nitin Mahajan",
    division: "COA2K",
    roll_number: "240354",
    public_url: "/ANMnotes/",
    resources_dir: "pdf_resources",
    headline_prefix: "Master Your",
    headline_phrases: &[
        " Chemistry Notes",
        " Physics Notes",
        " Mathematics",
        " Academic Goals",
        " Future Success",
    ],
    typewriter: TypewriterTiming {
        type_delay_ms: 80,
        delete_delay_ms: 50,
        pause_ms: 1500,
    },
    card_stagger_ms: 100,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_is_rooted_directory() {
        assert!(SITE.public_url.starts_with('/'));
        assert!(SITE.public_url.ends_with('/'));
    }

    #[test]
    fn test_headline_has_phrases() {
        assert_eq!(SITE.headline_phrases.len(), 5);
        assert!(SITE.headline_phrases.iter().all(|p| !p.trim().is_empty()));
    }
}
