//! Static listing of subjects and their study resources.

use crate::routes::Page;

/// Text shown on a card that has no document yet
pub const PLACEHOLDER: &str = "Coming soon";

/// Line icons drawn on cards and buttons (24x24 stroke paths)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowLeft,
    Atom,
    BookOpen,
    Calculator,
    ChevronRight,
    FileText,
    Sigma,
    Thermometer,
    Waves,
    Zap,
}

impl Icon {
    /// SVG children for a `0 0 24 24` viewBox
    pub fn svg_body(&self) -> &'static str {
        match self {
            Icon::ArrowLeft => r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
            Icon::Atom => concat!(
                r#"<circle cx="12" cy="12" r="1"/>"#,
                r#"<path d="M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z"/>"#,
                r#"<path d="M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z"/>"#,
            ),
            Icon::BookOpen => concat!(
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>"#,
                r#"<path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
            ),
            Icon::Calculator => concat!(
                r#"<rect width="16" height="20" x="4" y="2" rx="2"/>"#,
                r#"<line x1="8" x2="16" y1="6" y2="6"/>"#,
                r#"<line x1="16" x2="16" y1="14" y2="18"/>"#,
                r#"<path d="M16 10h.01"/><path d="M12 10h.01"/><path d="M8 10h.01"/>"#,
                r#"<path d="M12 14h.01"/><path d="M8 14h.01"/>"#,
                r#"<path d="M12 18h.01"/><path d="M8 18h.01"/>"#,
            ),
            Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Icon::FileText => concat!(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#,
                r#"<path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
            ),
            Icon::Sigma => {
                r#"<path d="M18 7V5a1 1 0 0 0-1-1H6.5a.5.5 0 0 0-.4.8l4.5 6a2 2 0 0 1 0 2.4l-4.5 6a.5.5 0 0 0 .4.8H17a1 1 0 0 0 1-1v-2"/>"#
            }
            Icon::Thermometer => r#"<path d="M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z"/>"#,
            Icon::Waves => concat!(
                r#"<path d="M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/>"#,
                r#"<path d="M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/>"#,
                r#"<path d="M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1"/>"#,
            ),
            Icon::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
        }
    }
}

/// A top-level subject card on the home page
#[derive(Debug)]
pub struct Subject {
    pub title: &'static str,
    pub description: &'static str,
    pub page: Page,
    pub icon: Icon,
    /// CSS animation class applied to the icon
    pub icon_animation: &'static str,
    /// CSS class for the icon badge gradient
    pub gradient: &'static str,
}

impl Subject {
    /// Route the card's Explore button navigates to
    pub fn explore_path(&self) -> &'static str {
        self.page.path()
    }
}

/// A single study material listing
#[derive(Debug)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub body: Option<&'static str>,
    /// Path to the PDF, relative to the site root
    pub document: Option<&'static str>,
    pub icon: Icon,
}

/// What a resource card offers the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Link out to the document in a new browsing context
    OpenDocument(&'static str),
    /// No document yet; show this text instead
    Placeholder(&'static str),
}

/// Attributes of an outbound document anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLink {
    pub href: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl CardAction {
    /// Anchor to render, if the card links out at all.
    pub fn link(&self) -> Option<DocumentLink> {
        match *self {
            CardAction::OpenDocument(href) => Some(DocumentLink {
                href,
                target: "_blank",
                rel: "noopener noreferrer",
            }),
            CardAction::Placeholder(_) => None,
        }
    }

    /// Text shown in the card body in place of a link
    pub fn placeholder(&self) -> Option<&'static str> {
        match *self {
            CardAction::OpenDocument(_) => None,
            CardAction::Placeholder(text) => Some(text),
        }
    }
}

impl ResourceEntry {
    pub fn action(&self) -> CardAction {
        match self.document {
            Some(path) => CardAction::OpenDocument(path),
            None => CardAction::Placeholder(self.body.unwrap_or(PLACEHOLDER)),
        }
    }
}

/// Everything a subject's resource page renders
#[derive(Debug)]
pub struct SubjectPageContent {
    pub page: Page,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub entries: &'static [ResourceEntry],
}

impl SubjectPageContent {
    pub fn for_page(page: Page) -> Option<&'static SubjectPageContent> {
        SUBJECT_PAGES.iter().copied().find(|content| content.page == page)
    }
}

pub static SUBJECTS: [Subject; 3] = [
    Subject {
        title: "Chemistry",
        description: "Explore atoms, molecules, and chemical reactions. Learn about the building blocks of matter and understand how different elements interact to form compounds.",
        page: Page::Chemistry,
        icon: Icon::Atom,
        icon_animation: "anim-spin",
        gradient: "gradient-chemistry",
    },
    Subject {
        title: "Physics",
        description: "Discover the fundamental laws that govern the universe, from mechanics to quantum physics. Understand the principles that shape our physical world.",
        page: Page::Physics,
        icon: Icon::BookOpen,
        icon_animation: "anim-float",
        gradient: "gradient-physics",
    },
    Subject {
        title: "Mathematics",
        description: "Master the language of numbers, from algebra to calculus and beyond. Develop problem-solving skills and explore the foundations of mathematical thinking.",
        page: Page::Mathematics,
        icon: Icon::Calculator,
        icon_animation: "anim-wiggle",
        gradient: "gradient-mathematics",
    },
];

pub static CHEMISTRY: SubjectPageContent = SubjectPageContent {
    page: Page::Chemistry,
    heading: "Basic Chemistry",
    tagline: "Explore the fundamentals of chemistry through our carefully curated resources",
    entries: &[
        ResourceEntry {
            title: "Chemical Bonding",
            body: None,
            document: Some("pdf_resources/chemistry/Basic Science 4.pdf"),
            icon: Icon::Atom,
        },
        ResourceEntry {
            title: "Electro chemistry and Metal Corrosion, its prevention",
            body: None,
            document: Some("pdf_resources/chemistry/Basic Science 5.pdf"),
            icon: Icon::Zap,
        },
        ResourceEntry {
            title: "Engineering Materials and Catalysis",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Thermometer,
        },
    ],
};

pub static PHYSICS: SubjectPageContent = SubjectPageContent {
    page: Page::Physics,
    heading: "Basic Physics",
    tagline: "Explore the fundamentals of physics through our carefully curated resources",
    entries: &[
        ResourceEntry {
            title: "Wave Optics",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Waves,
        },
        ResourceEntry {
            title: "Quantum Mechanics",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Atom,
        },
        ResourceEntry {
            title: "Semiconductor Physics",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Zap,
        },
    ],
};

pub static MATHEMATICS: SubjectPageContent = SubjectPageContent {
    page: Page::Mathematics,
    heading: "Engineering Mathematics",
    tagline: "Explore the fundamentals of mathematics through our carefully curated resources",
    entries: &[
        ResourceEntry {
            title: "Matrices and Linear Systems",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Calculator,
        },
        ResourceEntry {
            title: "Differential Calculus",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Sigma,
        },
        ResourceEntry {
            title: "Integral Calculus",
            body: Some(PLACEHOLDER),
            document: None,
            icon: Icon::Sigma,
        },
    ],
};

static SUBJECT_PAGES: [&SubjectPageContent; 3] = [&CHEMISTRY, &PHYSICS, &MATHEMATICS];
