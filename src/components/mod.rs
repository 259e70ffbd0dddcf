mod back_button;
mod line_icon;
mod resource_card;
mod scroll_progress_bar;
mod site_chrome;
mod subject_card;
mod typewriter_header;

pub use back_button::BackButton;
pub use line_icon::LineIcon;
pub use resource_card::ResourceCard;
pub use scroll_progress_bar::ScrollProgressBar;
pub use site_chrome::{SiteFooter, SiteHeader};
pub use subject_card::SubjectCard;
pub use typewriter_header::TypewriterHeader;
