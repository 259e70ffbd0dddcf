//! Route table and fragment-based history.
//!
//! The site is served from a static host under a sub-path, so routes live in
//! the URL fragment (`#/chemistry`) and the host only ever serves `index.html`.

use crate::{dom, log};
use leptos::*;
use leptos_router::{History, LocationChange, State};

/// Every view the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Chemistry,
    Physics,
    Mathematics,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Chemistry, Page::Physics, Page::Mathematics];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Chemistry => "/chemistry",
            Page::Physics => "/physics",
            Page::Mathematics => "/mathematics",
        }
    }

    /// Look up the page registered for `path`, ignoring one trailing slash.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Route path carried by a URL fragment. An empty fragment is the home page.
pub fn path_from_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        "/".to_string()
    } else if fragment.starts_with('/') {
        fragment.to_string()
    } else {
        format!("/{}", fragment)
    }
}

pub fn hash_for_path(path: &str) -> String {
    if path.starts_with('/') {
        format!("#{}", path)
    } else {
        format!("#/{}", path)
    }
}

fn current_path() -> String {
    match dom::current_hash() {
        Ok(hash) => path_from_hash(&hash),
        Err(err) => {
            log::warn(&format!("could not read location, showing home: {}", err));
            Page::Home.path().to_string()
        }
    }
}

fn location_change(value: String) -> LocationChange {
    LocationChange {
        value,
        replace: true,
        scroll: true,
        state: State(None),
    }
}

/// New pages start at the top; in-place replacements keep the offset.
pub fn scrolls_to_top(loc: &LocationChange) -> bool {
    loc.scroll && !loc.replace
}

/// Router integration that keeps the route in `location.hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashIntegration;

impl History for HashIntegration {
    fn location(&self) -> ReadSignal<LocationChange> {
        let (location, set_location) = create_signal(location_change(current_path()));

        let handle = window_event_listener(ev::hashchange, move |_| {
            let path = current_path();
            if Page::from_path(&path).is_none() {
                log::debug(&format!("no route registered for {}", path));
            }
            set_location.set(location_change(path));
        });
        on_cleanup(move || handle.remove());

        location
    }

    fn navigate(&self, loc: &LocationChange) {
        let hash = hash_for_path(&loc.value);
        let result = if loc.replace {
            dom::replace_hash(&hash)
        } else {
            dom::set_hash(&hash)
        };
        if let Err(err) = result {
            log::warn(&format!("could not navigate to {}: {}", loc.value, err));
            return;
        }
        if scrolls_to_top(loc) {
            if let Err(err) = dom::scroll_to_top() {
                log::warn(&format!("could not reset scroll position: {}", err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_fixed() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Chemistry.path(), "/chemistry");
        assert_eq!(Page::Physics.path(), "/physics");
        assert_eq!(Page::Mathematics.path(), "/mathematics");
    }

    #[test]
    fn test_every_page_resolves_from_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/physics/"), Some(Page::Physics));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn test_unknown_paths_have_no_page() {
        assert_eq!(Page::from_path("/biology"), None);
        assert_eq!(Page::from_path("/chemistry/extra"), None);
        assert_eq!(Page::from_path("chemistry"), None);
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/chemistry"), "/chemistry");
        assert_eq!(path_from_hash("#mathematics"), "/mathematics");
    }

    #[test]
    fn test_hash_for_path() {
        assert_eq!(hash_for_path("/"), "#/");
        assert_eq!(hash_for_path("/physics"), "#/physics");
        assert_eq!(hash_for_path("physics"), "#/physics");
    }

    #[test]
    fn test_push_navigation_scrolls_to_top() {
        let push = LocationChange {
            value: "/chemistry".to_string(),
            replace: false,
            scroll: true,
            state: State(None),
        };
        assert!(scrolls_to_top(&push));

        let replace = LocationChange {
            replace: true,
            ..push.clone()
        };
        assert!(!scrolls_to_top(&replace));

        let no_scroll = LocationChange {
            scroll: false,
            ..push
        };
        assert!(!scrolls_to_top(&no_scroll));
    }

    #[test]
    fn test_hash_round_trip_for_registered_pages() {
        for page in Page::ALL {
            let path = path_from_hash(&hash_for_path(page.path()));
            assert_eq!(Page::from_path(&path), Some(page));
        }
    }
}
