// src/names.rs
//
// Matching roster display names to the profile links found in the same table.
// The two can differ in encoding ("Jokić" in one, "Jokic" in the other), so a
// plain lookup is tried first and an ASCII-folded comparison second.

use std::fmt;

use crate::config::consts::UNRESOLVED;
use crate::core::sanitize::fold_ascii;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileRef {
    Url(String),
    Unresolved,
}

impl ProfileRef {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            ProfileRef::Url(u) => Some(u),
            ProfileRef::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool { matches!(self, ProfileRef::Url(_)) }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_url().unwrap_or(UNRESOLVED))
    }
}

/// Anchor text → profile URL, in page order.
/// Re-inserting a name keeps its position and takes the newer URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerLinks {
    entries: Vec<(String, String)>,
}

impl PlayerLinks {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let name = name.into();
        let url = url.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = url,
            None => self.entries.push((name, url)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, u)| u.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, u)| (n.as_str(), u.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn nth(&self, i: usize) -> Option<(&str, &str)> {
        self.entries.get(i).map(|(n, u)| (n.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<N: Into<String>, U: Into<String>> FromIterator<(N, U)> for PlayerLinks {
    fn from_iter<I: IntoIterator<Item = (N, U)>>(iter: I) -> Self {
        let mut links = PlayerLinks::new();
        for (n, u) in iter {
            links.insert(n, u);
        }
        links
    }
}

/// Exact match first, then ASCII-folded match; first hit in link order wins.
pub fn resolve(name: &str, links: &PlayerLinks) -> ProfileRef {
    if let Some(url) = links.get(name) {
        return ProfileRef::Url(s!(url));
    }

    let wanted = fold_ascii(name);
    for (anchor, url) in links.iter() {
        if fold_ascii(anchor) == wanted {
            logd!("Names: '{name}' matched '{anchor}' after folding");
            return ProfileRef::Url(s!(url));
        }
    }

    logd!("Names: no profile link for '{name}'");
    ProfileRef::Unresolved
}
