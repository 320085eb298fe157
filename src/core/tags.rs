use std::collections::BTreeSet;

/// Case-insensitive, deduplicated set of interest tags
///
/// Tags are lowercased on the way in and kept in an ordered set, so every
/// derived sequence (intersections, iteration) comes out in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    /// Normalize a raw tag list: lowercase every entry and drop duplicates.
    /// Tags are not trimmed, so `" ml"` and `"ml"` stay distinct.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Membership test; the probe is lowercased before lookup
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Tags present in both sets, ascending
    pub fn intersection(&self, other: &TagSet) -> Vec<String> {
        self.tags.intersection(&other.tags).cloned().collect()
    }

    /// Size of the union without materializing it
    #[inline]
    pub fn union_len(&self, other: &TagSet) -> usize {
        let shared = self.tags.intersection(&other.tags).count();
        self.len() + other.len() - shared
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_tags(iter)
    }
}
