use std::collections::HashMap;
use std::convert::Infallible;

use crate::content::Posts;

/// A tag aggregation record: a tag's display name paired with the number
/// of posts carrying it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TagGroup {
    pub name: String,
    pub count: usize,
}

/// A provider of tag aggregates.
///
/// Widgets take their data through this seam so they can be driven by a
/// canned set of groups in tests rather than a live content tree.
pub trait TagSource {
    type Error: std::error::Error;

    /// Returns one group per distinct tag, ordered descending by name.
    fn tag_groups(&self) -> Result<Vec<TagGroup>, Self::Error>;
}

impl TagSource for Posts {
    type Error = Infallible;

    fn tag_groups(&self) -> Result<Vec<TagGroup>, Self::Error> {
        Ok(group_by_tag(self))
    }
}

/// Groups the given posts by tag name.
///
/// Groups come back ordered descending by name. That ordering is part of
/// the contract: consumers that re-sort by count rely on it as the
/// tie-break among equal counts.
pub fn group_by_tag(posts: &Posts) -> Vec<TagGroup> {
    let mut counts = HashMap::<&str, usize>::new();

    for post in posts.values() {
        for tag in &post.meta.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut groups = counts
        .into_iter()
        .map(|(name, count)| TagGroup {
            name: name.to_string(),
            count,
        })
        .collect::<Vec<_>>();

    groups.sort_unstable_by(|a, b| b.name.cmp(&a.name));

    groups
}
