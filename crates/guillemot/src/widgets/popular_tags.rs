use slug::slugify;

use crate::content::TagGroup;
use crate::html::{a, div, section, span, HtmlElement};
use crate::{plumage, tag_permalink, SiteConfig};

/// The maximum number of tags the widget shows.
pub const MAX_TAG_COUNT: usize = 5;

/// Keeps the [`MAX_TAG_COUNT`] most used tags, ordered descending by count.
///
/// The sort is stable and keyed on the count alone, so groups with equal
/// counts keep the order the provider gave them.
pub fn popular_tags(mut groups: Vec<TagGroup>) -> Vec<TagGroup> {
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(MAX_TAG_COUNT);
    groups
}

pub struct PopularTagsProps<'a> {
    pub config: &'a SiteConfig,
    pub groups: Vec<TagGroup>,
}

/// Renders the popular-tags widget: one link per surviving tag, its
/// display name followed by a `(count)` badge.
pub fn popular_tags_widget(props: PopularTagsProps) -> HtmlElement {
    let PopularTagsProps { config, groups } = props;

    section().class(plumage().mb_5()).child(
        div()
            .class(plumage().mt_4())
            .children(popular_tags(groups).into_iter().map(|group| {
                div()
                    .class(plumage().flex().items_center().mb_1())
                    .child(
                        a().class(plumage().class("tag-link").mr_2())
                            .href(tag_permalink(config, &slugify(&group.name)))
                            .child(format!("{} ", group.name))
                            .child(
                                span()
                                    .class("tag-count")
                                    .child(format!("({})", group.count)),
                            ),
                    )
            })),
    )
}
