use super::catalog::{ChampionTag, TagCategory};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagCount {
    pub text: String,
    pub slug: String,
    pub count: usize,
}

impl TagCount {
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} ×{}", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup {
    pub category: TagCategory,
    pub tags: Vec<TagCount>,
}

/// Tags of one side, deduplicated by slug within each category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagCloud {
    groups: Vec<TagGroup>,
}

impl TagCloud {
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a ChampionTag>) -> Self {
        let mut groups: Vec<TagGroup> = Vec::new();

        for tag in tags {
            let pos = match groups.iter().position(|g| g.category == tag.category) {
                Some(pos) => pos,
                None => {
                    groups.push(TagGroup {
                        category: tag.category,
                        tags: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[pos];

            match group.tags.iter_mut().find(|t| t.slug == tag.slug) {
                Some(existing) => existing.count += 1,
                None => group.tags.push(TagCount {
                    text: tag.text.clone(),
                    slug: tag.slug.clone(),
                    count: 1,
                }),
            }
        }

        // gameplay, spike, synergy
        groups.sort_by_key(|g| g.category);
        TagCloud { groups }
    }

    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, category: TagCategory) -> Option<&TagGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Gameplay tags laid out over two rows, the first one taking the extra tag.
    pub fn gameplay_rows(&self) -> (&[TagCount], &[TagCount]) {
        match self.group(TagCategory::Gameplay) {
            Some(group) => {
                let mid = group.tags.len().div_ceil(2).max(1).min(group.tags.len());
                group.tags.split_at(mid)
            }
            None => (&[], &[]),
        }
    }

    /// Distinct slugs across every category.
    pub fn unique_slugs(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.tags.iter().map(|t| t.slug.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }
}
