use super::catalog::{ChampionTag, TagCatalog};
use super::tag_cloud::TagCloud;
use crate::config::split_list;
use crate::error::AppError;
use serde::Serialize;
use std::collections::HashSet;

const BASE_SCORE: f64 = 55.0;
const TEAM_TAG_WEIGHT: f64 = 1.5;
const ENEMY_TAG_WEIGHT: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Team,
    Enemy,
}

impl Side {
    fn tag_weight(self) -> f64 {
        match self {
            Side::Team => TEAM_TAG_WEIGHT,
            Side::Enemy => ENEMY_TAG_WEIGHT,
        }
    }

    /// Base score plus a weighted bonus per distinct tag.
    pub fn score(self, unique_tags: usize) -> i64 {
        (BASE_SCORE + unique_tags as f64 * self.tag_weight()).round() as i64
    }
}

/// Picks for both sides plus the shared ban list.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub team: Vec<String>,
    pub enemy: Vec<String>,
    pub bans: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSummary {
    pub picks: Vec<String>,
    pub score: i64,
    pub tags: TagCloud,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSummary {
    pub team: SideSummary,
    pub enemy: SideSummary,
    pub leader: Option<Side>,
}

impl Draft {
    /// Build a draft from comma-separated lists.
    pub fn from_lists(team: &str, enemy: &str, bans: &str) -> Self {
        Draft {
            team: split_list(team),
            enemy: split_list(enemy),
            bans: split_list(bans),
        }
    }

    /// Check the draft against the catalog and score both sides.
    pub fn summarize(&self, catalog: &TagCatalog) -> Result<DraftSummary, AppError> {
        let team = canonical_names(catalog, &self.team)?;
        let enemy = canonical_names(catalog, &self.enemy)?;
        let bans: HashSet<String> = canonical_names(catalog, &self.bans)?.into_iter().collect();

        let mut picked = HashSet::new();
        for name in team.iter().chain(enemy.iter()) {
            if bans.contains(name) {
                return Err(AppError::BannedPick(name.clone()));
            }
            if !picked.insert(name.as_str()) {
                return Err(AppError::DuplicatePick(name.clone()));
            }
        }

        let team = side_summary(catalog, team, Side::Team);
        let enemy = side_summary(catalog, enemy, Side::Enemy);
        let leader = match team.score.cmp(&enemy.score) {
            std::cmp::Ordering::Greater => Some(Side::Team),
            std::cmp::Ordering::Less => Some(Side::Enemy),
            std::cmp::Ordering::Equal => None,
        };

        tracing::debug!(
            team_score = team.score,
            enemy_score = enemy.score,
            "scored draft"
        );

        Ok(DraftSummary {
            team,
            enemy,
            leader,
        })
    }
}

fn canonical_names(catalog: &TagCatalog, names: &[String]) -> Result<Vec<String>, AppError> {
    names
        .iter()
        .map(|name| {
            catalog
                .find(name)
                .map(|entry| entry.name.clone())
                .ok_or_else(|| AppError::UnknownChampion(name.clone()))
        })
        .collect()
}

fn side_summary(catalog: &TagCatalog, picks: Vec<String>, side: Side) -> SideSummary {
    let tags: Vec<&ChampionTag> = picks
        .iter()
        .filter_map(|name| catalog.find(name))
        .flat_map(|entry| entry.tags.iter())
        .collect();
    let tags = TagCloud::from_tags(tags);

    SideSummary {
        score: side.score(tags.unique_slugs()),
        picks,
        tags,
    }
}
