use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Gameplay,
    Spike,
    Synergy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionTag {
    pub text: String,
    pub slug: String,
    pub category: TagCategory,
}

impl ChampionTag {
    /// Tags that slugify to nothing (emoji only, a bare "(...)") keep
    /// their lowercased text as the slug so they stay distinct.
    pub fn new(text: &str, category: TagCategory) -> Self {
        let mut slug = slugify(text);
        if slug.is_empty() {
            slug = text.trim().to_lowercase();
        }
        ChampionTag {
            text: text.to_string(),
            slug,
            category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChampionEntry {
    pub name: String,
    pub tags: Vec<ChampionTag>,
}

const CHAMPION_COLUMN: &str = "Champion";
const TAG_COLUMNS: [(&str, TagCategory); 4] = [
    ("Gameplay1", TagCategory::Gameplay),
    ("Gameplay2", TagCategory::Gameplay),
    ("Power Spike", TagCategory::Spike),
    ("Synergy Focus", TagCategory::Synergy),
];

// Header positions of the TAGS.csv columns we read
struct ColumnIndex {
    champion: Option<usize>,
    tags: Vec<(usize, TagCategory)>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        ColumnIndex {
            champion: position(CHAMPION_COLUMN),
            tags: TAG_COLUMNS
                .iter()
                .filter_map(|(name, category)| position(*name).map(|idx| (idx, *category)))
                .collect(),
        }
    }

    /// Missing trailing fields read as empty.
    fn field<'r>(record: &'r csv::StringRecord, idx: Option<usize>) -> &'r str {
        idx.and_then(|i| record.get(i)).unwrap_or("")
    }

    fn entry(&self, record: &csv::StringRecord) -> ChampionEntry {
        let tags = self
            .tags
            .iter()
            .map(|(idx, category)| (Self::field(record, Some(*idx)), *category))
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, category)| ChampionTag::new(text, category))
            .collect();

        ChampionEntry {
            name: Self::field(record, self.champion).to_string(),
            tags,
        }
    }
}

/// Champion tags keyed by champion name.
#[derive(Debug, Default)]
pub struct TagCatalog {
    champions: BTreeMap<String, ChampionEntry>,
}

impl TagCatalog {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::Catalog(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            champions = catalog.len(),
            "loaded tag catalog"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| AppError::Catalog(format!("Failed to read headers: {}", e)))?;
        let columns = ColumnIndex::from_headers(headers);
        if columns.champion.is_none() {
            tracing::warn!("tag catalog has no {} column", CHAMPION_COLUMN);
        }

        let mut champions = BTreeMap::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| {
                AppError::Catalog(format!("Failed to parse row {}: {}", idx + 2, e))
            })?;
            let entry = columns.entry(&record);
            if entry.name.is_empty() {
                tracing::debug!(row = idx + 2, "skipping row without a champion");
                continue;
            }
            champions.insert(entry.name.clone(), entry);
        }

        Ok(TagCatalog { champions })
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Champion names in sorted order.
    pub fn champions(&self) -> Vec<&str> {
        self.champions.keys().map(String::as_str).collect()
    }

    /// Exact match first, then a case-insensitive one.
    pub fn find(&self, name: &str) -> Option<&ChampionEntry> {
        self.champions.get(name).or_else(|| {
            self.champions
                .values()
                .find(|entry| entry.name.eq_ignore_ascii_case(name))
        })
    }
}

fn plus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\+\s*").unwrap())
}

fn parens_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^)]*\)").unwrap())
}

fn non_slug_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Turn a display tag like "Two Items (Spike)" into "two-items".
pub fn slugify(tag: &str) -> String {
    let lowered = tag.to_lowercase();
    let joined = plus_re().replace_all(&lowered, " ");
    let stripped = parens_re().replace_all(&joined, "");
    let dashed = non_slug_re().replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}
