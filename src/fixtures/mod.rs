// JSON fixture store backing the content endpoints.
//
// The fixture files are read once at startup. Collections with create
// endpoints (media, knowledge, publishing) live behind RwLocks and reset
// to the file contents on restart; the rest are plain read-only vectors.
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::OnceCell;

use crate::config;
use crate::types::{Category, Draft, Knowledge, MediaItem, Plan, PublishingItem, Stats};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct FixtureStore {
    pub categories: Vec<Category>,
    pub plans: Vec<Plan>,
    pub drafts: Vec<Draft>,
    media: RwLock<Vec<MediaItem>>,
    knowledge: RwLock<Vec<Knowledge>>,
    publishing: RwLock<Vec<PublishingItem>>,
}

fn load_file<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Result<T, FixtureError> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
        file: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        file: path.display().to_string(),
        source,
    })
}

impl FixtureStore {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let dir = dir.as_ref();
        Ok(Self {
            categories: load_file(dir, "categories.json")?,
            plans: load_file(dir, "plans.json")?,
            drafts: load_file(dir, "drafts.json")?,
            media: RwLock::new(load_file(dir, "media.json")?),
            knowledge: RwLock::new(load_file(dir, "knowledge.json")?),
            publishing: RwLock::new(load_file(dir, "publishing.json")?),
        })
    }

    pub fn media(&self) -> RwLockReadGuard<'_, Vec<MediaItem>> {
        self.media.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn media_mut(&self) -> RwLockWriteGuard<'_, Vec<MediaItem>> {
        self.media.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn knowledge(&self) -> RwLockReadGuard<'_, Vec<Knowledge>> {
        self.knowledge.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn knowledge_mut(&self) -> RwLockWriteGuard<'_, Vec<Knowledge>> {
        self.knowledge.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn publishing(&self) -> RwLockReadGuard<'_, Vec<PublishingItem>> {
        self.publishing.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn publishing_mut(&self) -> RwLockWriteGuard<'_, Vec<PublishingItem>> {
        self.publishing.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Aggregate counters shown on the dashboard overview.
    pub fn compute_stats(&self) -> Stats {
        let knowledge = self.knowledge();

        let mut plans_by_status: BTreeMap<String, usize> = BTreeMap::new();
        for plan in &self.plans {
            *plans_by_status.entry(plan.status.clone()).or_insert(0) += 1;
        }

        let mut drafts_by_status: BTreeMap<String, usize> = BTreeMap::new();
        for draft in &self.drafts {
            *drafts_by_status.entry(draft.status.clone()).or_insert(0) += 1;
        }

        Stats {
            total_knowledge: knowledge.len(),
            total_plans: self.plans.len(),
            total_drafts: self.drafts.len(),
            published_content: self.drafts.iter().filter(|d| d.status == "已发布").count(),
            plans_by_status,
            drafts_by_status,
        }
    }
}

static STORE: OnceCell<FixtureStore> = OnceCell::new();

/// Load the fixture store from the configured directory. Loading happens
/// once; later calls return the same store.
pub fn store() -> Result<&'static FixtureStore, FixtureError> {
    STORE.get_or_try_init(|| FixtureStore::load(&config::config().fixtures.dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Draft, Knowledge, Plan};

    fn store_with(plans: Vec<Plan>, drafts: Vec<Draft>, knowledge: Vec<Knowledge>) -> FixtureStore {
        FixtureStore {
            categories: vec![],
            plans,
            drafts,
            media: RwLock::new(vec![]),
            knowledge: RwLock::new(knowledge),
            publishing: RwLock::new(vec![]),
        }
    }

    fn plan(id: i64, status: &str) -> Plan {
        Plan {
            id,
            title: format!("plan {}", id),
            status: status.to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn draft(id: i64, status: &str) -> Draft {
        Draft {
            id,
            title: format!("draft {}", id),
            status: status.to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-02T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn stats_counts_by_status() {
        let store = store_with(
            vec![plan(1, "进行中"), plan(2, "进行中"), plan(3, "已完成")],
            vec![draft(1, "待编辑"), draft(2, "已发布"), draft(3, "已发布")],
            vec![Knowledge {
                id: 1,
                topic: "faq".to_string(),
                content: serde_json::json!({"q": "a"}),
                created_at: "2025-01-01T00:00:00Z".to_string(),
                updated_at: "2025-01-01T00:00:00Z".to_string(),
            }],
        );

        let stats = store.compute_stats();
        assert_eq!(stats.total_knowledge, 1);
        assert_eq!(stats.total_plans, 3);
        assert_eq!(stats.total_drafts, 3);
        assert_eq!(stats.published_content, 2);
        assert_eq!(stats.plans_by_status.get("进行中"), Some(&2));
        assert_eq!(stats.drafts_by_status.get("已发布"), Some(&2));
    }

    #[test]
    fn stats_on_empty_store() {
        let store = store_with(vec![], vec![], vec![]);
        let stats = store.compute_stats();
        assert_eq!(stats.total_plans, 0);
        assert_eq!(stats.published_content, 0);
        assert!(stats.plans_by_status.is_empty());
    }

    #[test]
    fn loads_bundled_fixture_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let store = FixtureStore::load(dir).expect("bundled fixtures must parse");
        assert!(!store.categories.is_empty());
        assert!(!store.plans.is_empty());
        assert!(!store.drafts.is_empty());
        assert!(!store.media().is_empty());
        assert!(!store.knowledge().is_empty());
        assert!(!store.publishing().is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = FixtureStore::load("no/such/dir").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
