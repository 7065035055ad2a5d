use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::Utc;

use crate::brands::{sanitize_id, BrandModel};
use crate::StoreError;

/// Keyed persistence for brand models.
///
/// Keys are sanitized with [`sanitize_id`] before use, so `"Eco Goods"` and
/// `"eco-goods"` address the same document.
pub trait BrandStore: Send + Sync {
    /// Load a brand by id. `Ok(None)` when no document exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the id is unusable or the document cannot be read.
    fn load(&self, id: &str) -> Result<Option<BrandModel>, StoreError>;

    /// Persist a brand under its sanitized id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the id is unusable or the write fails.
    fn save(&self, brand: &BrandModel) -> Result<(), StoreError>;
}

fn storage_key(id: &str) -> Result<String, StoreError> {
    let key = sanitize_id(id);
    if key.is_empty() {
        return Err(StoreError::EmptyId(id.to_string()));
    }
    Ok(key)
}

/// One pretty-printed JSON document per brand under a directory.
#[derive(Debug, Clone)]
pub struct FileBrandStore {
    dir: PathBuf,
}

impl FileBrandStore {
    /// The directory is created lazily on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BrandStore for FileBrandStore {
    fn load(&self, id: &str) -> Result<Option<BrandModel>, StoreError> {
        let path = self.path_for(&storage_key(id)?);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let brand = serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded brand document");
        Ok(Some(brand))
    }

    fn save(&self, brand: &BrandModel) -> Result<(), StoreError> {
        let key = storage_key(&brand.storage_id())?;
        let path = self.path_for(&key);

        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut stamped = brand.clone();
        stamped.id = key;
        stamped.updated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&stamped).map_err(|e| StoreError::Malformed {
            path: path.display().to_string(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(brand = %stamped.id, path = %path.display(), "saved brand document");
        Ok(())
    }
}

/// Read-through cache over any [`BrandStore`].
///
/// Each brand is fetched from the inner store at most once per session;
/// `save` writes through and refreshes the cached copy.
pub struct CachedBrandStore<S> {
    inner: S,
    cache: RwLock<HashMap<String, BrandModel>>,
}

impl<S: BrandStore> CachedBrandStore<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of brands currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.read().map_or(0, |c| c.len())
    }
}

impl<S: BrandStore> BrandStore for CachedBrandStore<S> {
    fn load(&self, id: &str) -> Result<Option<BrandModel>, StoreError> {
        let key = storage_key(id)?;
        {
            let cache = self.cache.read().map_err(|_| StoreError::Poisoned)?;
            if let Some(brand) = cache.get(&key) {
                return Ok(Some(brand.clone()));
            }
        }

        let loaded = self.inner.load(&key)?;
        if let Some(brand) = &loaded {
            self.cache
                .write()
                .map_err(|_| StoreError::Poisoned)?
                .insert(key, brand.clone());
        }
        Ok(loaded)
    }

    fn save(&self, brand: &BrandModel) -> Result<(), StoreError> {
        let key = storage_key(&brand.storage_id())?;
        self.inner.save(brand)?;
        // Re-read so the cached copy carries whatever the inner store stamped.
        let stored = self.inner.load(&key)?;
        let mut cache = self.cache.write().map_err(|_| StoreError::Poisoned)?;
        match stored {
            Some(b) => {
                cache.insert(key, b);
            }
            None => {
                cache.remove(&key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn file_store_missing_brand_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBrandStore::new(dir.path().join("brands"));
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn file_store_saves_under_sanitized_id_and_stamps() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBrandStore::new(dir.path().join("brands"));
        let brand = BrandModel::new("Eco Goods").with_keywords(["eco", "green"]);

        store.save(&brand).unwrap();

        assert!(dir.path().join("brands").join("eco-goods.json").exists());
        let loaded = store.load("Eco Goods").unwrap().unwrap();
        assert_eq!(loaded.name, "Eco Goods");
        assert_eq!(loaded.keywords, vec!["eco", "green"]);
        assert!(loaded.updated_at.is_some());
    }

    #[test]
    fn file_store_reports_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let store = FileBrandStore::new(dir.path());
        let err = store.load("broken").unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn empty_id_is_rejected() {
        let store = FileBrandStore::new("/unused");
        assert!(matches!(store.load("!!!"), Err(StoreError::EmptyId(_))));
    }

    struct CountingStore {
        inner: FileBrandStore,
        loads: AtomicUsize,
    }

    impl BrandStore for CountingStore {
        fn load(&self, id: &str) -> Result<Option<BrandModel>, StoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(id)
        }

        fn save(&self, brand: &BrandModel) -> Result<(), StoreError> {
            self.inner.save(brand)
        }
    }

    #[test]
    fn cached_store_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileBrandStore::new(dir.path());
        file.save(&BrandModel::new("Acme")).unwrap();

        let cached = CachedBrandStore::new(CountingStore {
            inner: file,
            loads: AtomicUsize::new(0),
        });
        assert!(cached.load("acme").unwrap().is_some());
        assert!(cached.load("ACME").unwrap().is_some());
        assert_eq!(cached.inner().loads.load(Ordering::SeqCst), 1);
        assert_eq!(cached.cached_len(), 1);
    }

    #[test]
    fn cached_store_save_refreshes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cached = CachedBrandStore::new(FileBrandStore::new(dir.path()));
        cached.save(&BrandModel::new("Acme")).unwrap();

        let updated = BrandModel::new("Acme").with_keywords(["rockets"]);
        cached.save(&updated).unwrap();

        let loaded = cached.load("acme").unwrap().unwrap();
        assert_eq!(loaded.keywords, vec!["rockets"]);
    }
}
