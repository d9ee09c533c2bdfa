use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::AppError;

/// Path-scoped invalidation of cached page output.
pub trait Revalidate {
    /// Discard cached output for `path` so the next request re-renders it.
    fn revalidate_path(&self, path: &str) -> Result<(), AppError>;
}

/// Rendered HTML keyed by request path, shared across workers.
///
/// Every revalidation bumps a generation counter. A reader that missed the
/// cache records the generation before querying and fills only if it is
/// unchanged, so a render that raced a mutation is never stored.
#[derive(Clone, Default)]
pub struct PageCache {
    inner: Arc<Mutex<Pages>>,
}

#[derive(Default)]
struct Pages {
    html: HashMap<String, String>,
    generation: u64,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Pages> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.lock().html.get(path).cloned()
    }

    /// Current generation; read it before loading the data to be cached.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Store `html` for `path` unless a revalidation happened since
    /// `generation` was read. Returns whether the entry was stored.
    pub fn put_if_generation(&self, path: &str, generation: u64, html: String) -> bool {
        let mut pages = self.lock();
        if pages.generation != generation {
            log::debug!("skipped stale fill for {path}");
            return false;
        }
        pages.html.insert(path.to_string(), html);
        true
    }
}

impl Revalidate for PageCache {
    fn revalidate_path(&self, path: &str) -> Result<(), AppError> {
        let mut pages = self.lock();
        pages.generation = pages.generation.wrapping_add(1);
        if pages.html.remove(path).is_some() {
            log::debug!("revalidated cached page {path}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(cache: &PageCache, path: &str, html: &str) {
        let generation = cache.generation();
        assert!(cache.put_if_generation(path, generation, html.to_string()));
    }

    #[test]
    fn revalidate_drops_only_that_path() {
        let cache = PageCache::new();
        fill(&cache, "/dashboard/invoices", "<p>list</p>");
        fill(&cache, "/dashboard", "<p>home</p>");

        cache.revalidate_path("/dashboard/invoices").unwrap();

        assert_eq!(cache.get("/dashboard/invoices"), None);
        assert_eq!(cache.get("/dashboard").as_deref(), Some("<p>home</p>"));
    }

    #[test]
    fn revalidate_missing_path_is_ok() {
        let cache = PageCache::new();
        assert!(cache.revalidate_path("/nothing").is_ok());
    }

    #[test]
    fn clones_share_entries() {
        let cache = PageCache::new();
        let other = cache.clone();
        fill(&other, "/a", "x");
        assert_eq!(cache.get("/a").as_deref(), Some("x"));
    }

    #[test]
    fn fill_rendered_before_a_revalidation_is_dropped() {
        let cache = PageCache::new();
        let other = cache.clone();

        // Reader misses and starts rendering the pre-mutation rows.
        assert_eq!(cache.get("/dashboard/invoices"), None);
        let generation = cache.generation();

        // A mutation commits and revalidates before the reader stores.
        other.revalidate_path("/dashboard/invoices").unwrap();

        assert!(!cache.put_if_generation("/dashboard/invoices", generation, "old".to_string()));
        assert_eq!(cache.get("/dashboard/invoices"), None);

        // The next reader fills normally.
        fill(&cache, "/dashboard/invoices", "new");
        assert_eq!(cache.get("/dashboard/invoices").as_deref(), Some("new"));
    }
}
