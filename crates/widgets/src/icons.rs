use batt_renderer::{Bitmap, IconKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a glyph comes from.  Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconSource {
    Builtin(IconKind),
    File(PathBuf),
}

impl IconSource {
    /// A configured path, or the built-in glyph for `kind`.
    pub fn resolve(kind: IconKind, path: Option<&Path>) -> Self {
        match path {
            Some(p) => IconSource::File(p.to_path_buf()),
            None    => IconSource::Builtin(kind),
        }
    }

    fn load(&self) -> Option<Bitmap> {
        match self {
            IconSource::Builtin(IconKind::Charging) => Some(Bitmap::charging_glyph()),
            IconSource::Builtin(IconKind::Warning)  => Some(Bitmap::warning_glyph()),
            IconSource::File(path) => match Bitmap::from_png(path) {
                Ok(bitmap) => Some(bitmap),
                Err(e) => {
                    warn!("Icon unavailable, drawing without it: {e}");
                    None
                }
            },
        }
    }
}

/// Decode-once store of icon bitmaps.
///
/// Each [`IconKind`] is bound to a source.  Bitmaps are decoded on first use
/// and kept until the kind is rebound to a different source.  A source that
/// fails to decode is remembered as empty so it is not retried every frame.
#[derive(Debug, Default)]
pub struct IconCache {
    sources: HashMap<IconKind, IconSource>,
    bitmaps: HashMap<IconSource, Option<Bitmap>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `kind` to `source`, dropping the old bitmap if nothing else uses
    /// it.  Rebinding to the same source keeps the cached bitmap.
    pub fn assign(&mut self, kind: IconKind, source: IconSource) {
        if self.sources.get(&kind) == Some(&source) {
            return;
        }
        if let Some(old) = self.sources.insert(kind, source) {
            if !self.sources.values().any(|s| *s == old) {
                debug!(?old, "evicting icon");
                self.bitmaps.remove(&old);
            }
        }
    }

    /// Decode the bitmap for `kind` unless already cached.
    pub fn load(&mut self, kind: IconKind) {
        let Some(source) = self.sources.get(&kind) else {
            return;
        };
        if !self.bitmaps.contains_key(source) {
            let source = source.clone();
            let bitmap = source.load();
            self.bitmaps.insert(source, bitmap);
        }
    }

    /// The cached bitmap for `kind`; `None` when unbound, not yet loaded or
    /// undecodable.
    pub fn cached(&self, kind: IconKind) -> Option<&Bitmap> {
        let source = self.sources.get(&kind)?;
        self.bitmaps.get(source)?.as_ref()
    }

    /// `true` once a load was attempted for the current source of `kind`.
    pub fn is_loaded(&self, kind: IconKind) -> bool {
        self.sources
            .get(&kind)
            .is_some_and(|s| self.bitmaps.contains_key(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_icons_load_lazily() {
        let mut cache = IconCache::new();
        cache.assign(IconKind::Charging, IconSource::Builtin(IconKind::Charging));
        assert!(!cache.is_loaded(IconKind::Charging));
        assert!(cache.cached(IconKind::Charging).is_none());

        cache.load(IconKind::Charging);
        assert!(cache.is_loaded(IconKind::Charging));
        assert_eq!(cache.cached(IconKind::Charging), Some(&Bitmap::charging_glyph()));
    }

    #[test]
    fn missing_file_caches_empty_entry() {
        let mut cache = IconCache::new();
        cache.assign(IconKind::Warning, IconSource::File("/nonexistent/warn.png".into()));
        cache.load(IconKind::Warning);
        assert!(cache.is_loaded(IconKind::Warning));
        assert!(cache.cached(IconKind::Warning).is_none());
    }

    #[test]
    fn rebinding_invalidates_only_on_change() {
        let mut cache = IconCache::new();
        let builtin = IconSource::Builtin(IconKind::Warning);
        cache.assign(IconKind::Warning, builtin.clone());
        cache.load(IconKind::Warning);

        cache.assign(IconKind::Warning, builtin);
        assert!(cache.is_loaded(IconKind::Warning));

        cache.assign(IconKind::Warning, IconSource::File("/nonexistent/other.png".into()));
        assert!(!cache.is_loaded(IconKind::Warning));
        assert!(cache.bitmaps.is_empty());
    }

    #[test]
    fn unbound_kind_is_empty() {
        let mut cache = IconCache::new();
        cache.load(IconKind::Charging);
        assert!(cache.cached(IconKind::Charging).is_none());
        assert!(!cache.is_loaded(IconKind::Charging));
    }

    #[test]
    fn resolve_prefers_configured_path() {
        assert_eq!(
            IconSource::resolve(IconKind::Charging, Some(Path::new("/tmp/bolt.png"))),
            IconSource::File("/tmp/bolt.png".into())
        );
        assert_eq!(
            IconSource::resolve(IconKind::Charging, None),
            IconSource::Builtin(IconKind::Charging)
        );
    }
}
