use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context as _;

pub const FAVORITES_KEY: &str = "favorites";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Minimal persistent key-value surface. Injected into [`Favorites`] and
/// [`Theme`] so tests can substitute [`MemStore`].
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn delete(&mut self, key: &str) -> anyhow::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        (**self).delete(key)
    }
}

/// One file per key under a store directory.
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn open(dir: PathBuf) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Store under the platform config directory, e.g.
    /// `~/.config/github-profile-render` on Linux.
    pub fn open_default() -> anyhow::Result<Self> {
        let dir = dirs::config_dir()
            .context("no config directory on this platform")?
            .join("github-profile-render");
        Self::open(dir)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.path(key);
        std::fs::write(&path, value).with_context(|| format!("write {}", path.display()))
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("delete {}", path.display())),
        }
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: HashMap<String, String>,
}

impl Storage for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Ordered, duplicate-free list of bookmarked usernames, persisted as a JSON
/// array of strings under [`FAVORITES_KEY`].
pub struct Favorites<S> {
    store: S,
}

impl<S: Storage> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current list in insertion order. Missing or unparseable state reads as
    /// empty.
    pub fn list(&self) -> Vec<String> {
        self.store
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Appends `username` unless already present. Returns whether it was
    /// actually added.
    pub fn add(&mut self, username: &str) -> anyhow::Result<bool> {
        let mut favorites = self.list();
        if favorites.iter().any(|f| f == username) {
            return Ok(false);
        }
        favorites.push(username.to_string());
        let raw = serde_json::to_string(&favorites).context("encode favorites")?;
        self.store.set(FAVORITES_KEY, &raw)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.store.delete(FAVORITES_KEY)
    }
}

/// Persisted light/dark flag, stored as the literal string `"true"` or
/// `"false"` under [`DARK_MODE_KEY`].
pub struct Theme<S> {
    store: S,
}

impl<S: Storage> Theme<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Dark iff the stored value is exactly `"true"`.
    pub fn is_dark(&self) -> bool {
        self.store.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    /// Flips the flag, persists it, and returns the new state.
    pub fn toggle(&mut self) -> anyhow::Result<bool> {
        let dark = !self.is_dark();
        self.store
            .set(DARK_MODE_KEY, if dark { "true" } else { "false" })?;
        Ok(dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut favorites = Favorites::new(MemStore::default());
        assert!(favorites.add("octocat").unwrap());
        assert!(!favorites.add("octocat").unwrap());
        assert_eq!(favorites.list(), vec!["octocat"]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut favorites = Favorites::new(MemStore::default());
        favorites.add("b").unwrap();
        favorites.add("a").unwrap();
        favorites.add("c").unwrap();
        assert_eq!(favorites.list(), vec!["b", "a", "c"]);
    }

    #[test]
    fn malformed_state_reads_as_empty() {
        let mut store = MemStore::default();
        store.set(FAVORITES_KEY, "not json[").unwrap();
        let favorites = Favorites::new(store);
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn clear_deletes_the_key() {
        let mut store = MemStore::default();
        {
            let mut favorites = Favorites::new(&mut store);
            favorites.add("octocat").unwrap();
            favorites.clear().unwrap();
        }
        assert!(store.get(FAVORITES_KEY).is_none());
    }

    #[test]
    fn theme_defaults_to_light() {
        assert!(!Theme::new(MemStore::default()).is_dark());
    }

    #[test]
    fn only_the_exact_string_true_is_dark() {
        let mut store = MemStore::default();
        store.set(DARK_MODE_KEY, "TRUE").unwrap();
        assert!(!Theme::new(store).is_dark());
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut theme = Theme::new(MemStore::default());
        let before = theme.is_dark();
        assert!(theme.toggle().unwrap());
        assert!(!theme.toggle().unwrap());
        assert_eq!(theme.is_dark(), before);
    }
}
