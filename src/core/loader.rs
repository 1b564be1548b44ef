//! Module-shape adapters.
//!
//! A lazily-loaded module may expose its renderable as the default entry or
//! under a name. The two adapters erase that distinction before anything
//! reaches the cache: both produce loaders yielding a [`NormalizedModule`]
//! with exactly one renderable.
//!
//! Adapters are pure transformations. They cache nothing and never retry; a
//! failed load propagates untouched to whoever awaits it.

use futures::future::LocalBoxFuture;
use hashbrown::HashMap;
use thiserror::Error;

use crate::router::RouteKey;

/// Why a module load produced no renderable.
///
/// `Clone` on purpose: the cache memoizes failures and hands the same
/// outcome to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("module load failed: {0}")]
    Failed(String),
    #[error("module has no default export")]
    MissingDefault,
    #[error("module has no export named `{0}`")]
    MissingExport(&'static str),
}

/// The raw result of fetching a module: an optional default entry plus
/// named entries.
pub struct ModuleExports<M> {
    default: Option<M>,
    named: Vec<(&'static str, M)>,
}

impl<M> ModuleExports<M> {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
        }
    }

    pub fn with_default(mut self, renderable: M) -> Self {
        self.default = Some(renderable);
        self
    }

    pub fn with_named(mut self, name: &'static str, renderable: M) -> Self {
        self.named.push((name, renderable));
        self
    }

    fn take_default(self) -> Option<M> {
        self.default
    }

    fn take_named(self, name: &str) -> Option<M> {
        self.named
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| m)
    }
}

impl<M> Default for ModuleExports<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// A fetched module adapted to the single shape the router mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedModule<M> {
    pub renderable: M,
}

pub type ModuleFuture<M> = LocalBoxFuture<'static, Result<ModuleExports<M>, LoadError>>;
pub type NormalizedFuture<M> = LocalBoxFuture<'static, Result<NormalizedModule<M>, LoadError>>;

/// A function producing a pending fetch of a raw module.
pub type ImportFn<M> = Box<dyn Fn() -> ModuleFuture<M>>;

/// A function producing a pending fetch of a normalized module.
pub type NormalizedLoader<M> = Box<dyn Fn() -> NormalizedFuture<M>>;

/// Adapts a module whose renderable is its default entry.
pub fn lazy_default<M: 'static>(import: ImportFn<M>) -> NormalizedLoader<M> {
    Box::new(move || {
        // Start the fetch now; normalization happens once it lands.
        let pending = import();
        Box::pin(async move {
            let exports = pending.await?;
            let renderable = exports.take_default().ok_or(LoadError::MissingDefault)?;
            Ok(NormalizedModule { renderable })
        })
    })
}

/// Adapts a module whose renderable is the entry named `name`.
pub fn lazy_named<M: 'static>(import: ImportFn<M>, name: &'static str) -> NormalizedLoader<M> {
    Box::new(move || {
        let pending = import();
        Box::pin(async move {
            let exports = pending.await?;
            let renderable = exports
                .take_named(name)
                .ok_or(LoadError::MissingExport(name))?;
            Ok(NormalizedModule { renderable })
        })
    })
}

/// Static mapping from every [`RouteKey`] to its normalized loader.
///
/// Total by construction: `build` is evaluated over [`RouteKey::ALL`], so
/// asking for a key without a loader is unrepresentable. The table is the
/// only configuration the cache depends on.
pub struct LoaderTable<M> {
    loaders: HashMap<RouteKey, NormalizedLoader<M>>,
}

impl<M> LoaderTable<M> {
    pub fn build(mut f: impl FnMut(RouteKey) -> NormalizedLoader<M>) -> Self {
        let mut loaders = HashMap::with_capacity(RouteKey::ALL.len());
        for key in RouteKey::ALL {
            loaders.insert(key, f(key));
        }
        Self { loaders }
    }

    /// Starts a fresh load for `key`. Callers other than the cache have no
    /// business here: every load that skips the cache duplicates a fetch.
    pub(crate) fn load(&self, key: RouteKey) -> NormalizedFuture<M> {
        (self.loaders[&key])()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn import_of(exports: fn() -> ModuleExports<&'static str>) -> ImportFn<&'static str> {
        Box::new(move || Box::pin(async move { Ok(exports()) }))
    }

    #[test]
    fn default_adapter_extracts_default_entry() {
        let loader = lazy_default(import_of(|| ModuleExports::new().with_default("home")));
        let module = block_on(loader()).expect("load succeeds");
        assert_eq!(module.renderable, "home");
    }

    #[test]
    fn named_adapter_extracts_named_entry() {
        let loader = lazy_named(
            import_of(|| {
                ModuleExports::new()
                    .with_named("DashboardLayout", "layout")
                    .with_named("Other", "other")
            }),
            "DashboardLayout",
        );
        let module = block_on(loader()).expect("load succeeds");
        assert_eq!(module.renderable, "layout");
    }

    #[test]
    fn missing_default_entry_is_an_error() {
        let loader = lazy_default(import_of(|| ModuleExports::new().with_named("X", "x")));
        assert_eq!(block_on(loader()), Err(LoadError::MissingDefault));
    }

    #[test]
    fn missing_named_entry_is_an_error() {
        let loader = lazy_named(
            import_of(|| ModuleExports::new().with_default("page")),
            "DocsLayout",
        );
        assert_eq!(block_on(loader()), Err(LoadError::MissingExport("DocsLayout")));
    }

    #[test]
    fn fetch_failure_propagates_untouched() {
        let loader = lazy_default::<&'static str>(Box::new(|| {
            Box::pin(async { Err(LoadError::Failed("chunk 404".to_string())) })
        }));
        assert_eq!(
            block_on(loader()),
            Err(LoadError::Failed("chunk 404".to_string()))
        );
    }

    #[test]
    fn table_covers_every_key() {
        let table = LoaderTable::build(|key| {
            lazy_default(Box::new(move || {
                Box::pin(async move { Ok(ModuleExports::new().with_default(key.label())) })
            }))
        });
        for key in RouteKey::ALL {
            let module = block_on(table.load(key)).expect("load succeeds");
            assert_eq!(module.renderable, key.label());
        }
    }
}
