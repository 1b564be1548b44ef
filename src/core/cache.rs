//! The route-module cache.
//!
//! One registry for the whole session maps each [`RouteKey`] to its
//! lazily-started, memoized load. The entry is created the first time the
//! key is demanded, whether by navigation ([`RouteModuleCache::resolve`])
//! or by hover intent ([`RouteModuleCache::prefetch`]), and every later
//! demand returns the identical shared handle. A module load is therefore
//! initiated at most once per key per session, no matter how callers
//! interleave.
//!
//! Entries are never evicted, invalidated, or retried; a failed load stays
//! memoized and every subsequent caller observes the same failure. That
//! mirrors the product as built (see DESIGN.md).
//!
//! Single-threaded by design: check-then-create happens in one synchronous
//! step, so no lock discipline is needed and the type is deliberately not
//! `Sync`.

use core::cell::RefCell;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use hashbrown::HashMap;

use crate::loader::{LoadError, LoaderTable, NormalizedModule};
use crate::router::RouteKey;

/// The pending-or-resolved load for one key. Cloning shares the same
/// underlying operation; awaiting any clone yields the one outcome.
pub type SharedLoad<M> = Shared<LocalBoxFuture<'static, Result<NormalizedModule<M>, LoadError>>>;

type Spawner = Box<dyn Fn(LocalBoxFuture<'static, ()>)>;

pub struct RouteModuleCache<M: Clone + 'static> {
    table: LoaderTable<M>,
    entries: RefCell<HashMap<RouteKey, SharedLoad<M>>>,
    spawner: Spawner,
}

impl<M: Clone + 'static> RouteModuleCache<M> {
    /// `spawner` drives freshly created entries to completion in the
    /// background (`spawn_local` in the app, a local pool in tests), so a
    /// prefetched module makes progress even if nobody awaits it.
    pub fn new(
        table: LoaderTable<M>,
        spawner: impl Fn(LocalBoxFuture<'static, ()>) + 'static,
    ) -> Self {
        Self {
            table,
            entries: RefCell::new(HashMap::new()),
            spawner: Box::new(spawner),
        }
    }

    /// Returns the memoized load for `key`, creating it on first demand.
    ///
    /// Callers arriving after the load settled get the same handle and see
    /// the settled outcome immediately.
    pub fn resolve(&self, key: RouteKey) -> SharedLoad<M> {
        self.entry(key)
    }

    /// Fire-and-forget [`resolve`](Self::resolve): creates the entry if
    /// absent and leaves it for future callers. Idempotent, so hover
    /// handlers may call it as often as they like.
    pub fn prefetch(&self, key: RouteKey) {
        let _ = self.entry(key);
    }

    /// The settled outcome for `key`, if its load exists and has finished.
    /// Never starts a load.
    pub fn peek(&self, key: RouteKey) -> Option<Result<NormalizedModule<M>, LoadError>> {
        self.entries
            .borrow()
            .get(&key)
            .and_then(|load| load.peek().cloned())
    }

    fn entry(&self, key: RouteKey) -> SharedLoad<M> {
        if let Some(existing) = self.entries.borrow().get(&key) {
            return existing.clone();
        }

        // The loader runs now (eager, like a promise), so the at-most-once
        // guarantee counts creation, not first poll.
        let load = self.table.load(key).shared();
        self.entries.borrow_mut().insert(key, load.clone());

        let driven = load.clone();
        (self.spawner)(Box::pin(async move {
            let _ = driven.await;
        }));

        load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{lazy_default, ModuleExports};
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::rc::Rc;

    type Counters = HashMap<RouteKey, Rc<Cell<usize>>>;

    fn counters() -> Counters {
        RouteKey::ALL
            .iter()
            .map(|&k| (k, Rc::new(Cell::new(0))))
            .collect()
    }

    /// Every loader counts its invocations and yields the key's label;
    /// loaders for `failing` keys reject instead.
    fn cache_with(
        counts: &Counters,
        failing: &'static [RouteKey],
        pool: &LocalPool,
    ) -> RouteModuleCache<&'static str> {
        let table = LoaderTable::build(|key| {
            let count = Rc::clone(&counts[&key]);
            lazy_default(Box::new(move || {
                count.set(count.get() + 1);
                Box::pin(async move {
                    if failing.contains(&key) {
                        Err(LoadError::Failed("chunk 404".to_string()))
                    } else {
                        Ok(ModuleExports::new().with_default(key.label()))
                    }
                })
            }))
        });

        let spawner = pool.spawner();
        RouteModuleCache::new(table, move |fut| {
            let _ = spawner.spawn_local(fut);
        })
    }

    #[test]
    fn at_most_one_fetch_per_key() {
        let counts = counters();
        let mut pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        cache.prefetch(RouteKey::Home);
        cache.prefetch(RouteKey::Home);
        cache.prefetch(RouteKey::Home);
        let _ = cache.resolve(RouteKey::Home);
        let _ = cache.resolve(RouteKey::Home);
        pool.run_until_stalled();

        assert_eq!(counts[&RouteKey::Home].get(), 1);
    }

    #[test]
    fn resolve_returns_the_identical_shared_load() {
        let counts = counters();
        let pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        let a = cache.resolve(RouteKey::Projects);
        let b = cache.resolve(RouteKey::Projects);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn prefetch_then_resolve_reuses_the_entry() {
        let counts = counters();
        let mut pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        cache.prefetch(RouteKey::DocsOverview);
        pool.run_until_stalled();
        let load = cache.resolve(RouteKey::DocsOverview);
        let module = pool.run_until(load).expect("load succeeds");

        assert_eq!(module.renderable, "docs_overview");
        assert_eq!(counts[&RouteKey::DocsOverview].get(), 1);
    }

    #[test]
    fn keys_are_independent() {
        let counts = counters();
        let mut pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        let _ = cache.resolve(RouteKey::Overview);
        cache.prefetch(RouteKey::Settings);
        pool.run_until_stalled();

        assert_eq!(counts[&RouteKey::Overview].get(), 1);
        assert_eq!(counts[&RouteKey::Settings].get(), 1);
        assert_eq!(counts[&RouteKey::Subscription].get(), 0);
    }

    #[test]
    fn failure_is_memoized_not_retried() {
        let counts = counters();
        let mut pool = LocalPool::new();
        let cache = cache_with(&counts, &[RouteKey::Subscription], &pool);

        let first = pool.run_until(cache.resolve(RouteKey::Subscription));
        let second = pool.run_until(cache.resolve(RouteKey::Subscription));

        assert_eq!(first, Err(LoadError::Failed("chunk 404".to_string())));
        assert_eq!(first, second);
        assert_eq!(counts[&RouteKey::Subscription].get(), 1);

        // Prefetch after failure is a read, not a restart.
        cache.prefetch(RouteKey::Subscription);
        pool.run_until_stalled();
        assert_eq!(counts[&RouteKey::Subscription].get(), 1);
    }

    #[test]
    fn peek_reports_settled_outcomes_without_loading() {
        let counts = counters();
        let mut pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        assert_eq!(cache.peek(RouteKey::Home), None);
        assert_eq!(counts[&RouteKey::Home].get(), 0);

        cache.prefetch(RouteKey::Home);
        pool.run_until_stalled();

        let peeked = cache.peek(RouteKey::Home).expect("entry settled");
        assert_eq!(peeked.expect("load succeeds").renderable, "home");
        assert_eq!(counts[&RouteKey::Home].get(), 1);
    }

    #[test]
    fn loader_runs_eagerly_at_entry_creation() {
        let counts = counters();
        let pool = LocalPool::new();
        let cache = cache_with(&counts, &[], &pool);

        // No polling at all; creation alone must have started the load.
        cache.prefetch(RouteKey::ProjectFeedbacks);
        assert_eq!(counts[&RouteKey::ProjectFeedbacks].get(), 1);
    }
}
