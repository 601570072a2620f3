use std::cell::RefCell;
use std::rc::Rc;

use yew::html::Scope;
use yew::{Callback, Component};

use common::cache::{Lookup, QueryCache};

use crate::config;

/// The app-wide query cache, handed down through a Yew context.
///
/// Components share one `QueryCache`; equality is identity so the context
/// never triggers re-renders on its own.
#[derive(Clone)]
pub struct SharedCache(Rc<RefCell<QueryCache>>);

impl PartialEq for SharedCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedCache {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(QueryCache::new(config::cache_stale_ms()))))
    }
}

/// Owned copy of a lookup result.
pub enum Cached {
    Fresh(String),
    Stale(String),
    Missing,
}

impl SharedCache {
    pub fn lookup(&self, key: &str) -> Cached {
        match self.0.borrow().lookup(key, now_ms()) {
            Lookup::Fresh(body) => Cached::Fresh(body.to_string()),
            Lookup::Stale(body) => Cached::Stale(body.to_string()),
            Lookup::Missing => Cached::Missing,
        }
    }

    pub fn store(&self, key: &str, body: &str) {
        self.0.borrow_mut().store(key, body, now_ms());
    }

    pub fn invalidate(&self, key: &str) {
        self.0.borrow_mut().invalidate(key);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// The cache provided by `App`, when `scope` sits below it.
pub fn shared_cache<C: Component>(scope: &Scope<C>) -> Option<SharedCache> {
    scope
        .context::<SharedCache>(Callback::noop())
        .map(|(cache, _handle)| cache)
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}
