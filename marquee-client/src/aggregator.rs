//! Incremental paginated list aggregation.
//!
//! Every list-shaped screen drives one of these: successive pages from the
//! gateway are merged into a single growing sequence, unique by id and in
//! first-seen order, with a single-flight guard so scroll events cannot
//! stack overlapping fetches. Instances are independent; there is no
//! cross-aggregator coordination.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{collections::HashSet, future::Future, sync::Mutex};

use marquee_model::{Identified, Page};

/// What to do with accumulated results when a fetch fails.
///
/// The screens of the original app disagreed on this; it is a per-instance
/// policy here rather than a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Leave the accumulated list untouched.
    #[default]
    KeepCurrent,
    /// Drop back to the initial empty state.
    ClearList,
}

struct Inner<T> {
    state: Mutex<Page<T>>,
    in_flight: AtomicBool,
    policy: FailurePolicy,
}

/// Accumulator merging successive result pages into a de-duplicated,
/// append-only sequence.
///
/// Cheap to clone; clones share state and the single-flight guard.
pub struct ListAggregator<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ListAggregator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for ListAggregator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAggregator")
            .field("in_flight", &self.inner.in_flight.load(Ordering::Acquire))
            .field("policy", &self.inner.policy)
            .finish()
    }
}

impl<T> Default for ListAggregator<T> {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}

impl<T> ListAggregator<T> {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(Page::default()),
                in_flight: AtomicBool::new(false),
                policy,
            }),
        }
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Whether another `fetch_next` can grow the list. Always true before
    /// the first successful fetch.
    pub fn has_more(&self) -> bool {
        let state = self.inner.state.lock().expect("aggregator lock poisoned");
        state.page == 0 || state.has_more()
    }

    /// Discard everything and return to the initial empty state. Called on
    /// filter/search-term/section changes.
    pub fn reset(&self) {
        let mut state = self.inner.state.lock().expect("aggregator lock poisoned");
        *state = Page::default();
    }

    fn try_begin_fetch(&self) -> bool {
        self.inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn end_fetch(&self) {
        self.inner.in_flight.store(false, Ordering::Release);
    }
}

impl<T: Identified + Clone> ListAggregator<T> {
    /// Current accumulated state.
    pub fn snapshot(&self) -> Page<T> {
        self.inner
            .state
            .lock()
            .expect("aggregator lock poisoned")
            .clone()
    }

    /// Fetch the page after the current one and append its unseen items.
    ///
    /// No-op returning the current snapshot when a fetch is already in
    /// flight; `fetch_page` is then never invoked. On a failed fetch the
    /// configured [`FailurePolicy`] applies.
    pub async fn fetch_next<F, Fut>(&self, fetch_page: F) -> Page<T>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Option<Page<T>>>,
    {
        if !self.try_begin_fetch() {
            return self.snapshot();
        }

        let next_page = {
            let state = self.inner.state.lock().expect("aggregator lock poisoned");
            state.page + 1
        };

        let fetched = fetch_page(next_page).await;
        let snapshot = self.apply(fetched, MergeMode::Append);
        self.end_fetch();
        snapshot
    }

    /// Replace-mode fetch: request page 1 and substitute the accumulated
    /// results with it. Used when the active filter or search term changes
    /// rather than on "load more".
    pub async fn refresh<F, Fut>(&self, fetch_page: F) -> Page<T>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Option<Page<T>>>,
    {
        if !self.try_begin_fetch() {
            return self.snapshot();
        }

        let fetched = fetch_page(1).await;
        let snapshot = self.apply(fetched, MergeMode::Replace);
        self.end_fetch();
        snapshot
    }

    fn apply(&self, fetched: Option<Page<T>>, mode: MergeMode) -> Page<T> {
        let mut state = self.inner.state.lock().expect("aggregator lock poisoned");
        match fetched {
            Some(incoming) => match mode {
                MergeMode::Append => merge_append(&mut state, incoming),
                MergeMode::Replace => *state = dedup_page(incoming),
            },
            None => match self.inner.policy {
                FailurePolicy::KeepCurrent => {}
                FailurePolicy::ClearList => *state = Page::default(),
            },
        }
        state.clone()
    }
}

#[derive(Clone, Copy)]
enum MergeMode {
    Append,
    Replace,
}

/// Append the incoming page's unseen items in received order and adopt its
/// pagination metadata. First-seen copies win on id collisions.
fn merge_append<T: Identified>(state: &mut Page<T>, incoming: Page<T>) {
    let mut seen: HashSet<u64> = state.results.iter().map(Identified::id).collect();
    for item in incoming.results {
        if seen.insert(item.id()) {
            state.results.push(item);
        }
    }
    state.page = incoming.page;
    state.total_pages = incoming.total_pages;
    state.total_results = incoming.total_results;
}

/// De-duplicate a single page against itself, first occurrence winning.
fn dedup_page<T: Identified>(mut page: Page<T>) -> Page<T> {
    let mut seen = HashSet::new();
    page.results.retain(|item| seen.insert(item.id()));
    page
}
