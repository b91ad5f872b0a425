use leptos::prelude::*;

/// Generation handed out when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// In-memory mirror of the last successfully fetched list of one entity.
///
/// The list is only ever replaced as a whole. Every load takes a ticket first;
/// a response is applied only while its ticket is the newest one issued, so an
/// older request that answers late cannot overwrite a newer one.
pub struct EntityStore<T: Send + Sync + 'static> {
    items: RwSignal<Vec<T>>,
    issued: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for EntityStore<T> {}

impl<T: Send + Sync + 'static> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            issued: StoredValue::new(0),
        }
    }

    pub fn begin_load(&self) -> LoadTicket {
        let next = self.issued.get_value() + 1;
        self.issued.set_value(next);
        LoadTicket(next)
    }

    /// Replace the whole list. Returns `false` when a newer load was started
    /// after `ticket`; the items are dropped in that case, even if that newer
    /// load later fails.
    pub fn replace(&self, ticket: LoadTicket, items: Vec<T>) -> bool {
        if ticket.0 != self.issued.get_value() {
            log::debug!(
                "Dropping stale load #{} (latest is #{})",
                ticket.0,
                self.issued.get_value()
            );
            return false;
        }
        self.items.set(items);
        true
    }

    /// Tracked read for views
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with(|items| f(items))
    }

    /// Untracked read for services
    pub fn with_untracked<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with_untracked(|items| f(items))
    }

    pub fn is_empty(&self) -> bool {
        self.with_untracked(|items| items.is_empty())
    }

    pub fn len(&self) -> usize {
        self.with_untracked(|items| items.len())
    }
}

impl<T: Clone + Send + Sync + 'static> EntityStore<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.items.get_untracked()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.with_untracked(|items| items.iter().find(|item| pred(item)).cloned())
    }
}

impl<T: Send + Sync + 'static> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
