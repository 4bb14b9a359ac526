//! Observer list with explicit unsubscribe.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(T)>;

/// Ordered set of callbacks notified with a copy of each new value.
///
/// Notification snapshots the list first, so a callback may subscribe,
/// unsubscribe, or trigger another notification without a borrow panic.
/// Observers removed earlier in the same round are skipped. A nested
/// notification supersedes the round it interrupts: the outer round stops,
/// so no observer ends on a stale value.
pub(crate) struct ObserverList<T> {
    next_id: Cell<u64>,
    round: Cell<u64>,
    entries: RefCell<Vec<(u64, Callback<T>)>>,
}

impl<T: Copy> ObserverList<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            round: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, callback: impl Fn(T) + 'static) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub(crate) fn unsubscribe(&self, id: u64) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn callback(&self, id: u64) -> Option<Callback<T>> {
        self.entries
            .borrow()
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, callback)| Rc::clone(callback))
    }

    pub(crate) fn notify(&self, value: T) {
        let round = self.round.get().wrapping_add(1);
        self.round.set(round);
        let snapshot: Vec<(u64, Callback<T>)> = self
            .entries
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();
        for (id, callback) in snapshot {
            if self.round.get() != round {
                break;
            }
            if !self.is_live(id) {
                continue;
            }
            callback(value);
        }
    }

    fn is_live(&self, id: u64) -> bool {
        self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_reaches_every_subscriber_in_order() {
        let list = ObserverList::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            list.subscribe(move |value: u8| seen.borrow_mut().push(format!("{tag}{value}")));
        }
        list.notify(1);
        assert_eq!(*seen.borrow(), vec!["a1".to_string(), "b1".to_string()]);
    }

    #[test]
    fn unsubscribe_removes_only_the_target() {
        let list = ObserverList::new();
        let first = list.subscribe(|_: u8| {});
        let second = list.subscribe(|_: u8| {});
        assert!(list.unsubscribe(first));
        assert!(!list.unsubscribe(first));
        assert_eq!(list.len(), 1);
        assert!(list.callback(second).is_some());
    }

    #[test]
    fn callbacks_may_unsubscribe_during_notify() {
        let list = Rc::new(ObserverList::new());
        let calls = Rc::new(Cell::new(0));
        let id_cell = Rc::new(Cell::new(None));
        let inner = Rc::clone(&list);
        let counter = Rc::clone(&calls);
        let own_id = Rc::clone(&id_cell);
        let id = list.subscribe(move |_: u8| {
            counter.set(counter.get() + 1);
            if let Some(id) = own_id.get() {
                inner.unsubscribe(id);
            }
        });
        id_cell.set(Some(id));
        list.notify(0);
        list.notify(0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn observer_removed_mid_round_is_skipped() {
        let list = Rc::new(ObserverList::new());
        let later_calls = Rc::new(Cell::new(0));
        let later_id = Rc::new(Cell::new(None));
        let remover = Rc::clone(&list);
        let target = Rc::clone(&later_id);
        list.subscribe(move |_: u8| {
            if let Some(id) = target.get() {
                remover.unsubscribe(id);
            }
        });
        let counter = Rc::clone(&later_calls);
        later_id.set(Some(list.subscribe(move |_: u8| counter.set(counter.get() + 1))));

        list.notify(0);
        assert_eq!(later_calls.get(), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn nested_notify_supersedes_the_outer_round() {
        let list = Rc::new(ObserverList::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let inner = Rc::clone(&list);
            list.subscribe(move |value: u8| {
                if value == 1 {
                    inner.notify(2);
                }
            });
        }
        {
            let seen = Rc::clone(&seen);
            list.subscribe(move |value: u8| seen.borrow_mut().push(value));
        }

        list.notify(1);
        assert_eq!(*seen.borrow(), vec![2]);
    }
}
