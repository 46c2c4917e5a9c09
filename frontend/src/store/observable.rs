use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    value: T,
    observers: Vec<(u64, Observer<T>)>,
    next_observer_id: u64,
    /// Set while observers are being called; writes made meanwhile queue up
    notifying: bool,
    pending: VecDeque<T>,
}

/// Single-slot shared cell that notifies observers on every replacement.
///
/// Writes take effect immediately. Observers run synchronously after the
/// write, in registration order, with no borrow held, so they may read the
/// cell or write to it again. A write made from inside an observer is
/// delivered after the current round finishes, which keeps every observer
/// seeing the writes in the order they happened.
///
/// The cell is `!Send`; it belongs to the UI thread.
pub struct ObservableCell<T> {
    inner: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for ObservableCell<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Default + Clone + 'static> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> ObservableCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slot {
                value,
                observers: Vec::new(),
                next_observer_id: 0,
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value. `f` must not write to this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value wholesale and notify every observer
    pub fn set(&self, value: T) {
        let mut current = {
            let mut slot = self.inner.borrow_mut();
            slot.value = value.clone();
            if slot.notifying {
                slot.pending.push_back(value);
                return;
            }
            slot.notifying = true;
            value
        };

        loop {
            let observers: Vec<Observer<T>> = self
                .inner
                .borrow()
                .observers
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect();

            for observer in observers {
                observer(&current);
            }

            let mut slot = self.inner.borrow_mut();
            match slot.pending.pop_front() {
                Some(next) => current = next,
                None => {
                    slot.notifying = false;
                    break;
                }
            }
        }
    }

    /// Register `observer`; it stays registered until the returned guard drops
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slot = self.inner.borrow_mut();
            let id = slot.next_observer_id;
            slot.next_observer_id += 1;
            slot.observers.push((id, Rc::new(observer)));
            id
        };

        let weak: Weak<RefCell<Slot<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().observers.retain(|(observer_id, _)| *observer_id != id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

/// Keeps an observer registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unregisters the observer immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_set_replaces_value() {
        let cell = ObservableCell::new(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(cell.get(), 3);
        assert_eq!(cell.with(|value| value * 10), 30);
    }

    #[test]
    fn test_every_set_notifies_even_when_unchanged() {
        let cell = ObservableCell::new(String::new());
        let (seen, observer) = recorder::<String>();
        let _subscription = cell.subscribe(observer);

        cell.set("x".to_string());
        cell.set("x".to_string());

        assert_eq!(*seen.borrow(), vec!["x".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_all_observers_notified_in_registration_order() {
        let cell = ObservableCell::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let _first = cell.subscribe(move |value: &i32| first_log.borrow_mut().push(("first", *value)));
        let second_log = Rc::clone(&log);
        let _second = cell.subscribe(move |value: &i32| second_log.borrow_mut().push(("second", *value)));

        cell.set(7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let cell = ObservableCell::new(0);
        let (seen, observer) = recorder::<i32>();

        let subscription = cell.subscribe(observer);
        assert_eq!(cell.observer_count(), 1);
        cell.set(1);

        drop(subscription);
        assert_eq!(cell.observer_count(), 0);
        cell.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_observer_can_read_cell() {
        let cell = ObservableCell::new(0);
        let observed = Rc::new(Cell::new(-1));

        let reader = cell.clone();
        let sink = Rc::clone(&observed);
        let _subscription = cell.subscribe(move |_| sink.set(reader.get()));

        cell.set(5);
        assert_eq!(observed.get(), 5);
    }

    #[test]
    fn test_nested_write_keeps_linear_history() {
        let cell = ObservableCell::new(0);

        // First observer bumps 1 to 2 from inside the notification
        let writer = cell.clone();
        let _bump = cell.subscribe(move |value: &i32| {
            if *value == 1 {
                writer.set(2);
            }
        });
        let (seen, observer) = recorder::<i32>();
        let _record = cell.subscribe(observer);

        cell.set(1);

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_subscription_outliving_cell_is_harmless() {
        let cell = ObservableCell::new(0);
        let subscription = cell.subscribe(|_| {});
        drop(cell);
        drop(subscription);
    }

    #[test]
    fn test_clones_share_state() {
        let cell = ObservableCell::new(0);
        let other = cell.clone();
        other.set(9);
        assert_eq!(cell.get(), 9);
        assert!(cell == other);
        assert!(cell != ObservableCell::new(9));
    }
}
