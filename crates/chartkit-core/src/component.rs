#![forbid(unsafe_code)]

//! Shared component handle with container membership and detach notification.
//!
//! # Design
//!
//! A [`Component`] wraps an [`Element`] in reference-counted storage. Cloning
//! the handle yields another reference to the **same** component; identity
//! is by allocation, exposed as a stable [`ComponentId`].
//!
//! Containers own the components they hold. The component keeps only a
//! [`ContainerId`] back-reference (lookup, never ownership), so the ownership
//! graph stays acyclic.
//!
//! Containers learn that a child left through [`Component::on_detach`]. The
//! component stores subscribers as `Weak` callbacks; the strong side lives in
//! the [`DetachSubscription`] guard held by the subscriber. Dropping the guard
//! unsubscribes. Dead entries are pruned lazily on the next notification.
//!
//! # Failure Modes
//!
//! - **Re-entrant layout**: calling [`Component::compute_layout`] on a
//!   component from inside its own element's `compute_layout` panics
//!   (RefCell borrow rules).
//! - Detach callbacks run with no interior borrow held, so a callback may
//!   freely subscribe, unsubscribe, or re-attach the component.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::{Element, SpaceRequest};
use crate::geometry::Rect;

type DetachCallbackRc = Rc<dyn Fn(&Component)>;
type DetachCallbackWeak = Weak<dyn Fn(&Component)>;

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Process-unique identity of a container, used as a component's parent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh container identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

struct ComponentInner {
    id: ComponentId,
    element: RefCell<Box<dyn Element>>,
    parent: Cell<Option<ContainerId>>,
    bounds: Cell<Rect>,
    detach_subscribers: RefCell<Vec<DetachCallbackWeak>>,
}

/// A child element plus its membership state.
///
/// # Invariants
///
/// 1. `parent()` is `Some` only while some container holds the component.
/// 2. `detach()` always clears the parent before notifying subscribers.
/// 3. Subscribers are notified in registration order.
pub struct Component {
    inner: Rc<ComponentInner>,
}

// Manual Clone: shares the same Rc.
impl Clone for Component {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.inner.id)
            .field("parent", &self.inner.parent.get())
            .field("bounds", &self.inner.bounds.get())
            .field(
                "detach_subscribers",
                &self.inner.detach_subscribers.borrow().len(),
            )
            .finish_non_exhaustive()
    }
}

impl Component {
    /// Wrap an element in a new, unparented component.
    #[must_use]
    pub fn new(element: impl Element + 'static) -> Self {
        Self::from_boxed(Box::new(element))
    }

    /// Wrap an already boxed element.
    #[must_use]
    pub fn from_boxed(element: Box<dyn Element>) -> Self {
        Self {
            inner: Rc::new(ComponentInner {
                id: ComponentId(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed)),
                element: RefCell::new(element),
                parent: Cell::new(None),
                bounds: Cell::new(Rect::default()),
                detach_subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.inner.id
    }

    /// Forward a space query to the element.
    #[must_use]
    pub fn requested_space(&self, available_width: u32, available_height: u32) -> SpaceRequest {
        self.inner
            .element
            .borrow()
            .requested_space(available_width, available_height)
    }

    #[must_use]
    pub fn fixed_width(&self) -> bool {
        self.inner.element.borrow().fixed_width()
    }

    #[must_use]
    pub fn fixed_height(&self) -> bool {
        self.inner.element.borrow().fixed_height()
    }

    /// Record the final box and hand it to the element.
    pub fn compute_layout(&self, bounds: Rect) {
        self.inner.bounds.set(bounds);
        self.inner.element.borrow_mut().compute_layout(bounds);
    }

    /// The box assigned by the last [`compute_layout`](Self::compute_layout).
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.inner.bounds.get()
    }

    /// The container currently holding this component, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<ContainerId> {
        self.inner.parent.get()
    }

    /// Record `container` as this component's parent.
    ///
    /// Containers call this after adopting the component; a component that
    /// already has a parent must be [`detach`](Self::detach)ed first.
    pub fn attach(&self, container: ContainerId) {
        debug_assert!(
            self.inner.parent.get().is_none(),
            "attach() on a component that still has a parent"
        );
        self.inner.parent.set(Some(container));
        tracing::trace!(component = %self.inner.id, parent = %container, "component attached");
    }

    /// Leave the current container and notify detach subscribers.
    ///
    /// Subscribers are notified even when the component has no parent, so
    /// calling this is always safe and idempotent from a membership point of
    /// view.
    pub fn detach(&self) {
        let previous = self.inner.parent.take();
        tracing::trace!(component = %self.inner.id, parent = ?previous, "component detached");
        self.notify_detached();
    }

    /// Subscribe to detach notifications.
    ///
    /// Returns a [`DetachSubscription`] guard. Dropping the guard unsubscribes
    /// the callback.
    pub fn on_detach(&self, callback: impl Fn(&Component) + 'static) -> DetachSubscription {
        let strong: DetachCallbackRc = Rc::new(callback);
        self.inner
            .detach_subscribers
            .borrow_mut()
            .push(Rc::downgrade(&strong));
        DetachSubscription { _guard: strong }
    }

    /// Number of registered detach subscribers, including dead ones not yet
    /// pruned.
    #[must_use]
    pub fn detach_subscriber_count(&self) -> usize {
        self.inner.detach_subscribers.borrow().len()
    }

    fn notify_detached(&self) {
        // Collect live callbacks first so none of them runs under the borrow.
        let callbacks: Vec<DetachCallbackRc> = {
            let mut subscribers = self.inner.detach_subscribers.borrow_mut();
            subscribers.retain(|w| w.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in &callbacks {
            callback(self);
        }
    }
}

/// RAII guard for a detach callback.
///
/// Holds the only strong reference to the callback; the component keeps a
/// `Weak` that stops upgrading once the guard is dropped.
pub struct DetachSubscription {
    _guard: DetachCallbackRc,
}

impl fmt::Debug for DetachSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachSubscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Spacer;

    struct Recorder {
        last: Rc<Cell<Rect>>,
    }

    impl Element for Recorder {
        fn requested_space(&self, available_width: u32, _available_height: u32) -> SpaceRequest {
            SpaceRequest::new(available_width.min(7), 3)
        }

        fn fixed_height(&self) -> bool {
            true
        }

        fn compute_layout(&mut self, bounds: Rect) {
            self.last.set(bounds);
        }
    }

    #[test]
    fn ids_are_unique_and_clones_share_identity() {
        let a = Component::new(Spacer);
        let b = Component::new(Spacer);
        let a2 = a.clone();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a2.id());
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn forwards_capability_queries() {
        let last = Rc::new(Cell::new(Rect::default()));
        let c = Component::new(Recorder {
            last: Rc::clone(&last),
        });

        assert_eq!(c.requested_space(5, 100), SpaceRequest::new(5, 3));
        assert_eq!(c.requested_space(50, 100), SpaceRequest::new(7, 3));
        assert!(!c.fixed_width());
        assert!(c.fixed_height());

        let bounds = Rect::new(1, 2, 3, 4);
        c.compute_layout(bounds);
        assert_eq!(c.bounds(), bounds);
        assert_eq!(last.get(), bounds);
    }

    #[test]
    fn attach_and_detach_update_parent() {
        let c = Component::new(Spacer);
        let container = ContainerId::next();
        assert_eq!(c.parent(), None);

        c.attach(container);
        assert_eq!(c.parent(), Some(container));

        c.detach();
        assert_eq!(c.parent(), None);
    }

    #[test]
    fn detach_notifies_subscribers_in_order() {
        let c = Component::new(Spacer);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _s1 = c.on_detach(move |_| o1.borrow_mut().push(1));
        let o2 = Rc::clone(&order);
        let _s2 = c.on_detach(move |_| o2.borrow_mut().push(2));

        c.detach();
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn subscriber_sees_cleared_parent() {
        let c = Component::new(Spacer);
        c.attach(ContainerId::next());
        let seen = Rc::new(Cell::new(Some(ContainerId::next())));
        let seen_clone = Rc::clone(&seen);

        let _sub = c.on_detach(move |component| seen_clone.set(component.parent()));
        c.detach();

        assert_eq!(seen.get(), None);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let c = Component::new(Spacer);
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);

        let sub = c.on_detach(move |_| count_clone.set(count_clone.get() + 1));
        c.detach();
        assert_eq!(count.get(), 1);

        drop(sub);
        c.detach();
        assert_eq!(count.get(), 1);

        // Pruned on the notification after the drop.
        assert_eq!(c.detach_subscriber_count(), 0);
    }

    #[test]
    fn callback_may_drop_its_own_subscription() {
        let c = Component::new(Spacer);
        let slot: Rc<RefCell<Option<DetachSubscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0u32));

        let slot_clone = Rc::clone(&slot);
        let count_clone = Rc::clone(&count);
        let sub = c.on_detach(move |_| {
            count_clone.set(count_clone.get() + 1);
            slot_clone.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        c.detach();
        c.detach();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callback_may_reattach() {
        let c = Component::new(Spacer);
        let target = ContainerId::next();
        let _sub = c.on_detach(move |component| component.attach(target));

        c.attach(ContainerId::next());
        c.detach();
        assert_eq!(c.parent(), Some(target));
    }
}
