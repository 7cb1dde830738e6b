//! Scoped platform subscriptions. Each guard releases its subscription when
//! dropped, so nothing registered by the page outlives the owner.

use crate::domain::model::BlockId;
use crate::domain::ports::{IntersectionObserver, ListenerId, ObservationId, ObserveError, ScrollSource};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Observation<P: IntersectionObserver> {
    platform: Rc<RefCell<P>>,
    id: ObservationId,
}

impl<P: IntersectionObserver> Observation<P> {
    pub fn start(
        platform: &Rc<RefCell<P>>,
        target: &BlockId,
        threshold: f64,
    ) -> Result<Self, ObserveError> {
        let id = platform.borrow_mut().observe(target, threshold)?;
        Ok(Self {
            platform: Rc::clone(platform),
            id,
        })
    }

    pub fn id(&self) -> ObservationId {
        self.id
    }
}

impl<P: IntersectionObserver> Drop for Observation<P> {
    fn drop(&mut self) {
        match self.platform.try_borrow_mut() {
            Ok(mut platform) => platform.unobserve(self.id),
            Err(_) => tracing::warn!(
                "platform busy, observation {:?} could not be released",
                self.id
            ),
        }
    }
}

pub struct ScrollListener<P: ScrollSource> {
    platform: Rc<RefCell<P>>,
    id: ListenerId,
}

impl<P: ScrollSource> ScrollListener<P> {
    pub fn register(platform: &Rc<RefCell<P>>) -> Self {
        let id = platform.borrow_mut().add_scroll_listener();
        Self {
            platform: Rc::clone(platform),
            id,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<P: ScrollSource> Drop for ScrollListener<P> {
    fn drop(&mut self) {
        match self.platform.try_borrow_mut() {
            Ok(mut platform) => platform.remove_scroll_listener(self.id),
            Err(_) => tracing::warn!(
                "platform busy, scroll listener {:?} could not be released",
                self.id
            ),
        }
    }
}
