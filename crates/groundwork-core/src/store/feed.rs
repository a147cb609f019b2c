//! A view's live copy of the job list.

use std::{cell::RefCell, rc::Rc};

use log::warn;

use super::{JobStore, Subscription};
use crate::{display::JobBoard, error::Result, models::Job};

/// Cached job list kept fresh by the store's change signal.
///
/// Attaching subscribes and loads the list; every signal triggers a full
/// re-read. Dropping the feed releases the subscription.
pub struct JobFeed {
    jobs: Rc<RefCell<Vec<Job>>>,
    _subscription: Subscription,
}

impl JobFeed {
    /// Subscribe to `store` and load its current jobs.
    ///
    /// # Errors
    ///
    /// Returns the read error if the initial load fails; the subscription is
    /// released before returning.
    pub fn attach(store: &Rc<JobStore>) -> Result<Self> {
        let jobs = Rc::new(RefCell::new(Vec::new()));

        let reload = {
            let cache = Rc::clone(&jobs);
            let store = Rc::downgrade(store);
            move || {
                let Some(store) = store.upgrade() else {
                    return;
                };
                match store.list_all() {
                    Ok(latest) => *cache.borrow_mut() = latest,
                    Err(e) => warn!("Failed to reload jobs after change: {e}"),
                }
            }
        };
        let subscription = store.subscribe(reload);

        *jobs.borrow_mut() = store.list_all()?;

        Ok(Self {
            jobs,
            _subscription: subscription,
        })
    }

    /// A copy of the current list, newest first.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.jobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.borrow().is_empty()
    }

    /// The current list grouped by status.
    pub fn board(&self) -> JobBoard {
        JobBoard::from_jobs(self.jobs())
    }

    /// Release the subscription. Equivalent to dropping the feed.
    pub fn detach(self) {}
}
