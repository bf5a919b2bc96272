//! Project store: the single source of truth for the board.
//!
//! The store owns the ordered project collection and a list of listeners.
//! Every mutation is followed by one synchronous notification that hands
//! each live listener the complete collection, in registration order.

use crate::board::domain::{Project, ProjectId, ProjectStatus};
use mockable::{Clock, DefaultClock};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tracing::{debug, trace};

/// Callback invoked with the full project collection after a mutation.
pub type ProjectListener = Rc<dyn Fn(&[Project])>;

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the numeric value of the identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(SubscriptionId, ProjectListener)>,
}

impl ListenerSet {
    fn insert(&mut self, listener: ProjectListener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    fn ids(&self) -> Vec<SubscriptionId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    fn get(&self, id: SubscriptionId) -> Option<ProjectListener> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, listener)| Rc::clone(listener))
    }
}

/// Handle to a registered listener.
///
/// Dropping the handle unsubscribes the listener. Use [`Subscription::detach`]
/// to keep it registered for the lifetime of the store.
#[must_use = "dropping a subscription unsubscribes its listener"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<ListenerSet>>,
}

impl Subscription {
    /// Returns the subscription identifier.
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns `true` while the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }

    /// Unregisters the listener.
    pub fn cancel(self) {
        drop(self);
    }

    /// Keeps the listener registered until the store is dropped.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && registry.borrow_mut().remove(self.id)
        {
            trace!(subscription = %self.id, "listener unsubscribed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Ordered project collection with synchronous change notification.
///
/// A board constructs exactly one store and shares it with every view
/// through an `Rc`.
pub struct ProjectStore<C = DefaultClock>
where
    C: Clock,
{
    clock: Arc<C>,
    projects: RefCell<Vec<Project>>,
    listeners: Rc<RefCell<ListenerSet>>,
}

impl Default for ProjectStore<DefaultClock> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C> ProjectStore<C>
where
    C: Clock,
{
    /// Creates an empty store stamping projects with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            projects: RefCell::new(Vec::new()),
            listeners: Rc::new(RefCell::new(ListenerSet::default())),
        }
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Inputs are not validated here; callers validate before creating.
    pub fn create_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people, &*self.clock);
        let id = project.id();
        debug!(project_id = %id, title = project.title(), people, "project created");
        self.projects.borrow_mut().push(project);
        self.notify();
        id
    }

    /// Moves a project to `new_status` and notifies every listener.
    ///
    /// Unknown identifiers and moves to the current status are ignored
    /// without notifying. Returns `true` when the status changed.
    pub fn move_project_status(&self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let moved = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id() == id) {
                Some(project) if project.status() != new_status => {
                    project.set_status(new_status);
                    true
                }
                Some(_) => {
                    trace!(project_id = %id, status = %new_status, "project already in lane");
                    false
                }
                None => {
                    trace!(project_id = %id, "move ignored for unknown project");
                    false
                }
            }
        };

        if moved {
            debug!(project_id = %id, status = %new_status, "project moved");
            self.notify();
        }
        moved
    }

    /// Registers a listener for every future mutation.
    ///
    /// The listener is not invoked at registration time; it first runs after
    /// the next mutation.
    pub fn subscribe(&self, listener: impl Fn(&[Project]) + 'static) -> Subscription {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));
        trace!(subscription = %id, "listener subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Returns the current projects in creation order.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    /// Returns the project with the given identifier.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    /// Returns `true` when the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    // Borrows are released before each listener runs so a listener may call
    // back into the store. Each listener is looked up again right before it
    // runs, so one cancelled earlier in the same pass is skipped.
    fn notify(&self) {
        let snapshot = self.projects.borrow().clone();
        let ids = self.listeners.borrow().ids();
        trace!(listeners = ids.len(), projects = snapshot.len(), "notifying listeners");
        for id in ids {
            let Some(listener) = self.listeners.borrow().get(id) else {
                trace!(subscription = %id, "skipping cancelled listener");
                continue;
            };
            listener(&snapshot);
        }
    }
}

impl<C> fmt::Debug for ProjectStore<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.borrow().len())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
