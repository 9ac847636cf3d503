//! Navigation-related state types.
//!
//! The navigator keeps the view stack and delivers a focus event to every
//! live subscriber whenever a view becomes the current view again.

use log::*;
use std::sync::{mpsc, Arc, Mutex, Weak};

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum View {
    AllPosts,
    AddPost,
}

/// Anything that can move the application to another view.
///
pub trait Navigate {
    fn navigate(&mut self, view: View);
}

struct Listener {
    id: u64,
    view: View,
    sender: mpsc::Sender<View>,
}

type Listeners = Arc<Mutex<Vec<Listener>>>;

/// Handle for a focus listener. The listener is unregistered when the
/// handle is dropped.
///
pub struct FocusSubscription {
    id: u64,
    view: View,
    receiver: mpsc::Receiver<View>,
    listeners: Weak<Mutex<Vec<Listener>>>,
}

impl FocusSubscription {
    /// Return the view this subscription listens to.
    ///
    pub fn view(&self) -> View {
        self.view
    }

    /// Consume pending focus events and return how many there were.
    ///
    pub fn drain(&self) -> usize {
        self.receiver.try_iter().count()
    }
}

impl Drop for FocusSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut guard) = listeners.lock() {
                guard.retain(|listener| listener.id != self.id);
            }
        }
        debug!("Released focus listener {} for {:?}.", self.id, self.view);
    }
}

/// Oversees the view stack and focus listeners.
///
pub struct Navigator {
    stack: Vec<View>,
    listeners: Listeners,
    next_listener_id: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(View::AllPosts)
    }
}

impl Navigator {
    /// Return a new navigator with the given base view.
    ///
    pub fn new(base: View) -> Self {
        Navigator {
            stack: vec![base],
            listeners: Arc::new(Mutex::new(vec![])),
            next_listener_id: 0,
        }
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        // The base view is never popped.
        self.stack.last().copied().unwrap_or(View::AllPosts)
    }

    /// Return the depth of the view stack.
    ///
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Register a focus listener for the view.
    ///
    pub fn subscribe_focus(&mut self, view: View) -> FocusSubscription {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        let (sender, receiver) = mpsc::channel();
        if let Ok(mut guard) = self.listeners.lock() {
            guard.push(Listener { id, view, sender });
        }
        debug!("Registered focus listener {} for {:?}.", id, view);
        FocusSubscription {
            id,
            view,
            receiver,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Return the number of live listeners for the view.
    ///
    #[cfg(test)]
    pub fn listener_count(&self, view: View) -> usize {
        self.listeners
            .lock()
            .map(|guard| guard.iter().filter(|l| l.view == view).count())
            .unwrap_or(0)
    }

    /// Pop the current view unless it is the base view. Returns the view
    /// that was removed.
    ///
    pub fn back(&mut self) -> Option<View> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        self.emit_focus(self.current_view());
        popped
    }

    fn emit_focus(&self, view: View) {
        debug!("View {:?} gained focus.", view);
        if let Ok(mut guard) = self.listeners.lock() {
            // Receivers that are gone no longer count as listeners.
            guard.retain(|listener| listener.view != view || listener.sender.send(view).is_ok());
        }
    }
}

impl Navigate for Navigator {
    /// Make the view current: pop back to it when it is already on the stack,
    /// otherwise push it. Navigating to the current view is a no-op.
    ///
    fn navigate(&mut self, view: View) {
        if self.current_view() == view {
            return;
        }
        match self.stack.iter().position(|v| *v == view) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(view),
        }
        self.emit_focus(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_pushes_new_views() {
        let mut navigator = Navigator::new(View::AllPosts);
        navigator.navigate(View::AddPost);
        assert_eq!(navigator.current_view(), View::AddPost);
        assert_eq!(navigator.depth(), 2);
    }

    #[test]
    fn navigate_pops_back_to_existing_view() {
        let mut navigator = Navigator::new(View::AllPosts);
        navigator.navigate(View::AddPost);
        navigator.navigate(View::AllPosts);
        assert_eq!(navigator.current_view(), View::AllPosts);
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn back_never_pops_base_view() {
        let mut navigator = Navigator::new(View::AllPosts);
        assert_eq!(navigator.back(), None);
        navigator.navigate(View::AddPost);
        assert_eq!(navigator.back(), Some(View::AddPost));
        assert_eq!(navigator.back(), None);
        assert_eq!(navigator.current_view(), View::AllPosts);
    }

    #[test]
    fn focus_is_delivered_to_matching_subscribers() {
        let mut navigator = Navigator::new(View::AllPosts);
        let add_post = navigator.subscribe_focus(View::AddPost);
        let all_posts = navigator.subscribe_focus(View::AllPosts);

        navigator.navigate(View::AddPost);
        assert_eq!(add_post.drain(), 1);
        assert_eq!(all_posts.drain(), 0);

        navigator.back();
        assert_eq!(add_post.drain(), 0);
        assert_eq!(all_posts.drain(), 1);
    }

    #[test]
    fn navigating_to_current_view_emits_nothing() {
        let mut navigator = Navigator::new(View::AllPosts);
        navigator.navigate(View::AddPost);
        let subscription = navigator.subscribe_focus(View::AddPost);
        navigator.navigate(View::AddPost);
        assert_eq!(subscription.drain(), 0);
    }

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let mut navigator = Navigator::new(View::AllPosts);
        let subscription = navigator.subscribe_focus(View::AddPost);
        assert_eq!(navigator.listener_count(View::AddPost), 1);
        assert_eq!(subscription.view(), View::AddPost);
        drop(subscription);
        assert_eq!(navigator.listener_count(View::AddPost), 0);
        navigator.navigate(View::AddPost);
    }

    #[test]
    fn subscription_outliving_navigator_drops_cleanly() {
        let mut navigator = Navigator::new(View::AllPosts);
        let subscription = navigator.subscribe_focus(View::AddPost);
        drop(navigator);
        assert_eq!(subscription.drain(), 0);
    }
}
