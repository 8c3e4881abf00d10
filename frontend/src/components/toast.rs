use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::timer::{BrowserScheduler, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
            ToastKind::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    /// 0 keeps the toast until it is dismissed.
    pub duration_ms: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToastError {
    #[error("toast message must not be empty")]
    EmptyMessage,
    #[error("toast manager used outside of a ToastProvider")]
    NoProvider,
}

struct Inner<S: Scheduler> {
    scheduler: S,
    next_id: u64,
    active: Vec<Toast>,
    timers: HashMap<ToastId, S::Handle>,
    subscriber: Option<Callback<Vec<Toast>>>,
}

// Clones share one queue. Dropping the last clone drops every timer handle.
pub struct ToastManager<S: Scheduler + 'static = BrowserScheduler> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> Clone for ToastManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Scheduler + 'static> PartialEq for ToastManager<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Scheduler + 'static> ToastManager<S> {
    pub fn from_context(context: Option<Self>) -> Result<Self, ToastError> {
        context.ok_or(ToastError::NoProvider)
    }

    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                scheduler,
                next_id: 0,
                active: Vec::new(),
                timers: HashMap::new(),
                subscriber: None,
            })),
        }
    }

    pub fn subscribe(&self, subscriber: Callback<Vec<Toast>>) {
        self.inner.borrow_mut().subscriber = Some(subscriber);
    }

    pub fn unsubscribe(&self) {
        self.inner.borrow_mut().subscriber = None;
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.borrow().active.clone()
    }

    pub fn add(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        title: Option<String>,
        duration_ms: Option<u32>,
    ) -> Result<ToastId, ToastError> {
        let message = message.into();
        if message.trim().is_empty() {
            warn!("Rejected {:?} toast with an empty message", kind);
            return Err(ToastError::EmptyMessage);
        }
        let duration_ms = duration_ms.unwrap_or(config::DEFAULT_TOAST_DURATION_MS);

        let (id, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = ToastId(inner.next_id);
            inner.active.push(Toast {
                id,
                kind,
                title,
                message,
                duration_ms,
            });
            if duration_ms > 0 {
                let weak = Rc::downgrade(&self.inner);
                let handle = inner.scheduler.schedule(
                    duration_ms,
                    Box::new(move || expire(weak, id)),
                );
                inner.timers.insert(id, handle);
            }
            (id, inner.active.clone())
        };

        debug!("Showing {} ({:?}, {}ms)", id, kind, duration_ms);
        self.publish(snapshot);
        Ok(id)
    }

    /// Unknown or already removed ids are ignored.
    pub fn remove(&self, id: ToastId) {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.active.len();
            inner.active.retain(|t| t.id != id);
            let timer = inner.timers.remove(&id);
            (inner.active.len() != before).then(|| (timer, inner.active.clone()))
        };

        // The timer handle is dropped here, outside the borrow.
        if let Some((_timer, snapshot)) = removed {
            debug!("Dismissed {}", id);
            self.publish(snapshot);
        }
    }

    fn publish(&self, snapshot: Vec<Toast>) {
        let subscriber = self.inner.borrow().subscriber.clone();
        if let Some(subscriber) = subscriber {
            subscriber.emit(snapshot);
        }
    }
}

fn expire<S: Scheduler + 'static>(inner: Weak<RefCell<Inner<S>>>, id: ToastId) {
    // A torn-down manager has nothing left to expire.
    if let Some(inner) = inner.upgrade() {
        ToastManager { inner }.remove(id);
    }
}

#[hook]
pub fn use_toast_context() -> Result<ToastManager, ToastError> {
    ToastManager::from_context(use_context::<ToastManager>())
}

/// Panics outside a `ToastProvider`.
#[hook]
pub fn use_toast() -> ToastManager {
    match use_toast_context() {
        Ok(manager) => manager,
        Err(e) => panic!("{}: wrap the view tree in <ToastProvider>", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let manager = use_state(|| ToastManager::new(BrowserScheduler));
    let toasts = use_state(Vec::<Toast>::new);

    {
        let manager = (*manager).clone();
        let toasts = toasts.clone();
        use_effect_with_deps(
            move |_| {
                // Children may have raised toasts before this effect ran.
                toasts.set(manager.toasts());
                manager.subscribe(Callback::from(move |snapshot| toasts.set(snapshot)));
                move || manager.unsubscribe()
            },
            (),
        );
    }

    let on_close = {
        let manager = (*manager).clone();
        Callback::from(move |id: ToastId| manager.remove(id))
    };

    html! {
        <ContextProvider<ToastManager> context={(*manager).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                { for toasts.iter().map(|toast| html! {
                    <ToastView key={toast.id.0} toast={toast.clone()} on_close={on_close.clone()} />
                }) }
            </div>
        </ContextProvider<ToastManager>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_close: Callback<ToastId>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let toast = &props.toast;
    let close = {
        let on_close = props.on_close.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class={classes!("toast", toast.kind.class())} role="status">
            <span class="toast__icon">{ toast.kind.icon() }</span>
            <div class="toast__body">
                if let Some(title) = &toast.title {
                    <h4 class="toast__title">{ title.clone() }</h4>
                }
                <p class="toast__message">{ toast.message.clone() }</p>
            </div>
            <button class="toast__close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use std::cell::Cell;

    fn manager() -> (ToastManager<ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (ToastManager::new(scheduler.clone()), scheduler)
    }

    fn messages(manager: &ToastManager<ManualScheduler>) -> Vec<String> {
        manager.toasts().into_iter().map(|t| t.message).collect()
    }

    #[test]
    fn keeps_insertion_order_regardless_of_duration() {
        let (toasts, _clock) = manager();
        toasts.add(ToastKind::Error, "first", None, Some(9_000)).unwrap();
        toasts.add(ToastKind::Success, "second", None, Some(10)).unwrap();
        toasts.add(ToastKind::Info, "third", None, Some(0)).unwrap();

        assert_eq!(messages(&toasts), vec!["first", "second", "third"]);
    }

    #[test]
    fn expires_after_its_duration() {
        let (toasts, clock) = manager();
        toasts.add(ToastKind::Info, "short", None, Some(1_000)).unwrap();

        clock.advance(999);
        assert_eq!(messages(&toasts), vec!["short"]);
        clock.advance(2);
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn default_duration_applies_when_omitted() {
        let (toasts, clock) = manager();
        let id = toasts.add(ToastKind::Success, "saved", None, None).unwrap();
        assert_eq!(toasts.toasts()[0].duration_ms, config::DEFAULT_TOAST_DURATION_MS);

        clock.advance(u64::from(config::DEFAULT_TOAST_DURATION_MS) + 1);
        assert!(toasts.toasts().iter().all(|t| t.id != id));
    }

    #[test]
    fn later_short_toast_expires_before_earlier_long_one() {
        let (toasts, clock) = manager();
        toasts.add(ToastKind::Error, "long", None, Some(8_000)).unwrap();
        toasts.add(ToastKind::Success, "short", None, Some(2_000)).unwrap();

        clock.advance(2_001);
        assert_eq!(messages(&toasts), vec!["long"]);
        clock.advance(6_000);
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn zero_duration_persists_until_dismissed() {
        let (toasts, clock) = manager();
        let id = toasts.add(ToastKind::Info, "sticky", None, Some(0)).unwrap();
        assert_eq!(clock.pending(), 0);

        clock.advance(60_000);
        assert_eq!(messages(&toasts), vec!["sticky"]);
        toasts.remove(id);
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn remove_is_idempotent_and_isolated() {
        let (toasts, _clock) = manager();
        let a = toasts.add(ToastKind::Info, "a", None, None).unwrap();
        toasts.add(ToastKind::Info, "b", None, None).unwrap();

        toasts.remove(a);
        toasts.remove(a);
        toasts.remove(ToastId(4_242));
        assert_eq!(messages(&toasts), vec!["b"]);
    }

    #[test]
    fn manual_dismissal_cancels_the_timer() {
        let (toasts, clock) = manager();
        let id = toasts.add(ToastKind::Success, "bye", None, Some(500)).unwrap();
        assert_eq!(clock.pending(), 1);

        toasts.remove(id);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn ids_are_never_reused() {
        let (toasts, _clock) = manager();
        let first = toasts.add(ToastKind::Info, "one", None, Some(0)).unwrap();
        toasts.remove(first);
        let second = toasts.add(ToastKind::Info, "two", None, Some(0)).unwrap();

        assert_ne!(first, second);
        assert!(toasts.toasts().iter().all(|t| t.id != first));
    }

    #[test]
    fn empty_message_is_rejected() {
        let (toasts, clock) = manager();
        assert_eq!(
            toasts.add(ToastKind::Error, "   ", None, None),
            Err(ToastError::EmptyMessage)
        );
        assert!(toasts.toasts().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_the_manager_cancels_pending_timers() {
        let (toasts, clock) = manager();
        toasts.add(ToastKind::Info, "a", None, Some(100)).unwrap();
        toasts.add(ToastKind::Info, "b", None, Some(200)).unwrap();
        assert_eq!(clock.pending(), 2);

        drop(toasts);
        assert_eq!(clock.pending(), 0);
        clock.advance(1_000);
    }

    #[test]
    fn subscriber_sees_every_change() {
        let (toasts, clock) = manager();
        let seen = Rc::new(Cell::new(0usize));
        let last_len = Rc::new(Cell::new(usize::MAX));
        {
            let seen = seen.clone();
            let last_len = last_len.clone();
            toasts.subscribe(Callback::from(move |snapshot: Vec<Toast>| {
                seen.set(seen.get() + 1);
                last_len.set(snapshot.len());
            }));
        }

        toasts.add(ToastKind::Info, "x", None, Some(10)).unwrap();
        assert_eq!((seen.get(), last_len.get()), (1, 1));
        clock.advance(11);
        assert_eq!((seen.get(), last_len.get()), (2, 0));

        toasts.unsubscribe();
        toasts.add(ToastKind::Info, "y", None, Some(0)).unwrap();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn clones_share_one_queue() {
        let (toasts, _clock) = manager();
        let other = toasts.clone();
        other.add(ToastKind::Success, "done", Some("Saved".into()), None).unwrap();

        assert_eq!(toasts.toasts().len(), 1);
        assert!(toasts == other);
        assert!(toasts != manager().0);
    }

    #[test]
    fn missing_provider_is_reported() {
        assert_eq!(
            ToastManager::<ManualScheduler>::from_context(None).err(),
            Some(ToastError::NoProvider)
        );
        let (toasts, _clock) = manager();
        let found = ToastManager::from_context(Some(toasts.clone())).unwrap();
        assert!(found == toasts);
    }
}
