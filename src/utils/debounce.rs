use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Delays a callback until `delay_ms` have passed without another call.
///
/// Each call cancels the pending one, so only the last value within a burst
/// (keystrokes, resize events) is delivered. Dropping the debouncer cancels
/// anything still pending.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping a Timeout cancels it
        let previous = self
            .pending
            .borrow_mut()
            .replace(Timeout::new(self.delay_ms, callback));
        drop(previous);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Creates a window resize listener whose callback runs once resizing has
/// settled for `delay_ms`.
///
/// The returned `EventListener` must be kept alive for as long as the
/// callback should fire; dropping it removes the listener.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let debouncer = Debouncer::new(delay_ms);
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        debouncer.call(move || callback());
    }))
}
