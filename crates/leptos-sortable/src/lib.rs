//! Leptos Sortable List Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses a movement threshold to distinguish click from drag; the actual
//! reorder math lives in [`reorder`] and is UI-free.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub mod reorder;

pub use reorder::{move_to, SortSession};

/// DnD state signals for one sortable list
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Reactive slot holding the in-flight [`SortSession`] for one list.
///
/// `track` begins a session when a drag starts on one of the list's ids
/// and splices the candidate order on every hover change, so the list
/// can render the preview order live. The drop handler calls `finish`
/// to take the final order (None when nothing moved) or `clear` to fall
/// back to the committed order.
#[derive(Clone, Copy, Default)]
pub struct SessionSignal(RwSignal<Option<SortSession>>);

impl SessionSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Drive the session from the gesture signals.
    ///
    /// `current_order` supplies the list's committed id sequence; a drag
    /// starting on an id outside it never begins a session, so one
    /// signal bundle can feed several lists.
    pub fn track<G>(self, dnd: SortSignals, current_order: G)
    where
        G: Fn() -> Vec<u32> + Send + Sync + 'static,
    {
        let slot = self.0;
        Effect::new(move |_| {
            if let Some(id) = dnd.dragging_id_read.get() {
                if slot.read_untracked().is_none() {
                    if let Some(session) = SortSession::begin(current_order(), id) {
                        slot.set(Some(session));
                    }
                }
            }
        });
        Effect::new(move |_| {
            if let Some(over) = dnd.over_id_read.get() {
                slot.update(|s| {
                    if let Some(session) = s.as_mut() {
                        session.drag_over(over);
                    }
                });
            }
        });
    }

    /// Candidate order while a drag is in flight (reactive).
    pub fn candidate(&self) -> Option<Vec<u32>> {
        self.0.get().map(|s| s.current().to_vec())
    }

    /// Take the session on drop. Some only when the order changed.
    pub fn finish(&self) -> Option<Vec<u32>> {
        self.0.write().take().and_then(SortSession::finish)
    }

    /// Discard the session without committing.
    pub fn clear(&self) {
        self.0.set(None);
    }
}

/// End drag operation
pub fn end_drag(dnd: &SortSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items (hover target during a drag)
pub fn make_on_item_mouseenter(dnd: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Hovering the dragged item itself is not a target
            if dragging != item_id {
                dnd.over_id_write.set(Some(item_id));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` receives the dragged id and the id it was last hovering over.
pub fn bind_global_mouseup<F>(dnd: SortSignals, on_drop: F)
where
    F: Fn(u32, Option<u32>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let over_id = dnd.over_id_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging_id {
            end_drag(&dnd);
            on_drop(dragged, over_id);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
