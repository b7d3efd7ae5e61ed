//! Leptos DragDrop Utilities
//!
//! Column/index drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position inside a droppable column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropSlot<K> {
    pub column: K,
    pub index: usize,
}

impl<K> DropSlot<K> {
    pub fn new(column: K, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a finished drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd<K> {
    pub item_id: u32,
    pub source: DropSlot<K>,
    /// None when released outside every column
    pub destination: Option<DropSlot<K>>,
}

impl<K: PartialEq> DragEnd<K> {
    /// True when dropping changes nothing: no destination, or the exact slot it came from.
    pub fn is_noop(&self) -> bool {
        match &self.destination {
            None => true,
            Some(dest) => *dest == self.source,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_slot_read: ReadSignal<Option<DropSlot<K>>>,
    pub drop_slot_write: WriteSignal<Option<DropSlot<K>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging) and the slot it was picked from
    pub pending_read: ReadSignal<Option<(u32, DropSlot<K>)>>,
    pub pending_write: WriteSignal<Option<(u32, DropSlot<K>)>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_slot_read, drop_slot_write) = signal(None::<DropSlot<K>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<(u32, DropSlot<K>)>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_write.set(None);
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

/// Create mousedown handler for a draggable card sitting at `source`
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, item_id: u32, source: DropSlot<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some((item_id, source)));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if let Some((item_id, _)) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
                if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                    dnd.dragging_id_write.set(Some(item_id));
                }
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

/// Create mouseenter handler for a slot inside a column
pub fn make_on_slot_mouseenter<K>(dnd: DndSignals<K>, slot: DropSlot<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler; `on_drag_end` fires for every real drag,
/// including ones released outside any column.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drag_end: F)
where
    K: Copy + Send + Sync + 'static,
    F: Fn(DragEnd<K>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let pending = dnd.pending_read.get_untracked();
        let destination = dnd.drop_slot_read.get_untracked();

        end_drag(&dnd);

        // A press without movement is a click, not a drag
        if let (Some(dragged), Some((pending_id, source))) = (dragging_id, pending) {
            if dragged == pending_id {
                on_drag_end(DragEnd { item_id: dragged, source, destination });
            }
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
