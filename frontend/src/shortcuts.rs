use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+K: focus the search box and select its text.
    FocusSearch,
    /// Escape inside the search box: clear it and drop focus.
    ClearSearch,
}

pub fn shortcut_for(key: &str, ctrl: bool, meta: bool, search_focused: bool) -> Option<Shortcut> {
    match key {
        "k" if ctrl || meta => Some(Shortcut::FocusSearch),
        "Escape" if search_focused => Some(Shortcut::ClearSearch),
        _ => None,
    }
}

// The callback is cloned out before emitting so a re-render triggered by it
// can store the next one.
fn emit_latest(slot: &RefCell<Callback<()>>) {
    let callback = slot.borrow().clone();
    callback.emit(());
}

/// Installs the page-wide keyboard shortcuts for the search input.
///
/// The document listener is added once on mount; `on_clear` may change on
/// every render and the listener always calls the most recent one.
#[hook]
pub fn use_search_shortcuts(input_ref: NodeRef, on_clear: Callback<()>) {
    let latest: Rc<RefCell<Callback<()>>> = use_mut_ref(|| on_clear.clone());
    *latest.borrow_mut() = on_clear;

    use_effect_with((), move |_| {
        let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
            EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                    return;
                };
                let focused = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.active_element())
                    .is_some_and(|active| active == **input);

                match shortcut_for(&event.key(), event.ctrl_key(), event.meta_key(), focused) {
                    Some(Shortcut::FocusSearch) => {
                        event.prevent_default();
                        let _ = input.focus();
                        input.select();
                    }
                    Some(Shortcut::ClearSearch) => {
                        input.set_value("");
                        let _ = input.blur();
                        emit_latest(&latest);
                    }
                    None => {}
                }
            })
        });
        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_cmd_k_focuses_search() {
        assert_eq!(shortcut_for("k", true, false, false), Some(Shortcut::FocusSearch));
        assert_eq!(shortcut_for("k", false, true, true), Some(Shortcut::FocusSearch));
        assert_eq!(shortcut_for("k", false, false, false), None);
    }

    #[test]
    fn escape_only_clears_when_search_is_focused() {
        assert_eq!(shortcut_for("Escape", false, false, true), Some(Shortcut::ClearSearch));
        assert_eq!(shortcut_for("Escape", false, false, false), None);
    }

    #[test]
    fn clear_reaches_the_most_recent_handler() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let handler = |name: &'static str| {
            let hits = Rc::clone(&hits);
            Callback::from(move |_: ()| hits.borrow_mut().push(name))
        };

        let slot = RefCell::new(handler("first"));
        *slot.borrow_mut() = handler("second");
        emit_latest(&slot);

        assert_eq!(*hits.borrow(), vec!["second"]);
    }

    #[test]
    fn handler_may_replace_itself_while_running() {
        let slot = Rc::new(RefCell::new(Callback::from(|_: ()| {})));
        let replaced = {
            let slot = Rc::clone(&slot);
            Callback::from(move |_: ()| *slot.borrow_mut() = Callback::from(|_: ()| {}))
        };
        *slot.borrow_mut() = replaced.clone();

        emit_latest(&slot);
        assert!(*slot.borrow() != replaced);
    }
}
