use std::rc::Rc;

use gloo::events::EventListener;
use shared::{ModalEntry, ModalId, ModalStack, RecordKind};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Debug)]
pub enum ModalAction {
    Open(ModalEntry),
    Close(ModalEntry),
    CloseTop,
    CloseAll,
}

#[derive(Debug, Default, PartialEq)]
pub struct ModalState {
    pub stack: ModalStack,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut stack = self.stack.clone();
        match action {
            ModalAction::Open(entry) => stack.open(entry),
            ModalAction::Close(entry) => {
                stack.close(entry);
            }
            ModalAction::CloseTop => {
                if let Some(entry) = stack.close_top() {
                    log::debug!("escape closed {:?} on {}", entry.id, entry.owner.label());
                }
            }
            ModalAction::CloseAll => stack.clear(),
        }
        Rc::new(ModalState { stack })
    }
}

/// The app-wide dialog stack, handed to every page through a
/// `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    pub stack: ModalStack,
    dispatcher: UseReducerDispatcher<ModalState>,
}

impl ModalContext {
    pub fn open(&self, entry: ModalEntry) {
        self.dispatcher.dispatch(ModalAction::Open(entry));
    }

    pub fn close(&self, entry: ModalEntry) {
        self.dispatcher.dispatch(ModalAction::Close(entry));
    }

    pub fn close_all(&self) {
        self.dispatcher.dispatch(ModalAction::CloseAll);
    }
}

/// Owns the dialog stack for the whole app.
///
/// A single document `keydown` listener is attached while any dialog is
/// open; Escape closes the topmost one. The listener is dropped as soon as
/// the stack empties.
#[hook]
pub fn use_modal_provider() -> ModalContext {
    let state = use_reducer(ModalState::default);
    let has_open = !state.stack.is_empty();

    {
        let dispatcher = state.dispatcher();
        use_effect_with(has_open, move |has_open| {
            let listener = has_open.then(|| {
                let document = gloo::utils::document();
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|event| event.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        dispatcher.dispatch(ModalAction::CloseTop);
                    }
                })
            });
            move || drop(listener)
        });
    }

    ModalContext {
        stack: state.stack.clone(),
        dispatcher: state.dispatcher(),
    }
}

#[derive(Clone)]
pub struct UseModalStackResult {
    /// This page's dialogs, bottom to top
    pub dialogs: Vec<ModalId>,
    pub actions: UseModalStackActions,
}

#[derive(Clone, PartialEq)]
pub struct UseModalStackActions {
    pub open: Callback<ModalId>,
    pub close: Callback<ModalId>,
}

/// One page's view of the app-wide dialog stack.
#[hook]
pub fn use_modal_stack(owner: RecordKind) -> UseModalStackResult {
    let Some(context) = use_context::<ModalContext>() else {
        log::error!("{}: no modal context, dialogs are disabled", owner.label());
        return UseModalStackResult {
            dialogs: Vec::new(),
            actions: UseModalStackActions { open: Callback::noop(), close: Callback::noop() },
        };
    };

    let open = {
        let context = context.clone();
        Callback::from(move |id: ModalId| context.open(ModalEntry::new(owner, id)))
    };

    let close = {
        let context = context.clone();
        Callback::from(move |id: ModalId| context.close(ModalEntry::new(owner, id)))
    };

    UseModalStackResult {
        dialogs: context.stack.owned_by(owner).collect(),
        actions: UseModalStackActions { open, close },
    }
}
