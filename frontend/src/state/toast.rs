use leptos::*;
use uuid::Uuid;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient feedback messages shown in the corner of every page.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Info, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let state = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || state.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => provide_toasts(),
    }
}
