#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toastify-success",
            ToastKind::Error => "toastify-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Toasts currently on screen. Entries leave on dismissal or timer expiry;
/// nothing survives that.
#[derive(Clone, Debug, Default)]
pub struct ToastTray {
    next_id: u64,
    visible: Vec<(u64, Toast)>,
}

impl ToastTray {
    pub fn push(&mut self, toast: Toast) -> u64 {
        match toast.kind {
            ToastKind::Success => log::info!("toast: {}", toast.message),
            ToastKind::Error => log::warn!("toast: {}", toast.message),
        }
        self.next_id += 1;
        self.visible.push((self.next_id, toast));
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|(i, _)| *i != id);
    }

    pub fn visible(&self) -> &[(u64, Toast)] {
        &self.visible
    }
}
