//! Building blocks shared by the pages: form controls and toasts.

mod button;
mod input;
mod label;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
