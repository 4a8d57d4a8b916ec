mod confirm_host;
mod toast_host;

pub use confirm_host::ConfirmHost;
pub use toast_host::ToastHost;
