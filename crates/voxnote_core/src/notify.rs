//! Host notification seam.
//!
//! Toast and alert rendering belongs to the host UI; the core only decides
//! when a message is due and what it says.

/// Outbound user-visible notifications.
pub trait Notifier {
    /// Transient confirmation toast.
    fn toast_success(&mut self, message: &str);

    /// Transient warning toast for recoverable mistakes.
    fn toast_warning(&mut self, message: &str);

    /// Blocking, modal-style alert for hard capability failures.
    fn blocking_alert(&mut self, message: &str);
}

/// Fallback notifier that routes messages through the log facade.
///
/// Useful for headless hosts and smoke probes where no UI exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn toast_success(&mut self, message: &str) {
        log::info!("event=toast module=notify status=ok message={message}");
    }

    fn toast_warning(&mut self, message: &str) {
        log::warn!("event=toast module=notify status=warn message={message}");
    }

    fn blocking_alert(&mut self, message: &str) {
        log::error!("event=alert module=notify status=error message={message}");
    }
}
