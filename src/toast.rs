//! Toast Stack
//!
//! Pure bookkeeping for transient notifications. Timers live in
//! [`crate::context::Notifier`]; every transition here is a no-op when the
//! toast is already gone, so late timers and double clicks are harmless.

use crate::config::ToastConfig;
use crate::models::{Severity, Toast, ToastId, ToastPhase};

/// Offsets from `notify`, in ms, at which a toast changes phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    pub show_at: u32,
    pub exit_at: u32,
    pub remove_at: u32,
}

impl ToastSchedule {
    pub fn from_config(config: &ToastConfig) -> Self {
        let exit_at = config.duration_ms.max(config.show_delay_ms);
        Self {
            show_at: config.show_delay_ms,
            exit_at,
            remove_at: exit_at.saturating_add(config.exit_ms),
        }
    }

    /// Delay between starting the exit animation and removal
    pub fn exit_ms(&self) -> u32 {
        self.remove_at.saturating_sub(self.exit_at)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: ToastId,
    max_visible: usize,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ToastStack {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
        }
    }

    /// Add a toast, dropping the oldest ones beyond `max_visible`
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Entering,
        });
        let overflow = self.toasts.len().saturating_sub(self.max_visible);
        self.toasts.drain(..overflow);
        id
    }

    /// Entering -> Visible
    pub fn show(&mut self, id: ToastId) -> bool {
        match self.find_mut(id) {
            Some(toast) if toast.phase == ToastPhase::Entering => {
                toast.phase = ToastPhase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.find_mut(id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove from the stack; `false` when it was already removed
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.toasts.iter().find(|t| t.id == id).map(|t| t.phase)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn find_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}

/// CSS classes for a toast element
pub fn toast_class(severity: Severity, phase: ToastPhase) -> String {
    let mut class = format!("custom-toast toast-{}", severity.as_str());
    if phase == ToastPhase::Visible {
        class.push_str(" show");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_renders_one_toast_per_severity() {
        for severity in Severity::ALL {
            let mut stack = ToastStack::default();
            let id = stack.push("Link copiado", severity);

            assert_eq!(stack.toasts().len(), 1);
            let toast = &stack.toasts()[0];
            assert_eq!(toast.id, id);
            assert_eq!(toast.message, "Link copiado");
            assert_eq!(toast.severity, severity);
            assert_eq!(toast.phase, ToastPhase::Entering);
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut stack = ToastStack::default();
        let id = stack.push("Link copiado", Severity::Success);

        assert!(stack.show(id));
        assert_eq!(stack.phase(id), Some(ToastPhase::Visible));
        assert!(stack.begin_exit(id));
        assert_eq!(stack.phase(id), Some(ToastPhase::Leaving));
        assert!(stack.remove(id));
        assert!(stack.toasts().is_empty());
    }

    #[test]
    fn test_close_then_timer_is_harmless() {
        let mut stack = ToastStack::default();
        let id = stack.push("Bye", Severity::Info);

        // Close button first, then the auto-dismiss timers fire
        assert!(stack.remove(id));
        assert!(!stack.show(id));
        assert!(!stack.begin_exit(id));
        assert!(!stack.remove(id));
        assert!(stack.toasts().is_empty());
    }

    #[test]
    fn test_show_after_exit_does_not_revive() {
        let mut stack = ToastStack::default();
        let id = stack.push("Late", Severity::Info);
        stack.begin_exit(id);
        assert!(!stack.show(id));
        assert_eq!(stack.phase(id), Some(ToastPhase::Leaving));
    }

    #[test]
    fn test_ids_are_unique_and_toasts_stack() {
        let mut stack = ToastStack::default();
        let a = stack.push("a", Severity::Info);
        let b = stack.push("b", Severity::Error);
        assert_ne!(a, b);
        assert_eq!(stack.toasts().len(), 2);

        stack.remove(a);
        let c = stack.push("c", Severity::Warning);
        assert!(c > b);
    }

    #[test]
    fn test_oldest_dropped_beyond_max_visible() {
        let mut stack = ToastStack::new(2);
        let a = stack.push("a", Severity::Info);
        stack.push("b", Severity::Info);
        stack.push("c", Severity::Info);

        assert_eq!(stack.toasts().len(), 2);
        assert_eq!(stack.phase(a), None);
        let messages: Vec<_> = stack.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_default_schedule_removes_within_window() {
        let schedule = ToastSchedule::from_config(&ToastConfig::default());
        assert_eq!(schedule.show_at, 100);
        assert!(schedule.show_at < schedule.exit_at);
        assert!((3000..=4000).contains(&schedule.remove_at));
        assert_eq!(schedule.exit_ms(), 300);
    }

    #[test]
    fn test_schedule_never_exits_before_show() {
        let config = ToastConfig {
            duration_ms: 50,
            show_delay_ms: 200,
            exit_ms: 0,
            max_visible: 1,
        };
        let schedule = ToastSchedule::from_config(&config);
        assert_eq!(schedule.exit_at, 200);
        assert_eq!(schedule.remove_at, 200);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let config = ToastConfig {
            duration_ms: u32::MAX,
            show_delay_ms: 100,
            exit_ms: 300,
            max_visible: 5,
        };
        let schedule = ToastSchedule::from_config(&config);
        assert_eq!(schedule.exit_at, u32::MAX);
        assert_eq!(schedule.remove_at, u32::MAX);
        assert_eq!(schedule.exit_ms(), 0);
    }

    #[test]
    fn test_toast_class() {
        assert_eq!(toast_class(Severity::Success, ToastPhase::Entering), "custom-toast toast-success");
        assert_eq!(toast_class(Severity::Success, ToastPhase::Visible), "custom-toast toast-success show");
        assert_eq!(toast_class(Severity::Error, ToastPhase::Leaving), "custom-toast toast-error");
    }
}
