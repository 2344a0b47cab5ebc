//! Frontend Models
//!
//! Page-scoped data structures.

use serde::Serialize;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Info, Severity::Success, Severity::Error, Severity::Warning];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Font Awesome glyph shown next to the message
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

pub type ToastId = u64;

/// Where a toast is in its enter/exit animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// In the tree, not yet slid in
    Entering,
    Visible,
    /// Sliding out, removed after the exit delay
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// Payload for the platform share sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRequest {
    pub title: String,
    pub url: String,
}

impl ShareRequest {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Article card data (matches the portal's published news entries)
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSummary {
    pub id: u32,
    pub titulo: String,
    pub resumo: String,
    pub url: String,
    pub imagem: Option<String>,
    pub data_publicacao: String,
}
