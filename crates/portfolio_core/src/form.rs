//! Contact form: local validation, simulated submission and the timed
//! success window. Nothing here touches the network.

use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::store::StoreUpdate;

/// How long the success banner stays up after a submission.
pub const FORM_SUCCESS_WINDOW: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nombre",
            FormField::Email => "Email",
            FormField::Subject => "Asunto",
            FormField::Message => "Mensaje",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("the contact form is no longer mounted")]
    Closed,
}

impl FormError {
    /// Input the error points at; `None` when no single field is at fault.
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::MissingField(field) => Some(*field),
            FormError::InvalidEmail(_) => Some(FormField::Email),
            FormError::Closed => None,
        }
    }
}

/// Input bound to the contact form widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Every field is required; the email must look like `local@domain`.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Subject, &self.subject),
            (FormField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| {
            !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
        })
}

struct PendingReset {
    ticket: u64,
    cancel: CancellationToken,
}

/// Accepts submissions and owns the timer that closes the success window.
/// A newer submission replaces (and cancels) the pending reset.
pub struct FormHandler {
    updates: Sender<StoreUpdate>,
    window: Duration,
    next_ticket: u64,
    pending: Option<PendingReset>,
}

impl FormHandler {
    pub fn new(updates: Sender<StoreUpdate>, window: Duration) -> Self {
        Self {
            updates,
            window,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Validates and clears `form`, then schedules the reset under a child of
    /// `lifetime`. Returns the ticket the eventual expiry will carry.
    pub fn submit(
        &mut self,
        form: &mut ContactForm,
        runtime: &Handle,
        lifetime: &CancellationToken,
    ) -> Result<u64, FormError> {
        form.validate()?;
        form.clear();

        self.cancel_pending();
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let cancel = lifetime.child_token();

        let task_cancel = cancel.clone();
        let updates = self.updates.clone();
        let window = self.window;
        runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => debug!(ticket, "form success reset cancelled"),
                _ = tokio::time::sleep(window) => {
                    match updates.try_send(StoreUpdate::FormSuccessExpired { ticket }) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => warn!(ticket, "store update queue full; success banner reset dropped"),
                        Err(TrySendError::Disconnected(_)) => debug!(ticket, "store update queue closed before reset"),
                    }
                }
            }
        });

        info!(ticket, "contact form accepted locally");
        self.pending = Some(PendingReset { ticket, cancel });
        Ok(ticket)
    }

    /// Consumes an expiry; true when it closes the current window.
    pub fn expire(&mut self, ticket: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending.is_some()
    }
}
