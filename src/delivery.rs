//! Message delivery behind the contact form.
//!
//! The form state machine only knows the [`MessageSender`] capability. The
//! shipped implementation delivers nothing: it logs the message and reports
//! success, which is what the "simulated submission" amounts to.

use thiserror::Error;

/// What the visitor typed, captured at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The delivery collaborator rejected or could not send the message.
    #[error("Message could not be sent: {0}")]
    SubmissionFailed(String),
}

pub trait MessageSender {
    fn send(&self, msg: &ContactMessage) -> Result<(), DeliveryError>;
}

/// Accepts every message without contacting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedSender;

impl MessageSender for SimulatedSender {
    fn send(&self, msg: &ContactMessage) -> Result<(), DeliveryError> {
        tracing::info!(
            name = %msg.name,
            email = %msg.email,
            chars = msg.message.chars().count(),
            "contact message accepted (simulated, not delivered)"
        );
        Ok(())
    }
}
