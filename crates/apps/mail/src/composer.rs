//! Mail composer state machine.
//!
//! Sending is simulated: nothing leaves the browser. The view drives the transitions with timers
//! (`begin_send`, then `complete_send` after [`SEND_DELAY`], then `acknowledge` after
//! [`SENT_BANNER_DELAY`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated network latency between submit and success.
pub const SEND_DELAY: Duration = Duration::from_millis(1_500);
/// How long the "sent" confirmation stays up before the composer returns to idle.
pub const SENT_BANNER_DELAY: Duration = Duration::from_millis(3_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "reason", rename_all = "kebab-case")]
/// Composer send status.
pub enum MailStatus {
    /// Ready for input.
    #[default]
    Idle,
    /// A send is in flight; the trigger is disabled.
    Sending,
    /// The last send succeeded; fields were cleared.
    Sent,
    /// The last send failed with a reason.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Draft fields plus send status.
pub struct MailComposer {
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    status: MailStatus,
}

impl MailComposer {
    /// Current send status.
    pub fn status(&self) -> &MailStatus {
        &self.status
    }

    /// Whether the send trigger is enabled.
    pub fn can_send(&self) -> bool {
        !self.subject.is_empty()
            && !self.body.is_empty()
            && matches!(self.status, MailStatus::Idle | MailStatus::Failed(_))
    }

    /// Starts a send. Returns `false` and changes nothing when sending is not allowed.
    pub fn begin_send(&mut self) -> bool {
        if !self.can_send() {
            return false;
        }
        self.status = MailStatus::Sending;
        true
    }

    /// Finishes an in-flight send successfully and clears the draft.
    pub fn complete_send(&mut self) {
        if self.status != MailStatus::Sending {
            return;
        }
        self.subject.clear();
        self.body.clear();
        self.status = MailStatus::Sent;
    }

    /// Finishes an in-flight send with a failure, keeping the draft for a retry.
    pub fn fail_send(&mut self, reason: impl Into<String>) {
        if self.status != MailStatus::Sending {
            return;
        }
        self.status = MailStatus::Failed(reason.into());
    }

    /// Dismisses the success confirmation.
    pub fn acknowledge(&mut self) {
        if self.status == MailStatus::Sent {
            self.status = MailStatus::Idle;
        }
    }
}
