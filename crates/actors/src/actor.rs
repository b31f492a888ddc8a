use std::{any::Any, error, fmt};

use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisionStrategy {
    Restart,
    Resume,
    Stop,
}

pub trait Actor: Send + 'static {
    /// Called when a handler on the actor panics. The return value represents the
    /// supervision strategy used to handle the panic.
    /// NOTE: If this method panics, the actor can not recover from the panic.
    #[allow(unused_variables)]
    fn on_fail(&mut self, error: Box<dyn Any + Send>) -> SupervisionStrategy {
        SupervisionStrategy::Restart
    }
}

#[derive(Debug)]
pub enum ActorError {
    /// The actor stopped and its mailbox was dropped.
    MailboxClosed,
    /// Only returned by non-waiting sends.
    MailboxFull,
    /// The handler did not produce an answer, usually because it panicked.
    NoAnswer(oneshot::error::RecvError),
}

impl error::Error for ActorError {}

impl fmt::Display for ActorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MailboxClosed => write!(f, "actor mailbox is closed"),
            Self::MailboxFull => write!(f, "actor mailbox is full"),
            Self::NoAnswer(why) => write!(f, "actor did not answer: {}", why),
        }
    }
}

impl From<oneshot::error::RecvError> for ActorError {
    fn from(why: oneshot::error::RecvError) -> Self {
        Self::NoAnswer(why)
    }
}
