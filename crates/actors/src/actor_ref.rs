use tokio::sync::{mpsc::error::TrySendError, oneshot};

use crate::{
    actor::{Actor, ActorError},
    handler::{ActorMessage, Handler, Message},
    mailbox::{MailboxSender, WeakMailboxSender},
};

/// Handle used to post messages into an actor's mailbox. Messages are
/// handled one after another on the actor's own task, so this is also the
/// way to hand results of background work back to the actor.
pub struct ActorRef<A: Actor> {
    sender: MailboxSender<A>,
}

impl<A: Actor> Clone for ActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A: Actor> ActorRef<A> {
    pub(crate) fn new(sender: MailboxSender<A>) -> Self {
        Self { sender }
    }

    pub async fn tell<M>(&self, msg: M) -> Result<(), ActorError>
    where
        M: Message,
        A: Handler<M>,
    {
        self.sender
            .send(Box::new(ActorMessage::new(msg, None)))
            .await
            .map_err(|_| ActorError::MailboxClosed)
    }

    /// Like `tell`, but fails instead of waiting when the mailbox is full.
    /// Usable from synchronous code.
    pub fn try_tell<M>(&self, msg: M) -> Result<(), ActorError>
    where
        M: Message,
        A: Handler<M>,
    {
        self.sender
            .try_send(Box::new(ActorMessage::new(msg, None)))
            .map_err(|why| match why {
                TrySendError::Full(_) => ActorError::MailboxFull,
                TrySendError::Closed(_) => ActorError::MailboxClosed,
            })
    }

    pub async fn ask<M>(&self, msg: M) -> Result<M::Response, ActorError>
    where
        M: Message,
        A: Handler<M>,
    {
        let (response_tx, response_rx) = oneshot::channel();
        self.sender
            .send(Box::new(ActorMessage::new(msg, Some(response_tx))))
            .await
            .map_err(|_| ActorError::MailboxClosed)?;
        Ok(response_rx.await?)
    }

    pub fn downgrade(&self) -> WeakActorRef<A> {
        WeakActorRef {
            sender: self.sender.downgrade(),
        }
    }
}

/// Does not keep the actor alive. An actor holding one of these to itself
/// still stops once every `ActorRef` is gone.
pub struct WeakActorRef<A: Actor> {
    sender: WeakMailboxSender<A>,
}

impl<A: Actor> Clone for WeakActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A: Actor> WeakActorRef<A> {
    pub fn upgrade(&self) -> Option<ActorRef<A>> {
        self.sender.upgrade().map(ActorRef::new)
    }
}
