use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::Actor;

#[async_trait]
pub trait Handler<M>: Actor
where
    M: Message,
{
    async fn handle(&mut self, message: M) -> M::Response;
}

pub trait Message: Send + 'static {
    type Response: Send + 'static;
}

/// Type-erased message as it sits in a mailbox.
#[async_trait]
pub(crate) trait Envelope<A: Actor>: Send {
    async fn deliver(&mut self, actor: &mut A);
}

pub(crate) struct ActorMessage<M>
where
    M: Message,
{
    message: Option<M>,
    respond_to: Option<oneshot::Sender<M::Response>>,
}

impl<M> ActorMessage<M>
where
    M: Message,
{
    pub fn new(message: M, respond_to: Option<oneshot::Sender<M::Response>>) -> Self {
        Self {
            message: Some(message),
            respond_to,
        }
    }
}

#[async_trait]
impl<M, A> Envelope<A> for ActorMessage<M>
where
    M: Message,
    A: Handler<M>,
{
    async fn deliver(&mut self, actor: &mut A) {
        let Some(message) = self.message.take() else {
            return;
        };
        let result = actor.handle(message).await;

        if let Some(respond_to) = self.respond_to.take() {
            respond_to
                .send(result)
                .unwrap_or_else(|_| log::warn!("Asking side dropped before the answer."));
        }
    }
}
