use std::panic::AssertUnwindSafe;

use actor::{Actor, SupervisionStrategy};
use actor_ref::{ActorRef, WeakActorRef};
use futures::FutureExt;
use mailbox::bounded_mailbox;

pub mod actor;
pub mod actor_ref;
pub mod handler;
mod mailbox;

/// Creates and runs an actor. If the actor panics, it is either restared, resumed
/// or stoped acording to the behavior specified by `Actor::on_fail()`.
///
/// The factory receives a weak reference to the actor itself, so the actor can
/// spawn background work that reports back through its own mailbox.
pub fn run<A, F>(actor_factory: F) -> ActorRef<A>
where
    A: Actor,
    F: 'static + Send + Fn(WeakActorRef<A>) -> A,
{
    let (tx, mut rx) = bounded_mailbox::<A>();
    let actor_ref = ActorRef::new(tx);
    let myself = actor_ref.downgrade();
    let mut actor = actor_factory(myself.clone());

    tokio::spawn(async move {
        while let Some(mut message) = rx.recv().await {
            let result = AssertUnwindSafe(message.deliver(&mut actor))
                .catch_unwind()
                .await;
            // handler paniced?
            if let Err(why) = result {
                log::error!("actor paniced: {:?}", why);
                match actor.on_fail(why) {
                    SupervisionStrategy::Restart => {
                        actor = actor_factory(myself.clone());
                    }
                    SupervisionStrategy::Resume => {}
                    SupervisionStrategy::Stop => {
                        break;
                    }
                };
            }
        }
        log::debug!("actor stopped");
    });

    actor_ref
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        actor::ActorError,
        handler::{Handler, Message},
    };

    struct Increment(i64);

    impl Message for Increment {
        type Response = ();
    }

    struct GetValue;

    impl Message for GetValue {
        type Response = i64;
    }

    struct Explode;

    impl Message for Explode {
        type Response = ();
    }

    struct Counter {
        count: i64,
        strategy: SupervisionStrategy,
    }

    impl Actor for Counter {
        fn on_fail(&mut self, _: Box<dyn Any + Send>) -> SupervisionStrategy {
            self.strategy
        }
    }

    #[async_trait]
    impl Handler<Increment> for Counter {
        async fn handle(&mut self, message: Increment) {
            self.count += message.0;
        }
    }

    #[async_trait]
    impl Handler<GetValue> for Counter {
        async fn handle(&mut self, _: GetValue) -> i64 {
            self.count
        }
    }

    #[async_trait]
    impl Handler<Explode> for Counter {
        async fn handle(&mut self, _: Explode) {
            panic!("boom");
        }
    }

    fn counter(strategy: SupervisionStrategy) -> ActorRef<Counter> {
        run(move |_| Counter { count: 0, strategy })
    }

    #[tokio::test]
    async fn messages_are_handled_in_order() {
        let actor_ref = counter(SupervisionStrategy::Restart);
        actor_ref.tell(Increment(1)).await.unwrap();
        actor_ref.tell(Increment(5)).await.unwrap();
        actor_ref.try_tell(Increment(-2)).unwrap();
        assert_eq!(actor_ref.ask(GetValue).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn restart_resets_state() {
        let actor_ref = counter(SupervisionStrategy::Restart);
        actor_ref.tell(Increment(3)).await.unwrap();
        assert!(matches!(
            actor_ref.ask(Explode).await,
            Err(ActorError::NoAnswer(_))
        ));
        assert_eq!(actor_ref.ask(GetValue).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn resume_keeps_state() {
        let actor_ref = counter(SupervisionStrategy::Resume);
        actor_ref.tell(Increment(3)).await.unwrap();
        actor_ref.tell(Explode).await.unwrap();
        assert_eq!(actor_ref.ask(GetValue).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn stop_closes_the_mailbox() {
        let actor_ref = counter(SupervisionStrategy::Stop);
        let _ = actor_ref.ask(Explode).await;
        assert!(actor_ref.ask(GetValue).await.is_err());
    }

    #[tokio::test]
    async fn weak_reference_does_not_keep_actor_alive() {
        let actor_ref = counter(SupervisionStrategy::Restart);
        let weak = actor_ref.downgrade();
        assert!(weak.upgrade().is_some());
        drop(actor_ref);
        assert!(weak.upgrade().is_none());
    }
}
