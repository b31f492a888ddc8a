use tokio::sync::mpsc;

use crate::{handler::Envelope, Actor};

pub(crate) const MAILBOX_CAPACITY: usize = 32;

pub(crate) type Letter<A> = Box<dyn Envelope<A>>;
pub(crate) type MailboxSender<A> = mpsc::Sender<Letter<A>>;
pub(crate) type WeakMailboxSender<A> = mpsc::WeakSender<Letter<A>>;
pub(crate) type MailboxReceiver<A> = mpsc::Receiver<Letter<A>>;

pub(crate) fn bounded_mailbox<A>() -> (MailboxSender<A>, MailboxReceiver<A>)
where
    A: Actor,
{
    mpsc::channel(MAILBOX_CAPACITY)
}
