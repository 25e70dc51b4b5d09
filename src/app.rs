//! Main message loop for the scribe.
//!
//! Pulls messages off a transport, hands each one to the dispatcher on its
//! own task and sends back any reply.

use std::collections::HashMap;
use std::sync::Arc;

use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::commands::Dispatcher;
use crate::error::Result;
use crate::transport::{ChatTransport, IncomingMessage};

/// Serves messages until the transport's stream ends.
///
/// A message the transport fails to deliver is logged and skipped; it never
/// ends the session.
///
/// Messages from different senders are handled concurrently. Messages from
/// the same sender are handled in arrival order so `-a` is always seen
/// before the `-y` that follows it.
pub async fn run(dispatcher: Arc<Dispatcher>, transport: Arc<dyn ChatTransport>) -> Result<()> {
    let mut incoming = transport.incoming()?;
    let mut last_by_sender: HashMap<String, JoinHandle<()>> = HashMap::new();
    let mut handled = 0usize;

    info!("Listening for `{}` commands", dispatcher.trigger());

    while let Some(message) = incoming.next().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping unreadable message: {}", e);
                continue;
            }
        };
        handled += 1;

        last_by_sender.retain(|_, task| !task.is_finished());
        let previous = last_by_sender.remove(&message.sender);
        let sender = message.sender.clone();
        let task = tokio::spawn(handle_message(
            Arc::clone(&dispatcher),
            Arc::clone(&transport),
            message,
            previous,
        ));
        last_by_sender.insert(sender, task);
    }

    for (sender, task) in last_by_sender {
        if let Err(e) = task.await {
            warn!("Handler for {} panicked: {}", sender, e);
        }
    }

    info!("Transport closed after {} messages", handled);
    Ok(())
}

async fn handle_message(
    dispatcher: Arc<Dispatcher>,
    transport: Arc<dyn ChatTransport>,
    message: IncomingMessage,
    previous: Option<JoinHandle<()>>,
) {
    if let Some(previous) = previous {
        if let Err(e) = previous.await {
            warn!("Earlier handler for {} panicked: {}", message.sender, e);
        }
    }

    let Some(output) = dispatcher.handle(&message.sender, &message.text).await else {
        return;
    };
    if let Err(e) = transport.send(&message.sender, output).await {
        warn!("Failed to reply to {}: {}", message.sender, e);
    }
}
