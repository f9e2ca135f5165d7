//! Telegram wiring: routes commands to [`handlers::handle`] and delivers
//! the replies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use frameflicker_metadata::MetadataProvider;
use teloxide::payloads::{SendDocumentSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use tracing::{debug, info, warn};

use crate::commands::Command;
use crate::handlers::{self, Reply};

/// Dependencies shared by every command invocation.
#[derive(Clone)]
pub struct BotState {
    pub provider: Arc<dyn MetadataProvider>,
    pub artifact_dir: Option<PathBuf>,
}

/// Poll for updates until the process is interrupted.
pub async fn run(bot: Bot, state: BotState) {
    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|_| async {
            debug!("ignoring non-command update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn answer(bot: Bot, msg: Message, command: Command, state: BotState) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    info!(chat_id = chat_id.0, command = command.name(), "command received");

    let reply = handlers::handle(command, state.provider.as_ref()).await;
    send_reply(&bot, chat_id, reply, state.artifact_dir.as_deref()).await;
    Ok(())
}

/// Deliver a reply. Send failures are logged, never propagated, so one
/// broken chat cannot stall the dispatcher.
async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply, artifact_dir: Option<&Path>) {
    match reply {
        Reply::Plain(text) => {
            if let Err(e) = bot.send_message(chat_id, text).await {
                warn!(chat_id = chat_id.0, error = %e, "failed to send reply");
            }
        }
        Reply::Html(text) => {
            if let Err(e) = bot
                .send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .await
            {
                warn!(chat_id = chat_id.0, error = %e, "failed to send reply");
            }
        }
        Reply::HtmlWithDocument {
            text,
            document,
            caption,
        } => {
            if let Err(e) = bot
                .send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .await
            {
                warn!(chat_id = chat_id.0, error = %e, "failed to send reply");
                return;
            }

            if let Some(dir) = artifact_dir {
                if let Err(e) = document.persist(dir).await {
                    warn!(dir = %dir.display(), error = %e, "failed to persist artifact");
                }
            }

            let file_name = document.file_name().to_string();
            let file = InputFile::memory(document.into_bytes()).file_name(file_name);
            if let Err(e) = bot.send_document(chat_id, file).caption(caption).await {
                warn!(chat_id = chat_id.0, error = %e, "failed to send document");
            }
        }
    }
}
