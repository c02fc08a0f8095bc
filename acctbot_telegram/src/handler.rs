use crate::{Command, Result, TelegramBot, render};
use teloxide::{prelude::*, types::ParseMode};
use tracing::{debug, info, warn};

async fn reply_html(bot: &TelegramBot, msg: &Message, text: String) -> Result<()> {
    bot.bot
        .send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle bot commands and menu buttons
pub async fn handle_command(bot: TelegramBot, msg: Message, cmd: Command) -> Result<()> {
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    match cmd {
        Command::Start => {
            info!("[@{username}] Command: /start");
            bot.bot
                .send_message(msg.chat.id, Command::welcome_text())
                .reply_markup(Command::menu())
                .await?;
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.bot
                .send_message(msg.chat.id, Command::help_text())
                .reply_markup(Command::menu())
                .await?;
        }
        Command::Create => {
            info!("[@{username}] Command: create");
            bot.bot
                .send_message(msg.chat.id, Command::create_prompt_text())
                .await?;
        }
        Command::List => {
            info!("[@{username}] Command: list");
            let reply = match bot.service.recent(bot.recent_limit()).await {
                Ok(recent) => render::recent_message(&recent),
                Err(e) => {
                    warn!("[@{username}] Listing failed: {e}");
                    render::error_message(&e)
                }
            };
            reply_html(&bot, &msg, reply).await?;
        }
    }

    Ok(())
}

/// Handle any message (commands, menu buttons or account input)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let Some(text) = msg.text() else {
        debug!("Ignoring non-text message in chat {chat_id}");
        return Ok(());
    };
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    if let Err(e) = bot.ensure_allowed(chat_id) {
        warn!("[@{username}] {e}");
        bot.bot
            .send_message(msg.chat.id, "⛔ Bạn không có quyền sử dụng bot này.")
            .await?;
        return Ok(());
    }

    // Check if this is a command or a menu button
    if let Some(cmd) = Command::parse_from_text(text) {
        return handle_command(bot, msg, cmd).await;
    }

    if text.starts_with('/') {
        info!("[@{username}] Unknown command: {text}");
        bot.bot
            .send_message(msg.chat.id, Command::unknown_text())
            .await?;
        return Ok(());
    }

    info!("[@{username}] Message: {text}");

    let reply = match bot.service.create_from_text(text).await {
        Ok(record) => {
            info!("[@{username}] Created: {}", record.pipe_line());
            render::created_message(&record)
        }
        Err(e) if e.is_input_error() => {
            info!("[@{username}] Rejected input: {e}");
            render::error_message(&e)
        }
        Err(e) => {
            warn!("[@{username}] Processing failed: {e}");
            render::error_message(&e)
        }
    };

    reply_html(&bot, &msg, reply).await
}
