//! Discord event handler for the `char` command.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serenity::async_trait;
use serenity::builder::EditMessage;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};

use crate::application::services::LookupService;
use crate::bot::command::{Command, parse_command};
use crate::bot::reply;
use crate::domain::entities::CharacterQuery;
use crate::domain::sources::StatsSource;

/// Runs a lookup for a validated query and returns the final reply text.
///
/// This is everything the `char` command does between the acknowledgment
/// and the edit, without any Discord I/O.
pub async fn char_reply<S: StatsSource>(
    service: &LookupService<S>,
    query: &CharacterQuery,
    today: NaiveDate,
) -> String {
    let result = service.lookup_at(query, today).await;

    match &result {
        Ok(stats) => tracing::info!(
            character = query.name(),
            monthly_total = ?stats.monthly_total,
            latest = ?stats.latest().map(|e| e.date),
            "Lookup succeeded"
        ),
        Err(err) => tracing::warn!(
            character = query.name(),
            kind = err.kind(),
            error = %err,
            "Lookup failed"
        ),
    }

    reply::render(query.name(), &result)
}

/// Serenity event handler dispatching prefix commands.
pub struct Handler<S: StatsSource> {
    service: Arc<LookupService<S>>,
    prefix: String,
}

impl<S: StatsSource> Handler<S> {
    pub fn new(service: Arc<LookupService<S>>, prefix: impl Into<String>) -> Self {
        Self {
            service,
            prefix: prefix.into(),
        }
    }

    async fn handle_char(&self, ctx: &Context, msg: &Message, raw_name: &str) {
        let query = match CharacterQuery::parse(raw_name) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!(author = %msg.author.name, "Rejected blank character name");
                if let Err(e) = msg.channel_id.say(&ctx.http, reply::invalid_input(&err)).await {
                    tracing::error!("Failed to send validation reply: {e}");
                }
                return;
            }
        };

        tracing::info!(
            character = query.name(),
            author = %msg.author.name,
            channel = %msg.channel_id,
            "Character lookup requested"
        );

        let mut ack = match msg
            .channel_id
            .say(&ctx.http, reply::acknowledgment(query.name()))
            .await
        {
            Ok(ack) => ack,
            Err(e) => {
                tracing::error!("Failed to send acknowledgment: {e}");
                return;
            }
        };

        let text = char_reply(self.service.as_ref(), &query, Local::now().date_naive()).await;

        if let Err(e) = ack.edit(ctx, EditMessage::new().content(text)).await {
            tracing::error!("Failed to edit reply: {e}");
        }
    }
}

#[async_trait]
impl<S: StatsSource + 'static> EventHandler for Handler<S> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        if let Some(Command::Char { name }) = parse_command(&msg.content, &self.prefix) {
            self.handle_char(&ctx, &msg, &name).await;
        }
    }
}
