use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, MessageId, MessageSender};

pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ConversationRow {
    id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    conversation_id: Uuid,
    sender: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = RepositoryError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let sender = row
            .sender
            .parse::<MessageSender>()
            .map_err(RepositoryError::InvalidData)?;

        Ok(Message {
            id: MessageId::from_uuid(row.id),
            conversation_id: ConversationId::from_uuid(row.conversation_id),
            sender,
            text: row.text,
            created_at: row.created_at,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(e.to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn create_conversation(&self) -> Result<Conversation, RepositoryError> {
        let conversation = Conversation::new();

        sqlx::query(
            r#"
            INSERT INTO conversations (id, created_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(conversation.id.as_uuid())
        .bind(conversation.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(conversation)
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, created_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| Conversation {
            id: ConversationId::from_uuid(r.id),
            created_at: r.created_at,
        }))
    }

    #[instrument(skip(self, text), fields(conversation_id = %conversation_id, sender = %sender))]
    async fn append_message(
        &self,
        conversation_id: ConversationId,
        sender: MessageSender,
        text: &str,
    ) -> Result<Message, RepositoryError> {
        let message = Message::new(conversation_id, sender, text.to_string());

        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, sender, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(conversation_id.as_uuid())
        .bind(sender.as_str())
        .bind(&message.text)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(message)
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id, limit = %limit))]
    async fn list_recent_messages(
        &self,
        conversation_id: ConversationId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, conversation_id, sender, text, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at DESC, seq DESC
            LIMIT $2
            "#,
        )
        .bind(conversation_id.as_uuid())
        .bind(limit_i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut messages = rows
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        messages.reverse();
        Ok(messages)
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, conversation_id, sender, text, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(conversation_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Message::try_from).collect()
    }
}
