use tracing::warn;

use crate::campaign::{CampaignId, Message, Role};
use crate::completion::CompletionApi;
use crate::database::Database;
use crate::error::Error;

use super::Persistence;

// Appended after the transcript on every submission; the upstream model is
// told to answer as a single plain paragraph.
const ANSWER_STYLE_INSTRUCTION: &str = "Now turn this your answer to paragraph with only \
     letters, no new line or other such stuff. Just paragraph based answer";

/// Answer a user message in a campaign's chat.
///
/// The sequence is fetch, append the user message, submit the full transcript
/// plus the style instruction, append the reply, return the reply. There is no
/// atomicity across these steps: a failure partway through can leave the
/// persisted chat missing the user message, the reply, or both.
#[tracing::instrument(skip(db, completion, content))]
pub async fn generate_answer(
    db: &dyn Database,
    completion: &dyn CompletionApi,
    campaign_id: CampaignId,
    content: String,
    persistence: Persistence,
) -> Result<String, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignDoesNotExist { campaign_id })?;

    let user_message = Message {
        role: Role::User,
        content,
    };

    persist_message(db, campaign_id, &user_message, persistence).await?;

    let mut transcript = campaign.chat;
    transcript.push(user_message);
    transcript.push(Message {
        role: Role::User,
        content: ANSWER_STYLE_INSTRUCTION.to_string(),
    });

    let reply = completion.submit_transcript(&transcript).await?;

    let assistant_message = Message {
        role: Role::Assistant,
        content: reply.clone(),
    };

    persist_message(db, campaign_id, &assistant_message, persistence).await?;

    Ok(reply)
}

async fn persist_message(
    db: &dyn Database,
    campaign_id: CampaignId,
    message: &Message,
    persistence: Persistence,
) -> Result<(), Error> {
    match db.campaigns().push_chat_message(campaign_id, message).await {
        Ok(()) => Ok(()),
        Err(err) => match persistence {
            Persistence::BestEffort => {
                warn!(
                    "failed to persist {:?} message for campaign {}: {}",
                    message.role, campaign_id, err
                );
                Ok(())
            }
            Persistence::Strict => Err(err),
        },
    }
}
