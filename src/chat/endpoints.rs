use actix_web::web::{Data, Json, Query};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignIdParams;
use crate::completion::CompletionApi;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Persistence};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PostMessageBody {
    pub content: String,
}

// POST /api/message?id=CPN-...
#[tracing::instrument(skip(db, completion, persistence))]
pub async fn post_message(
    db: Data<Box<dyn Database>>,
    completion: Data<Box<dyn CompletionApi>>,
    persistence: Data<Persistence>,
    params: Query<CampaignIdParams>,
    body: Json<PostMessageBody>,
) -> Result<Json<String>, Error> {
    let campaign_id = params.into_inner().id;

    let reply = manager::generate_answer(
        &***db,
        &***completion,
        campaign_id,
        body.into_inner().content,
        *persistence.get_ref(),
    )
    .await?;

    Ok(Json(reply))
}
