use actix_web::web::{Data, Json, Query};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Campaign, CampaignId, Message};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignBody {
    pub name: String,
    pub description: String,
    pub current_amount: i64,
    pub target_amount: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub current_amount: i64,
    pub target_amount: i64,
    pub chat: Vec<Message>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            current_amount: campaign.current_amount,
            target_amount: campaign.target_amount,
            chat: campaign.chat,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CampaignIdParams {
    pub id: CampaignId,
}

// POST /api/flower
#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let campaign = manager::create_campaign(
        &***db,
        body.name,
        body.description,
        body.current_amount,
        body.target_amount,
    )
    .await?;

    Ok(Json(CampaignBody::render(campaign)))
}

// GET /api/flowers
#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(&***db).await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}

// GET /api/flower/show?id=CPN-...
#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Query<CampaignIdParams>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner().id;

    let campaign = manager::get_campaign_by_id(&***db, campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)))
}
