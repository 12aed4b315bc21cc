use mongodb::Collection;

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;

pub type MongoCampaignStore = Collection<Campaign>;

/// Capability interface over the backing document store. Handlers receive a
/// `Box<dyn Database>` so tests can substitute [`test::MockDatabase`].
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    campaigns: Collection<Campaign>,
}

impl MongoDatabase {
    pub fn new(db: mongodb::Database) -> MongoDatabase {
        MongoDatabase {
            campaigns: db.collection("campaigns"),
        }
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }
}

pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignId, Message};
    use crate::error::Error;

    use super::Database;

    pub struct MockCampaignStore {
        pub on_insert_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn() -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaign_by_id:
            Box<dyn Fn(CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>,
        pub on_push_chat_message:
            Box<dyn Fn(CampaignId, &Message) -> Result<(), Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("insert_campaign was not expected")),
                on_fetch_campaigns: Box::new(|| panic!("fetch_campaigns was not expected")),
                on_fetch_campaign_by_id: Box::new(|_| {
                    panic!("fetch_campaign_by_id was not expected")
                }),
                on_push_chat_message: Box::new(|_, _| {
                    panic!("push_chat_message was not expected")
                }),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)()
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn push_chat_message(
            &self,
            campaign_id: CampaignId,
            message: &Message,
        ) -> Result<(), Error> {
            (self.on_push_chat_message)(campaign_id, message)
        }
    }

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }
    }
}
