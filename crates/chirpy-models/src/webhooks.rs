use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The only Polka event that changes state.
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Body of `POST /api/polka/webhooks`.
///
/// `data` is only read for [`USER_UPGRADED_EVENT`]; other events may omit it.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct PolkaEvent {
    #[schema(example = "user.upgraded")]
    pub event: String,
    #[serde(default)]
    pub data: Option<PolkaEventData>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct PolkaEventData {
    pub user_id: Uuid,
}

impl PolkaEvent {
    pub fn is_user_upgraded(&self) -> bool {
        self.event == USER_UPGRADED_EVENT
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.data.as_ref().map(|data| data.user_id)
    }
}
