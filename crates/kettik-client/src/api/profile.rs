/*
[INPUT]:  Stored credential and profile fields
[OUTPUT]: User profile and balance
[POS]:    Domain layer - user endpoints (require bearer auth)
[UPDATE]: When adding new user endpoints
*/

// ### User Endpoints

use crate::api::KettikApi;
use crate::http::{RequestDescriptor, ResponseBody, Result};
use crate::types::{Balance, UpdateProfileRequest, UserProfile};

impl KettikApi {
    /// GET /proxy/users/me/
    #[tracing::instrument(skip_all)]
    pub async fn get_profile(&self) -> Result<UserProfile> {
        let descriptor = RequestDescriptor::get("/proxy/users/me/");
        self.guard().execute_authenticated(&descriptor).await?.parse()
    }

    /// PATCH /users/update_profile/
    #[tracing::instrument(skip_all)]
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> Result<ResponseBody> {
        let descriptor = RequestDescriptor::patch("/users/update_profile/").json(update)?;
        Ok(self.guard().execute_authenticated(&descriptor).await?.body)
    }

    /// GET /users/balance/
    #[tracing::instrument(skip_all)]
    pub async fn get_balance(&self) -> Result<Balance> {
        let descriptor = RequestDescriptor::get("/users/balance/");
        self.guard().execute_authenticated(&descriptor).await?.parse()
    }
}
