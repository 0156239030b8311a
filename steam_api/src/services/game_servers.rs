use crate::{Client, Error};

const INTERFACE: &str = "IGameServersService";

/// `IGameServersService`: game server accounts owned by the key holder.
#[derive(Clone, Copy)]
pub struct GameServersService<'a> {
    client: &'a Client,
    api_key: &'a str,
}

impl<'a> GameServersService<'a> {
    pub(crate) fn new(client: &'a Client, api_key: &'a str) -> Self {
        Self { client, api_key }
    }

    pub async fn get_account_list(&self) -> Result<String, Error> {
        let url = self
            .client
            .build_url(INTERFACE, "GetAccountList", "v1", Some(self.api_key))?;
        self.client.get_text(url).await
    }
}
