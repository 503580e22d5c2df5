/*
[INPUT]:  Parsed commands, CLI configuration, the Kettik client
[OUTPUT]: Command output on stdout, route changes, typed failures
[POS]:    Application layer - dispatches one command per process
[UPDATE]: When adding commands or changing their output
*/

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use console::style;
use kettik_client::{
    FileTokenStore, KettikApi, KettikClient, Route, RouteGate, SessionSupervisor, TokenStore,
    UpdateProfileRequest,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cli::{Command, prompt};
use crate::config::CliConfig;
use crate::navigator::TerminalNavigator;
use crate::render;

/// One CLI session: the domain API plus the navigation that follows it
pub struct App {
    api: KettikApi,
    supervisor: SessionSupervisor<TerminalNavigator>,
    config: CliConfig,
}

impl App {
    /// Open the session file under the configured data directory
    pub fn new(config: CliConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let store: Arc<dyn TokenStore> = Arc::new(
            FileTokenStore::open(&data_dir)
                .with_context(|| format!("open session store in {}", data_dir.display()))?,
        );
        let client = KettikClient::with_config(config.client_config()).context("create client")?;
        Ok(Self::with_parts(config, client, store, TerminalNavigator::new()))
    }

    pub fn with_parts(
        config: CliConfig,
        client: KettikClient,
        store: Arc<dyn TokenStore>,
        navigator: TerminalNavigator,
    ) -> Self {
        let supervisor = SessionSupervisor::new(navigator, RouteGate::new(store.clone()));
        Self {
            api: KettikApi::new(client, store),
            supervisor,
            config,
        }
    }

    pub fn api(&self) -> &KettikApi {
        &self.api
    }

    pub fn navigator(&self) -> &TerminalNavigator {
        self.supervisor.navigator()
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        debug!(?command, "running command");
        match command {
            Command::Login { phone, code } => self.login(phone, code).await,
            Command::RequestCode { phone } => self.request_code(&phone).await,
            Command::VerifyCode { phone, code } => self.verify_code(&phone, &code).await,
            Command::Profile => self.profile().await,
            Command::UpdateProfile {
                first_name,
                last_name,
                middle_name,
                email,
                birth_date,
            } => {
                self.update_profile(UpdateProfileRequest {
                    first_name,
                    last_name,
                    middle_name,
                    email,
                    birth_date,
                })
                .await
            }
            Command::Balance => self.balance().await,
            Command::TopUp { amount, card } => self.top_up(amount, card).await,
            Command::Cards => self.cards().await,
            Command::AddCard => self.add_card().await,
            Command::SetDefaultCard { id } => self.set_default_card(id).await,
            Command::DeactivateCard { id, yes } => self.deactivate_card(id, yes).await,
            Command::Logout => self.logout(),
            Command::Status => self.status(),
            Command::Open { path } => {
                self.supervisor.navigate_to(Route::resolve(&path));
                Ok(())
            }
            Command::Config => {
                print!("{}", self.config.to_yaml()?);
                Ok(())
            }
        }
    }

    async fn login(&self, phone: Option<String>, code: Option<String>) -> Result<()> {
        let phone = match phone {
            Some(phone) => phone.trim().to_string(),
            None => {
                prompt::welcome();
                prompt::phone()?
            }
        };
        self.request_code(&phone).await?;

        let code = match code {
            Some(code) => code,
            None => prompt::code(&phone)?,
        };
        self.verify_code(&phone, &code).await
    }

    async fn request_code(&self, phone: &str) -> Result<()> {
        let response = self.api.request_code(phone).await?;
        let message =
            non_empty(response.message).unwrap_or_else(|| format!("Code sent to {phone}"));
        println!("{}", style(message).green());
        self.supervisor.navigate_to(Route::Code {
            phone: phone.to_string(),
        });
        Ok(())
    }

    async fn verify_code(&self, phone: &str, code: &str) -> Result<()> {
        prompt::validate_code(code).map_err(|reason| anyhow!(reason))?;
        self.api.verify_code(phone, code.trim()).await?;
        info!("signed in");
        println!("{}", style("Signed in").bold().green());
        self.supervisor.navigate_to(Route::Dashboard);
        Ok(())
    }

    async fn profile(&self) -> Result<()> {
        let profile = self.supervisor.observe(self.api.get_profile().await)?;
        println!("{}", render::profile(&profile));
        Ok(())
    }

    async fn update_profile(&self, update: UpdateProfileRequest) -> Result<()> {
        if update.is_empty() {
            bail!("nothing to update: pass at least one field");
        }
        self.supervisor
            .observe(self.api.update_profile(&update).await)?;
        println!("{}", style("Profile updated").green());
        self.profile().await
    }

    async fn balance(&self) -> Result<()> {
        let balance = self.supervisor.observe(self.api.get_balance().await)?;
        println!("{}", render::balance(balance.amount()));
        Ok(())
    }

    async fn top_up(&self, amount: Decimal, card: Option<i64>) -> Result<()> {
        if amount <= Decimal::ZERO {
            bail!("amount must be greater than zero");
        }
        let response = self.supervisor.observe(self.api.top_up(amount, card).await)?;

        if let Some(url) = response.confirmation_url() {
            println!("{}", style("Confirm the payment in your browser:").yellow());
            println!("{url}");
            return Ok(());
        }

        if !response.success {
            let reason =
                non_empty(response.message).unwrap_or_else(|| "Top-up was not completed".to_string());
            bail!(reason);
        }

        let message = non_empty(response.message)
            .unwrap_or_else(|| format!("Topped up {}", render::format_amount(amount)));
        println!("{}", style(message).green());
        self.balance().await
    }

    async fn cards(&self) -> Result<()> {
        let cards = self
            .supervisor
            .observe(self.api.list_payment_methods().await)?;
        println!("{}", render::cards(&cards));
        Ok(())
    }

    async fn add_card(&self) -> Result<()> {
        let response = self.supervisor.observe(self.api.add_card().await)?;
        match non_empty(response.redirect_url) {
            Some(url) => {
                println!("{}", style("Finish adding the card in your browser:").yellow());
                println!("{url}");
                Ok(())
            }
            None => bail!("No enrollment link was returned"),
        }
    }

    async fn set_default_card(&self, id: i64) -> Result<()> {
        self.supervisor
            .observe(self.api.set_default_card(id).await)?;
        println!("{}", style(format!("Card #{id} is now the default")).green());
        self.cards().await
    }

    async fn deactivate_card(&self, id: i64, confirmed: bool) -> Result<()> {
        if !confirmed && !prompt::confirm(&format!("Remove card #{id}?"))? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }
        self.supervisor
            .observe(self.api.deactivate_card(id).await)?;
        println!("{}", style(format!("Card #{id} removed")).green());
        self.cards().await
    }

    fn logout(&self) -> Result<()> {
        self.api.logout()?;
        println!("{}", style("Signed out").green());
        self.supervisor.navigate_to(Route::Phone);
        Ok(())
    }

    fn status(&self) -> Result<()> {
        let state = if self.api.is_authenticated() {
            style("signed in").green()
        } else {
            style("signed out").yellow()
        };
        println!("{} {}", style("Session:").dim(), state);
        self.supervisor.navigate_to(Route::Dashboard);
        Ok(())
    }
}

fn non_empty(text: impl Into<Option<String>>) -> Option<String> {
    text.into().filter(|text| !text.trim().is_empty())
}
