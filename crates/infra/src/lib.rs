mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailRelayConfig};
use repos::Repos;
pub use services::{
    EmailNotificationProvider, INotificationProvider, InstagramNotificationProvider,
    NotificationOutcome, StubNotificationProvider,
};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use wildcal_domain::NotificationChannel;

#[derive(Clone)]
pub struct WildcalContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifiers: NotificationProviders,
}

/// The channel providers the daily notification job delivers through.
/// Which concrete provider backs a channel is decided by configuration,
/// never assumed by the engine.
#[derive(Clone)]
pub struct NotificationProviders {
    pub email: Arc<dyn INotificationProvider>,
    pub instagram: Arc<dyn INotificationProvider>,
}

impl NotificationProviders {
    pub fn from_config(config: &Config) -> Self {
        let email: Arc<dyn INotificationProvider> = match &config.email_relay {
            Some(relay) => Arc::new(EmailNotificationProvider::new(
                relay.url.clone(),
                relay.api_token.clone(),
                relay.sender.clone(),
            )),
            None => Arc::new(StubNotificationProvider::queued()),
        };
        let instagram: Arc<dyn INotificationProvider> = Arc::new(
            InstagramNotificationProvider::new(config.instagram_username.clone()),
        );
        Self { email, instagram }
    }

    pub fn provider_for(&self, channel: NotificationChannel) -> Arc<dyn INotificationProvider> {
        match channel {
            NotificationChannel::Email => self.email.clone(),
            NotificationChannel::Instagram => self.instagram.clone(),
        }
    }
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl WildcalContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let notifiers = NotificationProviders::from_config(&config);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifiers,
        }
    }

    /// Context backed by inmemory repositories, used by tests
    pub fn create_inmemory() -> Self {
        let config = Config::new();
        let notifiers = NotificationProviders::from_config(&config);
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifiers,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> WildcalContext {
    WildcalContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
