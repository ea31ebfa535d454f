//! Builders wiring repositories into services and HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use specials_backend::domain::ports::{SpecialRepository, UserRepository};
use specials_backend::domain::{SpecialsService, UsersService};
use specials_backend::inbound::http::state::{HttpState, HttpStatePorts};
use specials_backend::outbound::memory::{InMemorySpecialRepository, InMemoryUserRepository};
use specials_backend::outbound::persistence::{
    DbPool, DieselSpecialRepository, DieselUserRepository, run_pending_migrations,
};

use super::ServerSettings;

/// Wrap a repository pair in services and expose them through the ports.
fn state_from_repositories<U, S>(users: U, specials: S, clock: Arc<dyn Clock>) -> HttpState
where
    U: UserRepository + 'static,
    S: SpecialRepository + 'static,
{
    let users = Arc::new(UsersService::new(Arc::new(users)));
    let specials = Arc::new(SpecialsService::new(Arc::new(specials)));
    HttpState::new(HttpStatePorts::from_services(users, specials), clock)
}

/// Build handler state backed by PostgreSQL when a database URL is
/// configured, otherwise by the in-memory store.
///
/// # Errors
/// Returns a report when migrations fail or the pool cannot be built.
pub async fn build_http_state(settings: &ServerSettings) -> color_eyre::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; using the in-memory store");
        return Ok(state_from_repositories(
            InMemoryUserRepository::new(clock.clone()),
            InMemorySpecialRepository::new(clock.clone()),
            clock,
        ));
    };

    if settings.run_migrations() {
        run_pending_migrations(pool_config.database_url()).await?;
    } else {
        info!(reason = "disabled", "database migrations skipped");
    }

    let pool = DbPool::new(pool_config).await?;
    info!("database pool ready");
    Ok(state_from_repositories(
        DieselUserRepository::new(pool.clone()),
        DieselSpecialRepository::new(pool),
        clock,
    ))
}
