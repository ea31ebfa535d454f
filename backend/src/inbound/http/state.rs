//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{SpecialsCommand, SpecialsQuery, UsersCommand, UsersQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub specials: Arc<dyn SpecialsQuery>,
    pub specials_command: Arc<dyn SpecialsCommand>,
}

impl HttpStatePorts {
    /// Build the bundle from services that implement both sides of a port
    /// pair.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use specials_backend::domain::{SpecialsService, UsersService};
    /// use specials_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use specials_backend::outbound::memory::{InMemorySpecialRepository, InMemoryUserRepository};
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new(clock.clone()))));
    /// let specials = Arc::new(SpecialsService::new(Arc::new(
    ///     InMemorySpecialRepository::new(clock.clone()),
    /// )));
    /// let state = HttpState::new(HttpStatePorts::from_services(users, specials), clock);
    /// let _users = state.users.clone();
    /// ```
    pub fn from_services<U, S>(users: Arc<U>, specials: Arc<S>) -> Self
    where
        U: UsersQuery + UsersCommand + 'static,
        S: SpecialsQuery + SpecialsCommand + 'static,
    {
        Self {
            users: users.clone(),
            users_command: users,
            specials: specials.clone(),
            specials_command: specials,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub specials: Arc<dyn SpecialsQuery>,
    pub specials_command: Arc<dyn SpecialsCommand>,
    /// Source of the timestamp reported by the health endpoint.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the ports bundle and a clock.
    pub fn new(ports: HttpStatePorts, clock: Arc<dyn Clock>) -> Self {
        let HttpStatePorts {
            users,
            users_command,
            specials,
            specials_command,
        } = ports;
        Self {
            users,
            users_command,
            specials,
            specials_command,
            clock,
        }
    }
}
