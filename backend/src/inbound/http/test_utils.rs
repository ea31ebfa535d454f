//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::MockClock;

use crate::domain::ports::{MockSpecialsCommand, MockSpecialsQuery, MockUsersCommand, MockUsersQuery};
use crate::domain::{Special, SpecialId, User, UserId};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Instant every fixture is stamped with.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 18, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Mocked driving ports. Unconfigured mocks panic when called, so a test
/// that leaves one untouched asserts the handler never reached it.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUsersQuery,
    pub users_command: MockUsersCommand,
    pub specials: MockSpecialsQuery,
    pub specials_command: MockSpecialsCommand,
}

impl MockPorts {
    /// Wrap the mocks into handler state with a clock frozen at
    /// [`fixed_now`].
    pub fn into_state(self) -> HttpState {
        let mut clock = MockClock::new();
        clock.expect_utc().returning(fixed_now);
        HttpState::new(
            HttpStatePorts {
                users: Arc::new(self.users),
                users_command: Arc::new(self.users_command),
                specials: Arc::new(self.specials),
                specials_command: Arc::new(self.specials_command),
            },
            Arc::new(clock),
        )
    }

    /// Build an app serving the full `/api/v1` scope over these mocks.
    pub fn into_app(
        self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.into_state()))
            .service(api_scope())
    }
}

pub fn sample_user() -> User {
    User {
        id: UserId::new("11111111-1111-1111-1111-111111111111").expect("valid user id"),
        email: "test@example.com".to_owned(),
        name: Some("Test User".to_owned()),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn sample_special() -> Special {
    Special {
        id: SpecialId::new("22222222-2222-2222-2222-222222222222").expect("valid special id"),
        title: "Test Special".to_owned(),
        description: Some("Test Description".to_owned()),
        price: 99.99,
        is_active: true,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
