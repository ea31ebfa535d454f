//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers, plus the services that sit between the driving and driven ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / Special and their create/update DTOs.
//! - UsersService / SpecialsService: implementations of the driving ports.

pub mod entity_id;
pub mod error;
pub mod ports;
pub mod special;
pub mod specials_service;
pub mod user;
pub mod users_service;

pub use self::entity_id::{EntityIdError, SpecialId, UserId};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::special::{NewSpecial, Special, SpecialChanges, SpecialFilter};
pub use self::specials_service::SpecialsService;
pub use self::user::{NewUser, User, UserChanges};
pub use self::users_service::UsersService;
