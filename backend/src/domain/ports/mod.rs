//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_repository_error;

mod special_repository;
mod specials_command;
mod specials_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use special_repository::MockSpecialRepository;
pub use special_repository::{SpecialRepository, SpecialRepositoryError};
#[cfg(test)]
pub use specials_command::MockSpecialsCommand;
pub use specials_command::SpecialsCommand;
#[cfg(test)]
pub use specials_query::MockSpecialsQuery;
pub use specials_query::SpecialsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
