//! People data model for the value-vs-identity demonstration.
//!
//! One concept - a person's name - modeled five ways: as a proper value
//! object ([`PersonName`]), as a value-object subtype carrying an identifier
//! ([`User`]), as a value object that transforms a field on read
//! ([`InitialedName`]), as an identity-compared mutable object
//! ([`PersonCard`]), and as a value object gone wrong ([`LooseName`]).

pub mod card;
pub mod initialed;
pub mod name;
pub mod smells;
pub mod user;

pub use card::PersonCard;
pub use initialed::InitialedName;
pub use name::PersonName;
pub use smells::LooseName;
pub use user::User;
