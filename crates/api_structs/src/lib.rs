mod auth;
mod birthday;
mod communication;
mod department;
mod employee;
mod envelope;
mod status;

pub mod dtos {
    pub use crate::birthday::dtos::*;
    pub use crate::communication::dtos::*;
    pub use crate::department::dtos::*;
    pub use crate::employee::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::birthday::api::*;
pub use crate::communication::api::*;
pub use crate::department::api::*;
pub use crate::employee::api::*;
pub use crate::envelope::Envelope;
pub use crate::status::api::*;
