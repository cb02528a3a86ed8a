mod admin;
pub mod aggregate;
pub mod anniversary;
mod communication;
pub mod date;
mod department;
mod employee;
pub mod notification;
pub mod roster;
mod shared;
pub mod views;

pub use admin::Admin;
pub use anniversary::{AnniversaryEvent, AnniversaryKind};
pub use chrono::NaiveDate;
pub use chrono_tz::Tz;
pub use communication::Communication;
pub use department::{Department, Membership};
pub use employee::Employee;
pub use shared::entity::{Entity, InvalidIDError, ID};
