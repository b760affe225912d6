mod assignment;
mod calendar;
mod event;
mod notification;
mod status;
mod submission;

pub mod dtos {
    pub use crate::assignment::dtos::*;
    pub use crate::calendar::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::submission::dtos::*;
}

pub use crate::assignment::api::*;
pub use crate::calendar::api::*;
pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::status::api::*;
pub use crate::submission::api::*;
