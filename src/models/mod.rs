// src/models/mod.rs
pub mod account;
pub mod action;
pub mod cdr;
pub mod tariff;

pub use account::{Account, Balance};
pub use action::{Action, ActionPlan, ActionTiming, ActionTrigger};
pub use cdr::{Cdr, TypeOfRecord};
pub use tariff::{Destination, DestinationRate, Rate, RatingPlan, RatingPlanActivation, Timing};

/// Tipos de request soportados por CGRateS
pub mod request_types {
    pub const PREPAID: &str = "*prepaid";
    pub const POSTPAID: &str = "*postpaid";
    pub const PSEUDOPREPAID: &str = "*pseudoprepaid";
    pub const RATED: &str = "*rated";
    pub const NONE: &str = "*none";
}

/// Tipos de balance en CGRateS
pub mod balance_types {
    pub const MONETARY: &str = "*monetary";
    pub const VOICE: &str = "*voice";
    pub const SMS: &str = "*sms";
    pub const DATA: &str = "*data";
}
