//! Acciones y su calendarización: Action, ActionPlan, ActionTiming,
//! ActionTrigger. Los campos de horario comparten la semántica de Timing.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::codec;

fn default_weight() -> i32 {
    10
}

/// Acción identificada en el servidor (topup, debit, disable...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "Identifier")]
    pub id: String,
}

/// Plan que agenda la ejecución de un grupo de acciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(rename = "ActionsId")]
    pub action_id: String,

    #[serde(
        rename = "Time",
        default = "codec::time_of_day::midnight",
        with = "codec::time_of_day"
    )]
    pub time: NaiveTime,

    #[serde(rename = "WeekDays", default, with = "codec::any_or_list")]
    pub week_days: Vec<u32>,

    #[serde(rename = "MonthDays", default, with = "codec::any_or_list")]
    pub month_days: Vec<u32>,

    #[serde(rename = "Months", default, with = "codec::any_or_list")]
    pub months: Vec<u32>,

    #[serde(rename = "Years", default, with = "codec::any_or_list")]
    pub years: Vec<u32>,

    #[serde(rename = "Weight", default = "default_weight")]
    pub weight: i32,
}

impl ActionPlan {
    /// Plan sin restricciones de calendario para `action_id`.
    pub fn new(action_id: &str) -> Self {
        ActionPlan {
            action_id: action_id.to_string(),
            time: codec::time_of_day::midnight(),
            week_days: Vec::new(),
            month_days: Vec::new(),
            months: Vec::new(),
            years: Vec::new(),
            weight: default_weight(),
        }
    }
}

/// Asociación de un grupo de acciones a un Timing ya definido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTiming {
    #[serde(rename = "ActionsId")]
    pub action_id: String,

    #[serde(rename = "TimingId")]
    pub timing_id: String,

    #[serde(rename = "Weight", default = "default_weight")]
    pub weight: i32,
}

/// Disparador de acciones sobre umbrales de balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTrigger {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "UniqueID")]
    pub unique_id: String,
}
