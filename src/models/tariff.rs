//! Objetos de tarificación: Destination, Rate, DestinationRate, RatingPlan,
//! RatingPlanActivation y Timing.
//!
//! Los campos obligatorios no llevan default: su ausencia en el wire es un
//! error de decodificación. Los opcionales sin valor se emiten como null
//! para conservar la forma del envelope que espera el servidor.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;

/// Conjunto de prefijos de marcación con nombre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "Id")]
    pub destination_id: String,

    #[serde(rename = "Prefixes")]
    pub prefixes: Vec<String>,
}

/// Definición de precio por unidad (rate slot de CGRateS).
///
/// Las duraciones llevan sufijo de unidad en el wire y son conteos de
/// segundos sin unidad en nativo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(rename = "ConnectFee", default)]
    pub connect_fee: f64,

    #[serde(rename = "Rate")]
    pub rate: f64,

    #[serde(rename = "RateUnit", default, with = "codec::seconds")]
    pub rate_unit: Option<i64>,

    #[serde(rename = "RateIncrement", default, with = "codec::seconds")]
    pub rate_increment: Option<i64>,

    #[serde(rename = "GroupIntervalStart", default, with = "codec::seconds")]
    pub group_interval_start: Option<i64>,
}

fn default_rounding_method() -> String {
    "*up".to_string()
}

fn default_rounding_decimals() -> i32 {
    4
}

/// Asociación de un Rate a una Destination con política de redondeo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRate {
    #[serde(rename = "RateId")]
    pub rate_id: String,

    #[serde(rename = "DestinationId")]
    pub dest_id: String,

    #[serde(rename = "RoundingMethod", default = "default_rounding_method")]
    pub rounding_method: String,

    #[serde(rename = "RoundingDecimals", default = "default_rounding_decimals")]
    pub rounding_decimals: i32,

    #[serde(rename = "Rate", default, with = "codec::empty_string")]
    pub rate: Option<String>,

    #[serde(rename = "MaxCost", default)]
    pub max_cost: Option<f64>,

    #[serde(rename = "MaxCostStrategy", default, with = "codec::empty_string")]
    pub max_cost_strategy: Option<String>,
}

fn default_weight() -> i32 {
    10
}

/// Asociación de un DestinationRate a un Timing con peso de desempate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPlan {
    #[serde(rename = "DestinationRatesId")]
    pub dest_rate_id: String,

    #[serde(rename = "TimingId")]
    pub timing_id: String,

    #[serde(rename = "Weight", default = "default_weight")]
    pub weight: i32,
}

/// Activación de un RatingPlan bajo un rating profile.
///
/// `ActivationTime` usa RFC3339 con sufijo `Z` como formato canónico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingPlanActivation {
    #[serde(rename = "RatingPlanId")]
    pub rating_plan_id: String,

    #[serde(rename = "FallbackSubjects", default, with = "codec::empty_string")]
    pub fallback_subjects: Option<String>,

    #[serde(rename = "ActivationTime", default, with = "codec::rfc3339")]
    pub activation_time: Option<DateTime<Utc>>,
}

/// Horario recurrente: patrón de días/meses/años más hora del día.
///
/// Los campos de calendario usan el centinela `*any` cuando no restringen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(rename = "ID")]
    pub timing_id: String,

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
}

impl Timing {
    /// Timing sin restricciones de calendario, a medianoche.
    pub fn new(timing_id: &str) -> Self {
        Timing {
            timing_id: timing_id.to_string(),
            time: codec::time_of_day::midnight(),
            week_days: Vec::new(),
            month_days: Vec::new(),
            months: Vec::new(),
            years: Vec::new(),
        }
    }
}
