//! Account y Balance, incluyendo la decodificación anidada de BalanceMap.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codec;

/// Crédito tipado dentro de una cuenta.
///
/// Los mapas auxiliares (categorías, destinos, grupos, timings) llegan como
/// `{"tag": true}`; null decodifica a mapa vacío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Balance {
    #[serde(rename = "Uuid", default, with = "codec::empty_string")]
    pub uuid: Option<String>,

    #[serde(rename = "ID", default, with = "codec::empty_string")]
    pub id: Option<String>,

    #[serde(rename = "Value", default)]
    pub value: f64,

    #[serde(rename = "Weight", default)]
    pub weight: f64,

    #[serde(rename = "Disabled", default)]
    pub disabled: bool,

    #[serde(rename = "Blocker", default)]
    pub blocker: bool,

    #[serde(rename = "ExpirationDate", default, with = "codec::rfc3339")]
    pub expiration_date: Option<DateTime<Utc>>,

    #[serde(rename = "RatingSubject", default, with = "codec::empty_string")]
    pub rating_subject: Option<String>,

    #[serde(
        rename = "Categories",
        default,
        deserialize_with = "codec::null_as_default"
    )]
    pub categories: HashMap<String, bool>,

    #[serde(
        rename = "DestinationIDs",
        default,
        deserialize_with = "codec::null_as_default"
    )]
    pub destination_ids: HashMap<String, bool>,

    #[serde(
        rename = "SharedGroups",
        default,
        deserialize_with = "codec::null_as_default"
    )]
    pub shared_groups: HashMap<String, bool>,

    #[serde(
        rename = "TimingIDs",
        default,
        deserialize_with = "codec::null_as_default"
    )]
    pub timing_ids: HashMap<String, bool>,
}

/// Entidad facturable con sus balances agrupados por tipo.
///
/// `BalanceMap` ausente o null decodifica a mapa vacío: los llamadores
/// pueden iterarlo incondicionalmente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "ID")]
    pub account: String,

    #[serde(rename = "AllowNegative", default)]
    pub allow_negative: bool,

    #[serde(rename = "Disabled", default)]
    pub disabled: bool,

    #[serde(
        rename = "BalanceMap",
        default,
        deserialize_with = "codec::null_as_default"
    )]
    pub balance_map: HashMap<String, Vec<Balance>>,

    #[serde(rename = "UnitCounters", default)]
    pub unit_counters: Option<serde_json::Value>,

    #[serde(rename = "ActionTriggers", default)]
    pub action_triggers: Option<serde_json::Value>,
}

impl Account {
    /// Descarta el prefijo `tenant:` de un id compuesto devuelto por el
    /// servidor (`"tenant1:ACC1"` → `"ACC1"`). Se parte en el primer `:`.
    pub fn strip_tenant_prefix(mut self) -> Self {
        if let Some((_, account)) = self.account.split_once(':') {
            self.account = account.to_string();
        }
        self
    }

    /// Balance monetario disponible (primer balance `*monetary`).
    pub fn monetary_balance(&self) -> Decimal {
        self.balance_map
            .get("*monetary")
            .and_then(|balances| balances.first())
            .and_then(|balance| Decimal::from_f64_retain(balance.value))
            .unwrap_or(Decimal::ZERO)
    }
}
