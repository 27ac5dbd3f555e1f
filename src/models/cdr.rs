//! CDR externo en formato wire de CGRateS (CdrsV2.ProcessExternalCDR)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;

/// Tipo de registro (`ToR`) de un CDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeOfRecord {
    #[serde(rename = "*voice")]
    Voice,
    #[serde(rename = "*data")]
    Data,
    #[serde(rename = "*sms")]
    Sms,
}

/// Call Detail Record tal como lo consume CGRateS.
///
/// Todos los campos string son anulables; `""` en el wire equivale a
/// ausente. `SetupTime`/`AnswerTime` usan ISO8601 con offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cdr {
    #[serde(rename = "OriginID", default, with = "codec::empty_string")]
    pub origin_id: Option<String>,

    #[serde(rename = "Category", default, with = "codec::empty_string")]
    pub category: Option<String>,

    #[serde(rename = "Account", default, with = "codec::empty_string")]
    pub account: Option<String>,

    #[serde(rename = "RequestType", default, with = "codec::empty_string")]
    pub request_type: Option<String>,

    #[serde(rename = "Direction", default, with = "codec::empty_string")]
    pub direction: Option<String>,

    #[serde(rename = "Subject", default, with = "codec::empty_string")]
    pub subject: Option<String>,

    #[serde(rename = "Destination", default, with = "codec::empty_string")]
    pub destination: Option<String>,

    #[serde(rename = "SetupTime", default, with = "codec::iso8601")]
    pub setup_time: Option<DateTime<Utc>>,

    #[serde(rename = "AnswerTime", default, with = "codec::iso8601")]
    pub answer_time: Option<DateTime<Utc>>,

    #[serde(rename = "Usage", default, with = "codec::empty_string")]
    pub usage: Option<String>,

    #[serde(rename = "Tenant", default, with = "codec::empty_string")]
    pub tenant: Option<String>,

    #[serde(rename = "ToR", default)]
    pub type_of_record: Option<TypeOfRecord>,
}

impl Cdr {
    /// CDR de voz: fija `ToR` en `*voice`.
    pub fn voice() -> Self {
        Cdr {
            type_of_record: Some(TypeOfRecord::Voice),
            ..Cdr::default()
        }
    }

    /// CDR de datos: fija `ToR` en `*data`.
    pub fn data() -> Self {
        Cdr {
            type_of_record: Some(TypeOfRecord::Data),
            ..Cdr::default()
        }
    }

    /// CDR de SMS: fija `ToR` en `*sms`.
    pub fn sms() -> Self {
        Cdr {
            type_of_record: Some(TypeOfRecord::Sms),
            ..Cdr::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request_types;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_voice_cdr_encodes_tor_default() {
        let cdr = Cdr::voice();
        let json = serde_json::to_value(&cdr).unwrap();

        assert_eq!(json["ToR"], json!("*voice"));
    }

    #[test]
    fn test_explicit_wire_tor_wins_over_subtype_default() {
        // un valor explícito en el wire manda sobre el default del subtipo
        let cdr: Cdr = serde_json::from_value(json!({"ToR": "*sms"})).unwrap();
        assert_eq!(cdr.type_of_record, Some(TypeOfRecord::Sms));
    }

    #[test]
    fn test_cdr_round_trip() {
        let cdr = Cdr {
            origin_id: Some("call-123".to_string()),
            category: Some("call".to_string()),
            account: Some("1001".to_string()),
            request_type: Some(request_types::RATED.to_string()),
            destination: Some("4512345678".to_string()),
            setup_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            answer_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 5).unwrap()),
            usage: Some("60s".to_string()),
            tenant: Some("cgrates.org".to_string()),
            ..Cdr::voice()
        };

        let wire = serde_json::to_value(&cdr).unwrap();
        let back: Cdr = serde_json::from_value(wire).unwrap();

        assert_eq!(back, cdr);
    }

    #[test]
    fn test_empty_strings_decode_as_absent() {
        let cdr: Cdr = serde_json::from_value(json!({
            "OriginID": "",
            "Subject": "",
            "Destination": "4512345678"
        }))
        .unwrap();

        assert_eq!(cdr.origin_id, None);
        assert_eq!(cdr.subject, None);
        assert_eq!(cdr.destination, Some("4512345678".to_string()));
    }
}
