//! Codecs de campo para el formato de wire de CGRateS
//!
//! Cada codec es un módulo `serialize`/`deserialize` puro, enlazable por
//! campo vía `#[serde(with = "...")]`:
//! - `seconds`: `"60s"` ↔ 60 (ausencia ↔ null)
//! - `empty_string`: string vacío en el wire ↔ None
//! - `time_of_day`: hora de pared `"HH:MM:SS"`, default medianoche
//! - `any_or_list`: centinela `"*any"` ↔ lista vacía, `"1;2;3"` ↔ [1,2,3]
//! - `iso8601` / `rfc3339`: timestamps; un formato canónico por tipo de campo

use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

/// Deserializa null como el valor `Default` del tipo.
///
/// CGRateS devuelve null donde el cliente espera colecciones iterables
/// (BalanceMap, mapas auxiliares de Balance).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, String> {
    // El servidor responde RFC3339; material histórico usa %z sin dos puntos.
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))
}

/// Duración en segundos con sufijo de unidad: `"60s"` ↔ `Some(60)`.
///
/// `""` y null decodifican a `None`; `None` codifica a null (nunca a un
/// string malformado).
pub mod seconds {
    use super::*;

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_str(&format!("{}s", n)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Text(String),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Num(n)) => Ok(Some(n)),
            Some(Repr::Text(s)) => {
                let digits = s.strip_suffix('s').unwrap_or(&s);
                if digits.is_empty() {
                    return Ok(None);
                }
                digits
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("invalid duration: {:?}", s)))
            }
        }
    }
}

/// String anulable: `""` en el wire significa ausente.
pub mod empty_string {
    use super::*;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
    }
}

/// Hora de pared `"HH:MM:SS"`; ausente/null decodifica a medianoche.
pub mod time_of_day {
    use super::*;

    pub fn midnight() -> NaiveTime {
        NaiveTime::MIN
    }

    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(midnight()),
            Some(s) if s.is_empty() => Ok(midnight()),
            Some(s) => NaiveTime::parse_from_str(&s, "%H:%M:%S")
                .map_err(|_| D::Error::custom(format!("invalid time of day: {:?}", s))),
        }
    }
}

/// Lista de enteros con centinela: `"*any"` ↔ `[]`, `"1;2;3"` ↔ `[1,2,3]`.
///
/// Una lista nativa en el wire pasa sin cambios. La lista vacía significa
/// "sin restricción" y codifica al centinela.
pub mod any_or_list {
    use super::*;

    pub const ANY: &str = "*any";

    pub fn serialize<S>(value: &Vec<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_empty() {
            serializer.serialize_str(ANY)
        } else {
            let joined = value
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(";");
            serializer.serialize_str(&joined)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<u32>),
            Text(String),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(Repr::List(items)) => Ok(items),
            Some(Repr::Text(s)) if s.is_empty() || s == ANY => Ok(Vec::new()),
            Some(Repr::Text(s)) => s
                .split(';')
                .map(|part| {
                    part.parse::<u32>()
                        .map_err(|_| D::Error::custom(format!("invalid list entry: {:?}", part)))
                })
                .collect(),
        }
    }
}

/// Timestamp ISO8601 con offset (`%Y-%m-%dT%H:%M:%S%z`).
///
/// Formato canónico para SetupTime/AnswerTime de CDRs. La decodificación
/// también acepta RFC3339 estricto, que es lo que responde el servidor.
pub mod iso8601 {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%z").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse_datetime(&s).map(Some).map_err(D::Error::custom),
        }
    }
}

/// Timestamp RFC3339 con precisión de segundos y sufijo `Z`.
///
/// Formato canónico para ActivationTime y ExpirationDate.
pub mod rfc3339 {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse_datetime(&s).map(Some).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SecondsField {
        #[serde(with = "seconds")]
        value: Option<i64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ListField {
        #[serde(default, with = "any_or_list")]
        value: Vec<u32>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct StringField {
        #[serde(default, with = "empty_string")]
        value: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TimeField {
        #[serde(default = "time_of_day::midnight", with = "time_of_day")]
        value: NaiveTime,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct StampField {
        #[serde(default, with = "iso8601")]
        value: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_seconds_decode() {
        let field: SecondsField = serde_json::from_value(json!({"value": "60s"})).unwrap();
        assert_eq!(field.value, Some(60));

        let field: SecondsField = serde_json::from_value(json!({"value": ""})).unwrap();
        assert_eq!(field.value, None);

        let field: SecondsField = serde_json::from_value(json!({"value": null})).unwrap();
        assert_eq!(field.value, None);

        // un entero nativo en el wire pasa sin cambios
        let field: SecondsField = serde_json::from_value(json!({"value": 60})).unwrap();
        assert_eq!(field.value, Some(60));
    }

    #[test]
    fn test_seconds_decode_rejects_garbage() {
        let result = serde_json::from_value::<SecondsField>(json!({"value": "sixtys"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_seconds_encode() {
        let json = serde_json::to_value(SecondsField { value: Some(60) }).unwrap();
        assert_eq!(json, json!({"value": "60s"}));

        // la ausencia codifica como null, nunca como "Nones"
        let json = serde_json::to_value(SecondsField { value: None }).unwrap();
        assert_eq!(json, json!({"value": null}));
    }

    #[test]
    fn test_any_or_list_decode() {
        let field: ListField = serde_json::from_value(json!({"value": "*any"})).unwrap();
        assert_eq!(field.value, Vec::<u32>::new());

        let field: ListField = serde_json::from_value(json!({"value": "1;2;3"})).unwrap();
        assert_eq!(field.value, vec![1, 2, 3]);

        let field: ListField = serde_json::from_value(json!({"value": [4, 5]})).unwrap();
        assert_eq!(field.value, vec![4, 5]);

        let field: ListField = serde_json::from_value(json!({})).unwrap();
        assert_eq!(field.value, Vec::<u32>::new());
    }

    #[test]
    fn test_any_or_list_encode() {
        let json = serde_json::to_value(ListField { value: vec![] }).unwrap();
        assert_eq!(json, json!({"value": "*any"}));

        let json = serde_json::to_value(ListField { value: vec![1, 2, 3] }).unwrap();
        assert_eq!(json, json!({"value": "1;2;3"}));
    }

    #[test]
    fn test_empty_string_decode() {
        let field: StringField = serde_json::from_value(json!({"value": ""})).unwrap();
        assert_eq!(field.value, None);

        let field: StringField = serde_json::from_value(json!({"value": null})).unwrap();
        assert_eq!(field.value, None);

        let field: StringField = serde_json::from_value(json!({"value": "x"})).unwrap();
        assert_eq!(field.value, Some("x".to_string()));
    }

    #[test]
    fn test_time_of_day_encode_default() {
        let json = serde_json::to_value(TimeField {
            value: time_of_day::midnight(),
        })
        .unwrap();
        assert_eq!(json, json!({"value": "00:00:00"}));
    }

    #[test]
    fn test_time_of_day_decode() {
        let field: TimeField = serde_json::from_value(json!({"value": "08:30:00"})).unwrap();
        assert_eq!(field.value, NaiveTime::from_hms_opt(8, 30, 0).unwrap());

        let field: TimeField = serde_json::from_value(json!({})).unwrap();
        assert_eq!(field.value, time_of_day::midnight());
    }

    #[test]
    fn test_iso8601_round_trip() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(StampField { value: Some(stamp) }).unwrap();
        assert_eq!(json, json!({"value": "2024-03-01T12:30:00+0000"}));

        let back: StampField = serde_json::from_value(json).unwrap();
        assert_eq!(back.value, Some(stamp));
    }

    #[test]
    fn test_iso8601_accepts_rfc3339_reply() {
        let field: StampField =
            serde_json::from_value(json!({"value": "2024-03-01T12:30:00Z"})).unwrap();
        assert_eq!(
            field.value,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_rfc3339_encode() {
        #[derive(Serialize)]
        struct F {
            #[serde(with = "rfc3339")]
            value: Option<DateTime<Utc>>,
        }

        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(F { value: Some(stamp) }).unwrap();
        assert_eq!(json, json!({"value": "2024-03-01T12:30:00Z"}));
    }
}
