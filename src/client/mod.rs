//! Cliente CGRateS
//!
//! Un único tipo de cliente con un handle de transporte; las operaciones se
//! agrupan por módulo según la API de origen:
//! - `accounts`: ApierV2/ApierV1 (cuentas y saldos)
//! - `tariffs`: ApierV1 (destinations, rates, rating plans, timings, profiles)
//! - `actions`: ApierV1 (acciones y action plans)
//! - `cdrs`: CdrsV2 (ingesta de CDRs)

mod accounts;
mod actions;
mod cdrs;
mod tariffs;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::CgratesError;
use crate::rpc::{HttpTransport, RpcTransport};

/// Centinela que devuelve el servidor cuando una mutación fue aceptada.
const OK: &str = "OK";

/// Centinela de error del servidor para recursos inexistentes.
const NOT_FOUND: &str = "NOT_FOUND";

/// Cliente para la API JSON-RPC de CGRateS.
pub struct CgratesClient {
    transport: Arc<dyn RpcTransport>,
    tenant: String,
    tariff_plan_id: String,
}

impl CgratesClient {
    /// Crea un cliente HTTP hacia `base_url` para el tenant dado.
    pub fn new(base_url: &str, tenant: &str, timeout_ms: u64) -> Result<Self, CgratesError> {
        let transport = HttpTransport::new(base_url, timeout_ms)?;
        Ok(Self::with_transport(Arc::new(transport), tenant))
    }

    /// Crea un cliente desde variables de entorno (ver [`Config::from_env`]).
    pub fn from_env() -> Result<Self, CgratesError> {
        let config = Config::from_env()?;
        Self::new(&config.url, &config.tenant, config.timeout_ms)
    }

    /// Crea un cliente sobre un transporte ya construido.
    pub fn with_transport(transport: Arc<dyn RpcTransport>, tenant: &str) -> Self {
        Self {
            transport,
            tenant: tenant.to_string(),
            tariff_plan_id: "apolo".to_string(),
        }
    }

    /// Cambia el TPid usado por las operaciones de tariff plan.
    pub fn with_tariff_plan(mut self, tariff_plan_id: &str) -> Self {
        self.tariff_plan_id = tariff_plan_id.to_string();
        self
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub(crate) fn tariff_plan_id(&self) -> &str {
        &self.tariff_plan_id
    }

    /// Llamada de consulta: el resultado se decodifica al registro esperado.
    ///
    /// - `error` no nulo con centinela NOT_FOUND → [`CgratesError::NotFound`]
    /// - `error` no nulo en otro caso → [`CgratesError::Rpc`]
    /// - resultado ausente → [`CgratesError::NotFound`]
    pub(crate) async fn call_api<T, R>(&self, method: &str, params: T) -> Result<R, CgratesError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params)
            .map_err(|e| CgratesError::Validation(format!("{}: {}", method, e)))?;

        let reply = self.transport.call(method, vec![params]).await?;

        if let Some(error) = reply.error {
            if error.contains(NOT_FOUND) {
                return Err(CgratesError::NotFound {
                    method: method.to_string(),
                });
            }
            return Err(CgratesError::Rpc {
                method: method.to_string(),
                message: error,
            });
        }

        match reply.result {
            Some(result) => serde_json::from_value(result)
                .map_err(|e| CgratesError::Validation(format!("{}: {}", method, e))),
            None => Err(CgratesError::NotFound {
                method: method.to_string(),
            }),
        }
    }

    /// Llamada de mutación: el servidor debe responder el centinela "OK".
    pub(crate) async fn call_expect_ok<T>(&self, method: &str, params: T) -> Result<(), CgratesError>
    where
        T: Serialize,
    {
        let reply: String = self.call_api(method, params).await?;

        if reply != OK {
            return Err(CgratesError::MutationRejected {
                method: method.to_string(),
                reply,
            });
        }

        debug!("CGRateS mutation accepted: method={}", method);

        Ok(())
    }

    /// Verifica la conectividad con CGRateS.
    pub async fn ping(&self) -> Result<bool, CgratesError> {
        #[derive(Serialize)]
        struct PingArgs {}

        let result: String = self.call_api("CoreSv1.Ping", PingArgs {}).await?;
        Ok(result == "Pong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{MockRpcTransport, RpcReply};
    use serde_json::json;

    fn client_with(mock: MockRpcTransport) -> CgratesClient {
        CgratesClient::with_transport(Arc::new(mock), "tenant1")
    }

    #[tokio::test]
    async fn test_rpc_error_carries_method_and_message() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call().returning(|_, _| {
            Ok(RpcReply {
                result: None,
                error: Some("SERVER_ERROR".to_string()),
            })
        });

        let client = client_with(mock);
        let result: Result<String, _> = client.call_api("ApierV1.GetDestination", "DST_45").await;

        match result {
            Err(CgratesError::Rpc { method, message }) => {
                assert_eq!(method, "ApierV1.GetDestination");
                assert_eq!(message, "SERVER_ERROR");
            }
            other => panic!("expected Rpc error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_not_found_sentinel_maps_to_not_found() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call().returning(|_, _| {
            Ok(RpcReply {
                result: None,
                error: Some("NOT_FOUND".to_string()),
            })
        });

        let client = client_with(mock);
        let result: Result<String, _> = client.call_api("ApierV2.GetAccount", json!({})).await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_empty_result_on_lookup_maps_to_not_found() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call().returning(|_, _| {
            Ok(RpcReply {
                result: None,
                error: None,
            })
        });

        let client = client_with(mock);
        let result: Result<String, _> = client.call_api("ApierV2.GetAccount", json!({})).await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_mutation_rejected_on_non_ok_reply() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call().returning(|_, _| {
            Ok(RpcReply {
                result: Some(json!("EXISTS")),
                error: None,
            })
        });

        let client = client_with(mock);
        let result = client.call_expect_ok("ApierV2.SetAccount", json!({})).await;

        match result {
            Err(CgratesError::MutationRejected { method, reply }) => {
                assert_eq!(method, "ApierV2.SetAccount");
                assert_eq!(reply, "EXISTS");
            }
            other => panic!("expected MutationRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call()
            .withf(|method, _| method == "CoreSv1.Ping")
            .returning(|_, _| {
                Ok(RpcReply {
                    result: Some(json!("Pong")),
                    error: None,
                })
            });

        let client = client_with(mock);
        assert!(client.ping().await.unwrap());
    }
}
