//! Transporte JSON-RPC hacia CGRateS
//!
//! Proporciona la comunicación de bajo nivel con el servidor. La capa de
//! modelos no conoce HTTP: solo ve el contrato `call(method, params)`
//! devolviendo el par (result, error) tal como lo emite el servidor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::CgratesError;

/// Request JSON-RPC
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

/// Response JSON-RPC
///
/// CGRateS expone la API vía net/rpc de Go: `error` es un string plano
/// (ej. "NOT_FOUND"), no un objeto con código.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    pub result: Option<Value>,
    pub error: Option<String>,
    #[serde(default)]
    pub id: u64,
}

/// Par (result, error) de una llamada, ya desenvuelto del envelope.
#[derive(Debug)]
pub struct RpcReply {
    pub result: Option<Value>,
    pub error: Option<String>,
}

/// Contrato del colaborador de transporte.
///
/// Una implementación entrega el request al servidor y devuelve el par
/// (result, error) del envelope; las fallas de transporte (conexión, HTTP,
/// timeout, body ilegible) son `Err`. El mapeo de `error`/`result` a
/// condiciones de dominio pertenece al cliente, no al transporte.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcReply, CgratesError>;
}

/// Transporte HTTP (reqwest) contra el endpoint JSON-RPC de CGRateS.
pub struct HttpTransport {
    http_client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
    request_id: AtomicU64,
}

impl HttpTransport {
    /// Crea un transporte hacia `base_url` (ej: "http://127.0.0.1:2080/jsonrpc").
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, CgratesError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| CgratesError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.to_string(),
            timeout_ms,
            request_id: AtomicU64::new(1),
        })
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcReply, CgratesError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: self.next_id(),
        };

        debug!("CGRateS request: method={}, id={}", method, request.id);

        let response = self
            .http_client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CgratesError::Timeout(self.timeout_ms)
                } else {
                    CgratesError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("CGRateS HTTP error: status={}", status);
            return Err(CgratesError::Http(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CgratesError::Parse(format!("Failed to read response body: {}", e)))?;

        debug!("CGRateS response: {}", body);

        let rpc_response: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            CgratesError::Parse(format!("Failed to parse JSON: {} - Body: {}", e, body))
        })?;

        Ok(RpcReply {
            result: rpc_response.result,
            error: rpc_response.error,
        })
    }
}
