//! Ingesta de CDRs externos (CdrsV2.ProcessExternalCDR)

use tracing::{info, instrument};

use super::CgratesClient;
use crate::error::CgratesError;
use crate::models::Cdr;

impl CgratesClient {
    /// Envía un CDR externo para tarificación.
    ///
    /// El cliente estampa el tenant antes de enviar. El servidor procesa la
    /// ingesta de forma asíncrona respecto al retorno de la llamada: un
    /// caller que necesite leer el CDR tarificado debe sondear; esa política
    /// pertenece a la aplicación, no a esta capa.
    #[instrument(skip(self, cdr), fields(origin_id = ?cdr.origin_id))]
    pub async fn rate_call(&self, mut cdr: Cdr) -> Result<(), CgratesError> {
        cdr.tenant = Some(self.tenant.clone());

        self.call_expect_ok("CdrsV2.ProcessExternalCDR", &cdr).await?;

        info!("CGRateS external CDR submitted: origin_id={:?}", cdr.origin_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{MockRpcTransport, RpcReply};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_rate_call_stamps_tenant() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call()
            .withf(|method, params| {
                method == "CdrsV2.ProcessExternalCDR"
                    && params[0]["Tenant"] == json!("tenant1")
                    && params[0]["ToR"] == json!("*voice")
                    && params[0]["Usage"] == json!("60s")
            })
            .returning(|_, _| {
                Ok(RpcReply {
                    result: Some(json!("OK")),
                    error: None,
                })
            });

        let client = CgratesClient::with_transport(Arc::new(mock), "tenant1");
        let cdr = Cdr {
            origin_id: Some("call-123".to_string()),
            account: Some("1001".to_string()),
            destination: Some("4512345678".to_string()),
            usage: Some("60s".to_string()),
            ..Cdr::voice()
        };

        assert!(client.rate_call(cdr).await.is_ok());
    }

    #[tokio::test]
    async fn test_rate_call_surfaces_rpc_error() {
        let mut mock = MockRpcTransport::new();
        mock.expect_call().returning(|_, _| {
            Ok(RpcReply {
                result: None,
                error: Some("MANDATORY_IE_MISSING: [ToR]".to_string()),
            })
        });

        let client = CgratesClient::with_transport(Arc::new(mock), "tenant1");
        let result = client.rate_call(Cdr::voice()).await;

        match result {
            Err(CgratesError::Rpc { method, message }) => {
                assert_eq!(method, "CdrsV2.ProcessExternalCDR");
                assert!(message.contains("MANDATORY_IE_MISSING"));
            }
            other => panic!("expected Rpc error, got {:?}", other),
        }
    }
}
