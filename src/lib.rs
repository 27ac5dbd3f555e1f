//! apolo-cgrates: cliente tipado para la API JSON-RPC de CGRateS
//!
//! Este crate mapea objetos de facturación (CDRs, rates, cuentas, rating
//! plans, timings, acciones) al protocolo JSON-RPC del servidor de rating:
//! - `codec`: conversores de campo entre wire y tipos nativos (duraciones
//!   con sufijo, listas con centinela `*any`, hora del día, timestamps)
//! - `models`: esquemas declarativos de cada entidad (serde)
//! - `client`: cliente plano sobre un transporte JSON-RPC
//!
//! # Uso
//!
//! ```rust,ignore
//! use apolo_cgrates::{CgratesClient, models::Cdr};
//!
//! let client = CgratesClient::new(
//!     "http://127.0.0.1:2080/jsonrpc",
//!     "cgrates.org",
//!     5000,  // timeout_ms
//! )?;
//!
//! let destination = client.add_destination("DST_45", vec!["45".into()]).await?;
//!
//! let cdr = Cdr {
//!     account: Some("1001".into()),
//!     destination: Some("4512345678".into()),
//!     usage: Some("60s".into()),
//!     ..Cdr::voice()
//! };
//! client.rate_call(cdr).await?;
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod rpc;

pub use client::CgratesClient;
pub use config::Config;
pub use error::CgratesError;
pub use rpc::{HttpTransport, RpcReply, RpcTransport};
