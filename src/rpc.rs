use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::AccountView;

const JSONRPC_VERSION: &str = "2.0";
const REQUEST_ID: &str = "dontcare";
const FINALITY: &str = "final";
const CONTRACT_EXECUTION_ERROR: &str = "CONTRACT_EXECUTION_ERROR";

/// Thin JSON-RPC client for a NEAR node. Only read-only `query` calls.
#[derive(Clone)]
pub struct NearRpc {
    api_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    name: Option<String>,
    message: Option<String>,
    cause: Option<Value>,
    data: Option<Value>,
}

impl RpcErrorBody {
    fn cause_name(&self) -> Option<&str> {
        self.cause
            .as_ref()
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
    }

    fn detail(&self) -> String {
        if let Some(info) = self
            .cause
            .as_ref()
            .and_then(|c| c.get("info"))
            .and_then(|i| i.get("vm_error"))
            .and_then(Value::as_str)
        {
            return info.to_string();
        }
        match &self.data {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => self.message.clone().unwrap_or_default(),
        }
    }
}

/// `call_function` query result. Older nodes report contract panics in
/// `error` instead of a JSON-RPC error object.
#[derive(Deserialize)]
struct CallResult {
    #[serde(default)]
    result: Vec<u8>,
    #[serde(default)]
    logs: Vec<String>,
    error: Option<String>,
}

impl NearRpc {
    pub fn new(api_url: &str) -> Self {
        Self::with_client(api_url, reqwest::Client::new())
    }

    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(api_url, client))
    }

    pub fn with_client(api_url: &str, client: reqwest::Client) -> Self {
        Self {
            api_url: crate::utils::remove_trailing_slash(api_url),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn send(&self, method: &str, params: Value) -> Result<Value> {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        };
        let response = self.client.post(&self.api_url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: RpcResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(Error::Rpc {
                    name: format!("HTTP_{}", status.as_u16()),
                    message: body,
                })
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(err) = parsed.error {
            let name = err
                .cause_name()
                .or(err.name.as_deref())
                .unwrap_or("UNKNOWN_ERROR")
                .to_string();
            return Err(Error::Rpc {
                name,
                message: err.detail(),
            });
        }
        parsed.result.ok_or_else(|| Error::Rpc {
            name: "EMPTY_RESPONSE".to_string(),
            message: "response carried neither result nor error".to_string(),
        })
    }

    /// Call a view method on `account_id` and decode its JSON return value.
    pub async fn call_function<A, T>(&self, account_id: &str, method_name: &str, args: &A) -> Result<T>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let args_base64 = BASE64_STANDARD.encode(serde_json::to_vec(args)?);
        debug!(account_id, method_name, "call_function");

        let params = serde_json::json!({
            "request_type": "call_function",
            "finality": FINALITY,
            "account_id": account_id,
            "method_name": method_name,
            "args_base64": args_base64,
        });
        let value = match self.send("query", params).await {
            Err(Error::Rpc { name, message }) if name == CONTRACT_EXECUTION_ERROR => {
                return Err(Error::Contract {
                    method: method_name.to_string(),
                    message,
                })
            }
            other => other?,
        };

        let call: CallResult = serde_json::from_value(value)?;
        if let Some(message) = call.error {
            return Err(Error::Contract {
                method: method_name.to_string(),
                message,
            });
        }
        for log in &call.logs {
            debug!(method_name, log = log.as_str(), "contract log");
        }
        Ok(serde_json::from_slice(&call.result)?)
    }

    pub async fn view_account(&self, account_id: &str) -> Result<AccountView> {
        debug!(account_id, "view_account");
        let params = serde_json::json!({
            "request_type": "view_account",
            "finality": FINALITY,
            "account_id": account_id,
        });
        let value = self.send("query", params).await?;
        Ok(serde_json::from_value(value)?)
    }
}
