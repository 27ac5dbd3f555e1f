//! Operaciones de cuentas y saldos (ApierV2 / ApierV1)

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use super::CgratesClient;
use crate::error::CgratesError;
use crate::models::{balance_types, Account};

#[derive(Serialize)]
struct GetAccountsArgs {
    #[serde(rename = "Tenant")]
    tenant: String,
}

#[derive(Serialize)]
struct GetAccountArgs {
    #[serde(rename = "Tenant")]
    tenant: String,
    #[serde(rename = "Account")]
    account: String,
}

impl CgratesClient {
    /// Lista las cuentas del tenant.
    ///
    /// Los ids compuestos `tenant:account` se normalizan igual que en la
    /// consulta individual.
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> Result<Vec<Account>, CgratesError> {
        let args = GetAccountsArgs {
            tenant: self.tenant.clone(),
        };

        let accounts: Vec<Account> = self.call_api("ApierV2.GetAccounts", args).await?;

        Ok(accounts
            .into_iter()
            .map(Account::strip_tenant_prefix)
            .collect())
    }

    /// Obtiene una cuenta por id, con el prefijo de tenant ya descartado.
    #[instrument(skip(self))]
    pub async fn get_account(&self, account: &str) -> Result<Account, CgratesError> {
        let args = GetAccountArgs {
            tenant: self.tenant.clone(),
            account: account.to_string(),
        };

        let account: Account = self.call_api("ApierV2.GetAccount", args).await?;

        Ok(account.strip_tenant_prefix())
    }

    /// Crea o actualiza una cuenta y la vuelve a leer del servidor.
    #[instrument(skip(self))]
    pub async fn add_account(
        &self,
        account: &str,
        action_plan_id: &str,
        action_trigger_id: &str,
        allow_negative: bool,
    ) -> Result<Account, CgratesError> {
        #[derive(Serialize)]
        struct SetAccountArgs {
            #[serde(rename = "Tenant")]
            tenant: String,
            #[serde(rename = "Account")]
            account: String,
            #[serde(rename = "ActionPlanID")]
            action_plan_id: String,
            #[serde(rename = "ActionPlansOverwrite")]
            action_plans_overwrite: bool,
            #[serde(rename = "ActionTriggerID")]
            action_trigger_id: String,
            #[serde(rename = "ActionTriggerOverwrite")]
            action_trigger_overwrite: bool,
            #[serde(rename = "AllowNegative")]
            allow_negative: bool,
            #[serde(rename = "Disabled")]
            disabled: bool,
            #[serde(rename = "ReloadScheduler")]
            reload_scheduler: bool,
        }

        let args = SetAccountArgs {
            tenant: self.tenant.clone(),
            account: account.to_string(),
            action_plan_id: action_plan_id.to_string(),
            action_plans_overwrite: true,
            action_trigger_id: action_trigger_id.to_string(),
            action_trigger_overwrite: true,
            allow_negative,
            disabled: false,
            reload_scheduler: true,
        };

        self.call_expect_ok("ApierV2.SetAccount", args).await?;

        info!("CGRateS account created/updated: account={}", account);

        self.get_account(account).await
    }

    /// Elimina una cuenta.
    #[instrument(skip(self))]
    pub async fn remove_account(&self, account: &str) -> Result<(), CgratesError> {
        let args = GetAccountArgs {
            tenant: self.tenant.clone(),
            account: account.to_string(),
        };

        self.call_expect_ok("ApierV1.RemoveAccount", args).await?;

        info!("CGRateS account removed: account={}", account);

        Ok(())
    }

    /// Establece el balance monetario de una cuenta (sobrescribe).
    #[instrument(skip(self))]
    pub async fn set_balance(&self, account: &str, amount: Decimal) -> Result<(), CgratesError> {
        let args = BalanceArgs::monetary(&self.tenant, account, amount);

        self.call_expect_ok("ApierV1.SetBalance", args).await?;

        info!("CGRateS balance set: account={}, balance={}", account, amount);

        Ok(())
    }

    /// Agrega balance monetario a una cuenta (topup).
    #[instrument(skip(self))]
    pub async fn add_balance(&self, account: &str, amount: Decimal) -> Result<(), CgratesError> {
        let args = BalanceArgs::monetary(&self.tenant, account, amount);

        self.call_expect_ok("ApierV1.AddBalance", args).await?;

        info!("CGRateS balance added: account={}, amount={}", account, amount);

        Ok(())
    }

    /// Descuenta balance monetario de una cuenta.
    #[instrument(skip(self))]
    pub async fn debit_balance(&self, account: &str, amount: Decimal) -> Result<(), CgratesError> {
        let args = BalanceArgs::monetary(&self.tenant, account, -amount);

        self.call_expect_ok("ApierV1.AddBalance", args).await?;

        info!("CGRateS balance debited: account={}, amount={}", account, amount);

        Ok(())
    }
}

#[derive(Serialize)]
struct BalanceArgs {
    #[serde(rename = "Tenant")]
    tenant: String,
    #[serde(rename = "Account")]
    account: String,
    #[serde(rename = "BalanceType")]
    balance_type: String,
    #[serde(rename = "Value")]
    value: f64,
}

impl BalanceArgs {
    fn monetary(tenant: &str, account: &str, amount: Decimal) -> Self {
        BalanceArgs {
            tenant: tenant.to_string(),
            account: account.to_string(),
            balance_type: balance_types::MONETARY.to_string(),
            value: amount.to_string().parse().unwrap_or(0.0),
        }
    }
}
