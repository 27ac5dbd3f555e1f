//! Operaciones de acciones y su calendarización (ApierV1)

use serde::Serialize;
use tracing::{info, instrument};

use super::CgratesClient;
use crate::error::CgratesError;
use crate::models::{Action, ActionPlan, ActionTrigger};

impl CgratesClient {
    /// Registra un grupo de acciones bajo `actions_id`.
    #[instrument(skip(self, actions))]
    pub async fn add_actions(
        &self,
        actions_id: &str,
        actions: Vec<Action>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct SetActionsArgs {
            #[serde(rename = "ActionsId")]
            actions_id: String,
            #[serde(rename = "Actions")]
            actions: Vec<Action>,
        }

        let args = SetActionsArgs {
            actions_id: actions_id.to_string(),
            actions,
        };

        self.call_expect_ok("ApierV1.SetActions", args).await?;

        info!("CGRateS actions set: id={}", actions_id);

        Ok(())
    }

    /// Registra un action plan y recarga el scheduler del servidor.
    #[instrument(skip(self, plans))]
    pub async fn add_action_plan(
        &self,
        action_plan_id: &str,
        plans: Vec<ActionPlan>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct SetActionPlanArgs {
            #[serde(rename = "Id")]
            id: String,
            #[serde(rename = "ActionPlan")]
            action_plan: Vec<ActionPlan>,
            #[serde(rename = "Overwrite")]
            overwrite: bool,
            #[serde(rename = "ReloadScheduler")]
            reload_scheduler: bool,
        }

        let args = SetActionPlanArgs {
            id: action_plan_id.to_string(),
            action_plan: plans,
            overwrite: true,
            reload_scheduler: true,
        };

        self.call_expect_ok("ApierV1.SetActionPlan", args).await?;

        info!("CGRateS action plan set: id={}", action_plan_id);

        Ok(())
    }

    /// Asocia disparadores de acciones a una cuenta del tenant.
    #[instrument(skip(self, triggers))]
    pub async fn add_account_action_triggers(
        &self,
        account: &str,
        triggers: Vec<ActionTrigger>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct SetAccountActionTriggersArgs {
            #[serde(rename = "Tenant")]
            tenant: String,
            #[serde(rename = "Account")]
            account: String,
            #[serde(rename = "ActionTriggers")]
            action_triggers: Vec<ActionTrigger>,
        }

        let args = SetAccountActionTriggersArgs {
            tenant: self.tenant.clone(),
            account: account.to_string(),
            action_triggers: triggers,
        };

        self.call_expect_ok("ApierV1.SetAccountActionTriggers", args)
            .await?;

        info!("CGRateS account action triggers set: account={}", account);

        Ok(())
    }
}
