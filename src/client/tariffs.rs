//! Operaciones de tarificación (ApierV1): destinations, rates,
//! destination rates, rating plans, rating profiles y timings.
//!
//! Las operaciones de tariff plan escriben en StorDB bajo el TPid del
//! cliente; `load_tariff_plan` las publica al motor de rating.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::CgratesClient;
use crate::error::CgratesError;
use crate::models::{Destination, DestinationRate, Rate, RatingPlan, RatingPlanActivation, Timing};

impl CgratesClient {
    /// Crea una Destination y devuelve el registro enviado.
    #[instrument(skip(self, prefixes))]
    pub async fn add_destination(
        &self,
        destination_id: &str,
        prefixes: Vec<String>,
    ) -> Result<Destination, CgratesError> {
        let destination = Destination {
            destination_id: destination_id.to_string(),
            prefixes,
        };

        self.call_expect_ok("ApierV1.SetDestination", &destination)
            .await?;

        info!("CGRateS destination set: id={}", destination_id);

        Ok(destination)
    }

    /// Obtiene una Destination por id.
    #[instrument(skip(self))]
    pub async fn get_destination(&self, destination_id: &str) -> Result<Destination, CgratesError> {
        self.call_api("ApierV1.GetDestination", destination_id).await
    }

    /// Elimina una Destination.
    #[instrument(skip(self))]
    pub async fn remove_destination(&self, destination_id: &str) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct RemoveArgs {
            #[serde(rename = "Tenant")]
            tenant: String,
            #[serde(rename = "ID")]
            id: String,
        }

        let args = RemoveArgs {
            tenant: self.tenant.clone(),
            id: destination_id.to_string(),
        };

        self.call_expect_ok("ApierV1.RemoveDestination", args).await
    }

    /// Crea un Rate con sus rate slots bajo el TPid del cliente.
    #[instrument(skip(self, slots))]
    pub async fn add_rates(&self, rate_id: &str, slots: Vec<Rate>) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct TPRateArgs {
            #[serde(rename = "TPid")]
            tp_id: String,
            #[serde(rename = "ID")]
            id: String,
            #[serde(rename = "RateSlots")]
            rate_slots: Vec<Rate>,
        }

        let args = TPRateArgs {
            tp_id: self.tariff_plan_id().to_string(),
            id: rate_id.to_string(),
            rate_slots: slots,
        };

        self.call_expect_ok("ApierV1.SetTPRate", args).await?;

        debug!("CGRateS rate set: id={}", rate_id);

        Ok(())
    }

    /// Asocia Rates a Destinations bajo un id de DestinationRate.
    #[instrument(skip(self, bindings))]
    pub async fn add_destination_rate(
        &self,
        destination_rate_id: &str,
        bindings: Vec<DestinationRate>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct TPDestinationRateArgs {
            #[serde(rename = "TPid")]
            tp_id: String,
            #[serde(rename = "ID")]
            id: String,
            #[serde(rename = "DestinationRates")]
            destination_rates: Vec<DestinationRate>,
        }

        let args = TPDestinationRateArgs {
            tp_id: self.tariff_plan_id().to_string(),
            id: destination_rate_id.to_string(),
            destination_rates: bindings,
        };

        self.call_expect_ok("ApierV1.SetTPDestinationRate", args)
            .await?;

        debug!("CGRateS destination rate set: id={}", destination_rate_id);

        Ok(())
    }

    /// Crea un RatingPlan con sus bindings DestinationRate/Timing.
    #[instrument(skip(self, bindings))]
    pub async fn add_rating_plan(
        &self,
        rating_plan_id: &str,
        bindings: Vec<RatingPlan>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct TPRatingPlanArgs {
            #[serde(rename = "TPid")]
            tp_id: String,
            #[serde(rename = "ID")]
            id: String,
            #[serde(rename = "RatingPlanBindings")]
            rating_plan_bindings: Vec<RatingPlan>,
        }

        let args = TPRatingPlanArgs {
            tp_id: self.tariff_plan_id().to_string(),
            id: rating_plan_id.to_string(),
            rating_plan_bindings: bindings,
        };

        self.call_expect_ok("ApierV1.SetTPRatingPlan", args).await?;

        debug!("CGRateS rating plan set: id={}", rating_plan_id);

        Ok(())
    }

    /// Activa rating plans bajo un rating profile (tenant/category/subject).
    #[instrument(skip(self, activations))]
    pub async fn set_rating_profile(
        &self,
        category: &str,
        subject: &str,
        activations: Vec<RatingPlanActivation>,
    ) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct RatingProfileArgs {
            #[serde(rename = "Tenant")]
            tenant: String,
            #[serde(rename = "Category")]
            category: String,
            #[serde(rename = "Subject")]
            subject: String,
            #[serde(rename = "RatingPlanActivations")]
            rating_plan_activations: Vec<RatingPlanActivation>,
        }

        let args = RatingProfileArgs {
            tenant: self.tenant.clone(),
            category: category.to_string(),
            subject: subject.to_string(),
            rating_plan_activations: activations,
        };

        self.call_expect_ok("ApierV1.SetRatingProfile", args).await?;

        info!("CGRateS rating profile set: subject={}", subject);

        Ok(())
    }

    /// Crea un Timing bajo el TPid del cliente.
    #[instrument(skip(self, timing), fields(timing_id = %timing.timing_id))]
    pub async fn add_timing(&self, timing: Timing) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct TPTimingArgs {
            #[serde(rename = "TPid")]
            tp_id: String,
            #[serde(flatten)]
            timing: Timing,
        }

        let args = TPTimingArgs {
            tp_id: self.tariff_plan_id().to_string(),
            timing,
        };

        self.call_expect_ok("ApierV1.SetTPTiming", args).await
    }

    /// Publica el tariff plan del cliente desde StorDB al motor de rating.
    #[instrument(skip(self))]
    pub async fn load_tariff_plan(&self, load_id: &str) -> Result<(), CgratesError> {
        #[derive(Serialize)]
        struct LoadTPArgs {
            #[serde(rename = "TPid")]
            tp_id: String,
            #[serde(rename = "LoadId")]
            load_id: String,
            #[serde(rename = "Validate")]
            validate: bool,
            #[serde(rename = "DryRun")]
            dry_run: bool,
        }

        let args = LoadTPArgs {
            tp_id: self.tariff_plan_id().to_string(),
            load_id: load_id.to_string(),
            validate: true,
            dry_run: false,
        };

        self.call_expect_ok("ApierV1.LoadTariffPlanFromStorDb", args)
            .await?;

        info!("CGRateS tariff plan loaded: tp_id={}", self.tariff_plan_id());

        Ok(())
    }
}
