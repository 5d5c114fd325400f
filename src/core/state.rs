use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::formulas::trigger_accident;
use super::input::{InputError, LifeField, build_installment};
use super::pipeline::{Clock, SystemClock, recalculate};
use super::types::{AccidentKind, AccidentOutcome, ComputedCache, Installment, LifeInputs};

/// The one snapshot of a person's inputs together with the outputs derived
/// from them. Every mutation recomputes before returning, so the computed
/// cache can never be read stale.
#[derive(Debug, Clone)]
pub struct LifeState {
    inputs: LifeInputs,
    computed: ComputedCache,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot<'a> {
    pub inputs: &'a LifeInputs,
    pub computed: &'a ComputedCache,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentSimulation {
    #[serde(flatten)]
    pub outcome: AccidentOutcome,
    pub exceeds_cash: bool,
}

impl Default for LifeState {
    fn default() -> Self {
        Self::new(LifeInputs::default())
    }
}

impl LifeState {
    pub fn new(inputs: LifeInputs) -> Self {
        Self::with_clock(inputs, Arc::new(SystemClock))
    }

    pub fn with_clock(inputs: LifeInputs, clock: Arc<dyn Clock>) -> Self {
        let computed = recalculate(&inputs, clock.months_remaining());
        Self {
            inputs,
            computed,
            clock,
        }
    }

    pub fn inputs(&self) -> &LifeInputs {
        &self.inputs
    }

    pub fn computed(&self) -> &ComputedCache {
        &self.computed
    }

    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            inputs: &self.inputs,
            computed: &self.computed,
        }
    }

    /// Overwrites the whole computed cache from the current inputs.
    pub fn recalculate_all(&mut self) -> &ComputedCache {
        self.computed = recalculate(&self.inputs, self.clock.months_remaining());
        &self.computed
    }

    pub fn get(&self, field: LifeField) -> f64 {
        self.inputs.get(field)
    }

    pub fn set(&mut self, field: LifeField, value: f64) -> Result<&ComputedCache, InputError> {
        self.apply(&[(field, value)])
    }

    /// Validates every update first; nothing is written unless all of them
    /// pass.
    pub fn apply(&mut self, updates: &[(LifeField, f64)]) -> Result<&ComputedCache, InputError> {
        for &(field, value) in updates {
            if let Err(err) = field.validate(value) {
                warn!(%field, value, "rejected input: {err}");
                return Err(err);
            }
        }
        for &(field, value) in updates {
            self.inputs.assign(field, value);
        }
        Ok(self.recalculate_all())
    }

    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<&ComputedCache, InputError> {
        let field: LifeField = name.parse()?;
        let value = field.parse_value(raw).inspect_err(|err| {
            warn!(%field, raw, "rejected input: {err}");
        })?;
        self.set(field, value)
    }

    pub fn add_installment(
        &mut self,
        name: &str,
        monthly_amount: f64,
        months_left: f64,
    ) -> Result<&ComputedCache, InputError> {
        let installment = build_installment(name, monthly_amount, months_left)
            .inspect_err(|err| warn!("rejected installment: {err}"))?;
        self.inputs.installments.push(installment);
        Ok(self.recalculate_all())
    }

    /// Removes the installment at `index`. An index past the end leaves the
    /// sequence untouched and yields `None`.
    pub fn remove_installment(&mut self, index: usize) -> Option<Installment> {
        if index >= self.inputs.installments.len() {
            return None;
        }
        let removed = self.inputs.installments.remove(index);
        self.recalculate_all();
        Some(removed)
    }

    pub fn clear_installments(&mut self) -> &ComputedCache {
        self.inputs.installments.clear();
        self.recalculate_all()
    }

    pub fn reset(&mut self) -> &ComputedCache {
        info!("resetting life state to defaults");
        self.inputs = LifeInputs::default();
        self.recalculate_all()
    }

    pub fn simulate_accident(&self, kind: AccidentKind) -> AccidentSimulation {
        let outcome = trigger_accident(
            kind,
            self.computed.health_penalty_score,
            &self.inputs.insurance,
        );
        AccidentSimulation {
            outcome,
            exceeds_cash: outcome.out_of_pocket_cost > self.inputs.current_cash,
        }
    }
}
