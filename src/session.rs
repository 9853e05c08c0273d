//! Calculator session: one `InputSet` that is edited field by field.
//!
//! Every mutation recomputes the report synchronously and hands the new
//! snapshot to all subscribed observers. Edits are last-write-wins per field
//! and there are no transition rules.

use std::fmt;
use std::str::FromStr;

use crate::calculator::RatioCalculator;
use crate::config::RatioThresholds;
use crate::core::{Field, InputSet, RatioReport};

type Observer = Box<dyn FnMut(&InputSet, &RatioReport)>;

pub struct CalculatorSession {
    calculator: RatioCalculator,
    inputs: InputSet,
    report: RatioReport,
    observers: Vec<Observer>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorSession")
            .field("calculator", &self.calculator)
            .field("inputs", &self.inputs)
            .field("report", &self.report)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_thresholds(RatioThresholds::default())
    }

    pub fn with_thresholds(thresholds: RatioThresholds) -> Self {
        let calculator = RatioCalculator::new(thresholds);
        let inputs = InputSet::new();
        Self {
            report: calculator.compute(&inputs),
            calculator,
            inputs,
            observers: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    pub fn report(&self) -> &RatioReport {
        &self.report
    }

    pub fn thresholds(&self) -> &RatioThresholds {
        self.calculator.thresholds()
    }

    /// Register a callback invoked after every change.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&InputSet, &RatioReport) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Store an already-normalized value (or clear it with `None`).
    pub fn set(&mut self, field: Field, value: Option<f64>) -> &RatioReport {
        self.inputs.set(field, value);
        self.recompute()
    }

    /// Store raw entry text after passing it through the input boundary.
    pub fn set_raw(&mut self, field: Field, raw: &str) -> &RatioReport {
        self.set(field, field.accept(raw))
    }

    pub fn clear(&mut self, field: Field) -> &RatioReport {
        self.set(field, None)
    }

    pub fn reset(&mut self) -> &RatioReport {
        self.inputs = InputSet::new();
        self.recompute()
    }

    pub fn apply(&mut self, edit: &FieldEdit) -> &RatioReport {
        self.set_raw(edit.field, &edit.raw)
    }

    fn recompute(&mut self) -> &RatioReport {
        self.report = self.calculator.compute(&self.inputs);
        log::trace!("recomputed {:?} -> {:?}", self.inputs, self.report);
        for observer in self.observers.iter_mut() {
            observer(&self.inputs, &self.report);
        }
        &self.report
    }
}

/// A textual `field=value` edit. An empty value clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: Field,
    pub raw: String,
}

impl FromStr for FieldEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected field=value, got '{}'", s.trim()))?;
        Ok(FieldEdit {
            field: name.parse()?,
            raw: raw.trim().to_string(),
        })
    }
}
