//! medcalc-calculators
//!
//! Clinical risk-score and dosing calculator definitions. Pure logic — each
//! calculator pairs a static field schema with a deterministic `evaluate`
//! function from the collected inputs to a structured result.

pub mod calculators;
pub mod error;

use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference};
use serde::Serialize;
use ts_rs::TS;

use error::CalculatorError;

/// Trait implemented by each calculator.
///
/// `evaluate` is referentially transparent: identical inputs always yield
/// the identical output, with no I/O, randomness, or clock reads. Required
/// fields are validated eagerly; once inputs are accepted the rest of the
/// computation cannot fail.
pub trait Calculator: Send + Sync {
    /// Unique identifier (e.g., "child_pugh", "meld_na").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Child-Pugh Score").
    fn name(&self) -> &str;

    /// The static form schema a host renders to collect inputs.
    fn fields(&self) -> &[FieldDescriptor];

    /// Bibliography shown alongside the result.
    fn references(&self) -> &[Reference];

    /// Map the collected inputs to a result, or a validation error.
    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError>;
}

/// Listing entry for a calculator, for host-side menus.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CalculatorInfo {
    pub id: String,
    pub name: String,
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::aast_liver::AastLiver),
        Box::new(calculators::aast_spleen::AastSpleen),
        Box::new(calculators::aast_kidney::AastKidney),
        Box::new(calculators::child_pugh::ChildPugh),
        Box::new(calculators::meld_na::MeldNa),
        Box::new(calculators::albi::Albi),
        Box::new(calculators::milan_ucsf::MilanUcsf),
        Box::new(calculators::wells_dvt::WellsDvt),
        Box::new(calculators::wells_pe::WellsPe),
        Box::new(calculators::acr_tirads::AcrTirads),
        Box::new(calculators::orads_us::OradsUs),
        Box::new(calculators::adrenal_ct_washout::AdrenalCtWashout),
        Box::new(calculators::adrenal_mri_csi::AdrenalMriCsi),
        Box::new(calculators::renal_nephrometry::RenalNephrometry),
        Box::new(calculators::prostate_volume::ProstateVolume),
        Box::new(calculators::ipss_prostate::IpssProstate),
        Box::new(calculators::shim::Shim),
        Box::new(calculators::radiation_dose::RadiationDose),
        Box::new(calculators::y90_dosimetry::Y90Dosimetry),
        Box::new(calculators::avs::Avs),
        Box::new(calculators::ipss::Ipss),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}

/// Look up a calculator by ID, erroring on an unknown one.
pub fn require_calculator(id: &str) -> Result<Box<dyn Calculator>, CalculatorError> {
    get_calculator(id).ok_or_else(|| CalculatorError::UnknownCalculator(id.to_string()))
}

/// Listing of every registered calculator, in registry order.
pub fn catalog() -> Vec<CalculatorInfo> {
    all_calculators()
        .iter()
        .map(|c| CalculatorInfo {
            id: c.id().to_string(),
            name: c.name().to_string(),
        })
        .collect()
}
