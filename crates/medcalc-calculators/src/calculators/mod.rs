pub mod aast_kidney;
pub mod aast_liver;
pub mod aast_spleen;
pub mod acr_tirads;
pub mod adrenal_ct_washout;
pub mod adrenal_mri_csi;
pub mod albi;
pub mod avs;
pub mod child_pugh;
pub mod ipss;
pub mod ipss_prostate;
pub mod meld_na;
pub mod milan_ucsf;
pub mod orads_us;
pub mod prostate_volume;
pub mod radiation_dose;
pub mod renal_nephrometry;
pub mod shim;
pub mod wells_dvt;
pub mod wells_pe;
pub mod y90_dosimetry;

use medcalc_core::{InputError, Inputs};

/// Roman numeral for an AAST organ-injury grade (1–5).
pub(crate) fn grade_roman(grade: u8) -> &'static str {
    match grade {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        _ => "V",
    }
}

/// Points for a Likert-style questionnaire item whose options carry the
/// numeric point value directly.
pub(crate) fn scale_points(
    inputs: &Inputs,
    id: &str,
    min: u32,
    max: u32,
) -> Result<u32, InputError> {
    let raw = inputs.text(id)?;
    match raw.parse::<u32>() {
        Ok(v) if v >= min && v <= max => Ok(v),
        _ => Err(InputError::InvalidValue {
            field: id.to_string(),
            message: format!("unknown option '{raw}'"),
        }),
    }
}
