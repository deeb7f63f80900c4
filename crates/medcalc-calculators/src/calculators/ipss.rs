use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Inferior petrosal sinus sampling interpretation for ACTH-dependent
/// Cushing syndrome.
///
/// Staged: optional prolactin-normalized catheter validation, then the
/// central-to-peripheral ACTH gradient (>=2 basal or >=3 post-CRH =
/// Cushing disease), then intersinus lateralization (>=1.4) only when a
/// central gradient exists.
pub struct Ipss;

const BASAL_CENTRAL_RATIO: f64 = 2.0;
const POST_CRH_CENTRAL_RATIO: f64 = 3.0;
const INTERSINUS_RATIO: f64 = 1.4;
const PROLACTIN_VALIDATION_RATIO: f64 = 1.8;

const ACTH_MAX: f64 = 100000.0;

impl Calculator for Ipss {
    fn id(&self) -> &str {
        "ipss"
    }

    fn name(&self) -> &str {
        "Inferior Petrosal Sinus Sampling (IPSS)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number(
                    "peripheral_acth",
                    "Basal peripheral ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                ),
                FieldDescriptor::number(
                    "left_ips_acth",
                    "Basal left IPS ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                ),
                FieldDescriptor::number(
                    "right_ips_acth",
                    "Basal right IPS ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                ),
                FieldDescriptor::checkbox("crh_administered", "CRH (or desmopressin) administered"),
                FieldDescriptor::number(
                    "post_peripheral_acth",
                    "Post-CRH peripheral ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                )
                .show_if("crh_administered", &["true"]),
                FieldDescriptor::number(
                    "post_left_ips_acth",
                    "Post-CRH left IPS ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                )
                .show_if("crh_administered", &["true"]),
                FieldDescriptor::number(
                    "post_right_ips_acth",
                    "Post-CRH right IPS ACTH",
                    "pg/mL",
                    0.1,
                    ACTH_MAX,
                )
                .show_if("crh_administered", &["true"]),
                FieldDescriptor::number(
                    "peripheral_prolactin",
                    "Peripheral prolactin (optional)",
                    "ng/mL",
                    0.1,
                    ACTH_MAX,
                ),
                FieldDescriptor::number(
                    "left_ips_prolactin",
                    "Left IPS prolactin (optional)",
                    "ng/mL",
                    0.1,
                    ACTH_MAX,
                ),
                FieldDescriptor::number(
                    "right_ips_prolactin",
                    "Right IPS prolactin (optional)",
                    "ng/mL",
                    0.1,
                    ACTH_MAX,
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![
                Reference::new(
                    "Oldfield EH, Doppman JL, Nieman LK, et al. Petrosal sinus sampling with and without corticotropin-releasing hormone for the differential diagnosis of Cushing's syndrome. N Engl J Med. 1991;325(13):897-905.",
                    "https://doi.org/10.1056/NEJM199109263251301",
                ),
                Reference::new(
                    "Findling JW, Kehoe ME, Raff H. Identification of patients with Cushing's disease with negative pituitary adrenocorticotropin gradients during inferior petrosal sinus sampling: prolactin as an index of pituitary venous effluent. J Clin Endocrinol Metab. 2004;89(12):6005-6009.",
                    "https://doi.org/10.1210/jc.2004-1131",
                ),
            ]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let peripheral = inputs.number_in("peripheral_acth", 0.1, ACTH_MAX)?;
        let left = inputs.number_in("left_ips_acth", 0.1, ACTH_MAX)?;
        let right = inputs.number_in("right_ips_acth", 0.1, ACTH_MAX)?;

        let crh = inputs.flag("crh_administered")?;
        let post = if crh {
            let condition = "CRH was administered";
            Some((
                inputs.number_when("post_peripheral_acth", condition, 0.1, ACTH_MAX)?,
                inputs.number_when("post_left_ips_acth", condition, 0.1, ACTH_MAX)?,
                inputs.number_when("post_right_ips_acth", condition, 0.1, ACTH_MAX)?,
            ))
        } else {
            None
        };

        let mut out = Output::new();

        // Stage 1: prolactin-normalized catheter validation, when supplied.
        let p_prl = inputs.opt_number_in("peripheral_prolactin", 0.1, ACTH_MAX)?;
        let l_prl = inputs.opt_number_in("left_ips_prolactin", 0.1, ACTH_MAX)?;
        let r_prl = inputs.opt_number_in("right_ips_prolactin", 0.1, ACTH_MAX)?;
        match (p_prl, l_prl, r_prl) {
            (Some(p), l, r) if l.is_some() || r.is_some() => {
                let best = l.unwrap_or(0.0).max(r.unwrap_or(0.0));
                let ratio = best / p;
                out = out.push("Prolactin IPS:peripheral ratio", format!("{ratio:.1}"));
                if ratio < PROLACTIN_VALIDATION_RATIO {
                    return Ok(out
                        .push("Catheter position", "NOT CONFIRMED")
                        .warning(
                            "Sampling validity",
                            format!(
                                "Prolactin ratio <{PROLACTIN_VALIDATION_RATIO}: catheters may not sample pituitary effluent; ACTH gradients are not interpretable"
                            ),
                        )
                        .with_severity(Severity::Warning));
                }
                out = out.push("Catheter position", "Confirmed by prolactin");
            }
            _ => {
                out = out.note(
                    "Catheter position",
                    "Not verified (no prolactin values supplied)",
                );
            }
        }

        // Stage 2: central-to-peripheral ACTH gradient.
        let basal_ratio = left.max(right) / peripheral;
        out = out.push("Basal IPS:peripheral ratio", format!("{basal_ratio:.1}"));
        let mut central = basal_ratio >= BASAL_CENTRAL_RATIO;
        if let Some((p, l, r)) = post {
            let post_ratio = l.max(r) / p;
            out = out.push("Post-CRH IPS:peripheral ratio", format!("{post_ratio:.1}"));
            central = central || post_ratio >= POST_CRH_CENTRAL_RATIO;
        }

        if !central {
            return Ok(out
                .push("Diagnosis", "No central gradient")
                .note(
                    "Interpretation",
                    "Consistent with an ectopic ACTH source; pursue cross-sectional imaging",
                )
                .with_severity(Severity::Warning));
        }
        out = out.push("Diagnosis", "Central gradient present - Cushing disease");

        // Stage 3: intersinus lateralization, post-CRH values when available.
        let (l_lat, r_lat) = match post {
            Some((_, l, r)) => (l, r),
            None => (left, right),
        };
        let (side, ratio) = if l_lat >= r_lat {
            ("left", l_lat / r_lat)
        } else {
            ("right", r_lat / l_lat)
        };
        out = out.push("Intersinus ratio", format!("{ratio:.1}"));
        out = if ratio >= INTERSINUS_RATIO {
            out.push("Lateralization", format!("Suggests a {side}-sided adenoma"))
                .note(
                    "Caveat",
                    "Intersinus lateralization is ~70% accurate; correlate with MRI",
                )
        } else {
            out.push("Lateralization", "No lateralization (ratio <1.4)")
        };
        Ok(out.with_severity(Severity::Info))
    }
}
