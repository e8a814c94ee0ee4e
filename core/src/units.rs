pub const KG_PER_LB: f64 = 0.453_592;
pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: i32 = 12;

#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

#[must_use]
pub fn feet_inches_to_cm(feet: i32, inches: i32) -> f64 {
    f64::from(feet * INCHES_PER_FOOT + inches) * CM_PER_INCH
}

/// Split a metric height back into whole feet and remaining inches for display.
///
/// The total is rounded to the nearest inch first, so heights entered in
/// imperial units come back out unchanged despite float error in the cm value.
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> (i32, i32) {
    let total_inches = (cm / CM_PER_INCH).round() as i32;
    (
        total_inches.div_euclid(INCHES_PER_FOOT),
        total_inches.rem_euclid(INCHES_PER_FOOT),
    )
}
