use anyhow::Result;
use std::io::{BufRead, Write};

use fitcalc_core::models::WeightLogEntry;
use fitcalc_core::session::Session;
use fitcalc_core::units::lb_to_kg;

use super::helpers::Prompter;

pub(crate) fn log_weight<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<()> {
    let date = p.ask_date("Enter the date (yyyy-mm-dd): ")?;
    let weight_lb: f64 = p.ask_parsed("Enter your weight in pounds: ")?;
    let calories_kcal: f64 = p.ask_parsed("Enter your daily calorie intake (kcal): ")?;

    session.log_weight(WeightLogEntry {
        date,
        weight_kg: lb_to_kg(weight_lb),
        calories_kcal,
    });
    Ok(())
}

pub(crate) fn view_weight_logs<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &Session,
) -> Result<()> {
    p.say("")?;
    p.say_all(&session.weight_log().render_table())
}
