mod helpers;
mod profile;
mod shell;
mod target;
mod weight;
mod workout;

pub(crate) use shell::cmd_shell;
pub(crate) use target::cmd_bmr;
pub(crate) use workout::cmd_plan;
