mod check;
mod new;
mod set;
mod show;

pub use check::{check, CheckArgs};
pub use new::{new, NewArgs};
pub use set::{set, SetArgs};
pub use show::{show, ShowArgs};
