pub mod check;
pub mod discover;

use serde::Serialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
