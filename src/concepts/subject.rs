

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};


/// Topic category selecting a keyword table and an input file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Subject {
    #[value(name = "ancient_history")]
    AncientHistory,
    #[value(name = "math")]
    Math,
    #[value(name = "physics")]
    Physics,
    #[value(name = "economics")]
    Economics,
}
