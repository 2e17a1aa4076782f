use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Selects how a `Date` renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `3/4/2023`
    #[default]
    #[display(fmt = "standard")]
    Standard,
    /// `03/04/2023`, every field padded to at least two digits
    #[display(fmt = "two_digit")]
    TwoDigit,
    /// `March 4, 2023`
    #[display(fmt = "long")]
    Long,
}
