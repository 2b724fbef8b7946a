//! DaVinci forms.
//!
//! Forms carry no default flag, so every matching form is a candidate.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::SweepResult;

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_FORM_NAMES: &[&str] = &[
    "Example - Password Recovery",
    "Example - Password Recovery User Lookup",
    "Example - Password Reset",
    "Example - Registration",
    "Example - Sign On",
];

#[derive(Debug, Deserialize)]
struct Form {
    id: String,
    name: String,
}

pub(super) fn sweep_forms(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("forms", "forms", |form: &Form| {
        (
            ConfigItem::new(&form.name, &form.id),
            run.delete_call("forms", &form.id),
        )
    })
}
