//! Capability Gate
//!
//! Checks the environment's bill of materials before a category touches
//! endpoints that only exist when a product is provisioned.

use serde::Deserialize;

use crate::domain::value_objects::ProductType;
use crate::error::SweepResult;

use super::environment::TargetEnvironment;
use super::remote;
use super::retry::retry_on_permission_propagation;

#[derive(Debug, Deserialize)]
struct BillOfMaterials {
    #[serde(default)]
    products: Vec<BillOfMaterialsProduct>,
}

#[derive(Debug, Deserialize)]
struct BillOfMaterialsProduct {
    #[serde(rename = "type")]
    product_type: ProductType,
}

/// `Ok(false)` when the manifest exists but does not list `product`.
pub fn has_capability(
    env: &TargetEnvironment,
    label: &str,
    product: &ProductType,
) -> SweepResult<bool> {
    let path = env.path("billOfMaterials");
    let bom: BillOfMaterials = remote::execute(
        env.calls(),
        &format!("[{label}]-CHECKBOM"),
        retry_on_permission_propagation,
        || env.api().get(&path),
    )?;

    if bom.products.iter().any(|p| &p.product_type == product) {
        tracing::debug!(category = label, %product, "Found product in the bill of materials");
        return Ok(true);
    }

    tracing::debug!(
        category = label,
        %product,
        "Product cannot be found in the target environment's bill of materials"
    );
    Ok(false)
}
