//! Integration tests for CAPEX estimation
//!
//! Tests cover:
//! - Itemized M1/M2/M3 sums and pre-aggregated totals
//! - Direct scenario-supplied CAPEX totals
//! - Override precedence on one-time cost fields
//! - Additivity of the category total

use gecom_cost_engine::{CapexOptions, CostEngine, CostFactor, SalesChannel, Scope};

/// Factor with a full set of one-time cost fields
fn create_entry_factor() -> CostFactor {
    CostFactor {
        company_registration_fee: Some(2000.0),
        business_license_fee: Some(500.0),
        tax_registration_fee: Some(300.0),
        legal_consulting_fee: Some(1200.0),
        product_testing_cost: Some(800.0),
        trademark_registration_fee: Some(400.0),
        warehouse_deposit: Some(3000.0),
        equipment_purchase_cost: Some(1500.0),
        initial_inventory_cost: Some(6000.0),
        system_setup_cost: Some(700.0),
        ..Default::default()
    }
}

fn create_scope() -> Scope {
    Scope::new(
        "DE",
        "home_goods",
        SalesChannel::DirectToConsumer,
        2.0,
        8.0,
        29.0,
        500.0,
    )
}

#[test]
fn test_itemized_categories() {
    let capex = CostEngine::new().calculate_capex(&create_entry_factor(), &create_scope(), None);

    assert_eq!(capex.m1_market_entry, 4000.0);
    assert_eq!(capex.m2_compliance, 1200.0);
    assert_eq!(capex.m3_supply_chain, 11200.0);
    assert_eq!(capex.total, 16400.0);
}

#[test]
fn test_pre_aggregated_totals_beat_itemized_sums() {
    let mut factor = create_entry_factor();
    factor.m2_estimated_cost = Some(950.0);
    factor.m3_total_estimated = Some(8000.0);

    let capex = CostEngine::new().calculate_capex(&factor, &create_scope(), None);
    assert_eq!(capex.m2_compliance, 950.0);
    assert_eq!(capex.m3_supply_chain, 8000.0);
}

#[test]
fn test_non_positive_pre_aggregates_fall_through() {
    let mut factor = create_entry_factor();
    factor.m2_estimated_cost = Some(0.0);
    factor.m3_total_estimated = Some(-1.0);

    let capex = CostEngine::new().calculate_capex(&factor, &create_scope(), None);
    assert_eq!(capex.m2_compliance, 1200.0);
    assert_eq!(capex.m3_supply_chain, 11200.0);
}

#[test]
fn test_scenario_supplied_totals_bypass_estimation() {
    let scope = create_scope().with_capex(CapexOptions {
        m1_market_entry: Some(5000.0),
        m2_compliance: None,
        m3_supply_chain: Some(9000.0),
    });

    let capex = CostEngine::new().calculate_capex(&create_entry_factor(), &scope, None);
    assert_eq!(capex.m1_market_entry, 5000.0);
    assert_eq!(capex.m2_compliance, 1200.0); // factor-estimated
    assert_eq!(capex.m3_supply_chain, 9000.0);
    assert_eq!(capex.total, 15200.0);
}

#[test]
fn test_scenario_zero_total_is_treated_as_absent() {
    // The wizard sends 0 for untouched inputs; that means "estimate it"
    let scope = create_scope().with_capex(CapexOptions {
        m1_market_entry: Some(0.0),
        ..Default::default()
    });

    let capex = CostEngine::new().calculate_capex(&create_entry_factor(), &scope, None);
    assert_eq!(capex.m1_market_entry, 4000.0);
}

#[test]
fn test_missing_fields_degrade_to_zero_silently() {
    let factor = CostFactor {
        company_registration_fee: Some(2000.0),
        ..Default::default()
    };
    let capex = CostEngine::new().calculate_capex(&factor, &create_scope(), None);
    assert_eq!(capex.m1_market_entry, 2000.0);
    assert_eq!(capex.m2_compliance, 0.0);
    assert_eq!(capex.m3_supply_chain, 0.0);
    assert_eq!(capex.total, 2000.0);
}

#[test]
fn test_overrides_apply_to_one_time_fields() {
    let overrides = CostFactor {
        legal_consulting_fee: Some(0.0), // explicit zero masks the factor
        warehouse_deposit: Some(10000.0),
        ..Default::default()
    };

    let capex =
        CostEngine::new().calculate_capex(&create_entry_factor(), &create_scope(), Some(&overrides));
    assert_eq!(capex.m1_market_entry, 2800.0);
    assert_eq!(capex.m3_supply_chain, 18200.0);
}

#[test]
fn test_total_is_sum_of_categories() {
    let factor = create_entry_factor();
    let capex = CostEngine::new().calculate_capex(&factor, &create_scope(), None);
    assert!(
        (capex.total - (capex.m1_market_entry + capex.m2_compliance + capex.m3_supply_chain)).abs()
            < 1e-9
    );
}
