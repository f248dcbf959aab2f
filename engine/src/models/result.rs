//! Engine output
//!
//! The structured cost result consumed by the UI, the cross-country
//! scorer, and the chat-assistant tool handler. All values are USD or
//! fractions; KPI fields may carry `Infinity` sentinels for loss-making
//! scenarios.

use serde::{Deserialize, Serialize};

/// One-time market-entry capital expenditure, by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapexBreakdown {
    /// M1: company setup (registration, licensing, tax, legal)
    pub m1_market_entry: f64,

    /// M2: compliance (testing, trademark)
    pub m2_compliance: f64,

    /// M3: supply-chain setup (warehouse, equipment, inventory, systems)
    pub m3_supply_chain: f64,

    /// Sum of the three categories
    pub total: f64,
}

/// Per-unit recurring operating cost, ten named lines plus their sum
///
/// Field prefixes follow the dataset's module numbering (M4 goods
/// movement, M5 fulfillment, M6 marketing, M7 payment/platform, M8 G&A).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpexBreakdown {
    /// Cost of goods sold (pass-through from the scenario)
    pub m4_cogs: f64,

    /// Head-haul logistics (freight rate x product weight)
    pub m4_logistics: f64,

    /// Import tariff on the CIF base (cogs + logistics)
    pub m4_tariff: f64,

    /// VAT / GST on the CIF + duty base
    pub m4_vat: f64,

    /// Last-mile delivery or marketplace fulfillment fee
    pub m5_last_mile: f64,

    /// Expected per-unit return cost (return rate x handling cost)
    pub m5_return: f64,

    /// Marketing / customer acquisition
    pub m6_marketing: f64,

    /// Payment processing (rate on price + fixed fee)
    pub m7_payment: f64,

    /// Platform commission on selling price
    pub m7_platform_commission: f64,

    /// General & administrative overhead
    pub m8_ga: f64,

    /// Sum of the ten lines above
    pub total: f64,
}

impl OpexBreakdown {
    /// The ten cost lines in computation order, with display labels.
    ///
    /// This is the single source for the ordered cost breakdown, so the
    /// partition invariant (amounts sum to `total`) cannot drift from the
    /// struct fields.
    pub fn components(&self) -> [(&'static str, f64); 10] {
        [
            ("Goods (COGS)", self.m4_cogs),
            ("International Logistics", self.m4_logistics),
            ("Import Tariff", self.m4_tariff),
            ("VAT / GST", self.m4_vat),
            ("Last-Mile Delivery", self.m5_last_mile),
            ("Returns & Reverse Logistics", self.m5_return),
            ("Marketing & Acquisition", self.m6_marketing),
            ("Payment Processing", self.m7_payment),
            ("Platform Commission", self.m7_platform_commission),
            ("General & Administrative", self.m8_ga),
        ]
    }
}

/// Per-unit profitability of the scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    /// Selling price per unit (USD)
    pub revenue: f64,

    /// Total per-unit OPEX (USD)
    pub cost: f64,

    /// revenue - cost (USD; negative for loss-making scenarios)
    pub gross_profit: f64,

    /// gross_profit / revenue. Not guarded for zero revenue: the
    /// resulting non-finite value is inherited behavior.
    pub gross_margin: f64,

    /// gross_profit x monthly volume (USD/month)
    pub monthly_profit: f64,
}

/// Headline investment metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    /// Annualized return on the CAPEX investment, percent
    pub roi_pct: f64,

    /// Months to recover CAPEX; `Infinity` when monthly profit is not
    /// positive ("never breaks even")
    pub payback_period_months: f64,

    /// Price at which cost is the target share of revenue (fixed 35%
    /// margin convention)
    pub breakeven_price: f64,

    /// Unit volume at which cumulative gross profit covers CAPEX;
    /// `Infinity` when gross profit is not positive
    pub breakeven_volume: f64,
}

/// One row of the ordered cost breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownRow {
    /// Display label of the cost line
    pub module: String,

    /// Per-unit amount (USD)
    pub amount: f64,

    /// amount / opex total x 100
    pub percentage: f64,
}

/// Complete output of one cost calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub capex: CapexBreakdown,
    pub opex: OpexBreakdown,
    pub unit_economics: UnitEconomics,
    pub kpis: Kpis,

    /// Ten rows, one per OPEX line, in computation order
    pub cost_breakdown: Vec<CostBreakdownRow>,
}
