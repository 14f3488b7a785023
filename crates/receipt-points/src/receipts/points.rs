//! Loyalty-point rules.
//!
//! Every rule is evaluated independently and the contributions are summed. A field that
//! cannot be parsed only zeroes the rules that depend on it; scoring itself never fails.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use super::amount::Amount;
use super::domain::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
const DESCRIPTION_PRICE_PERCENT: u64 = 20;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_OPENS_SECS: u32 = 14 * 3600;
const AFTERNOON_CLOSES_SECS: u32 = 16 * 3600;

/// Rule that produced a [`PointsComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerCharacters,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub fn label(&self) -> &'static str {
        match self {
            PointsRule::RetailerCharacters => "retailer characters",
            PointsRule::RoundDollarTotal => "round dollar total",
            PointsRule::QuarterMultipleTotal => "quarter multiple total",
            PointsRule::ItemPairs => "item pairs",
            PointsRule::DescriptionLength => "description length",
            PointsRule::OddPurchaseDay => "odd purchase day",
            PointsRule::AfternoonPurchase => "afternoon purchase",
        }
    }
}

/// One rule's non-zero contribution, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsComponent {
    pub rule: PointsRule,
    pub points: u64,
    pub notes: String,
}

/// Per-rule contributions and their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub components: Vec<PointsComponent>,
    pub total: u64,
}

impl PointsBreakdown {
    fn push(&mut self, rule: PointsRule, points: u64, notes: String) {
        if points == 0 {
            return;
        }
        self.total = self.total.saturating_add(points);
        self.components.push(PointsComponent {
            rule,
            points,
            notes,
        });
    }

    /// Points awarded by `rule`, zero when it did not apply.
    pub fn points_for(&self, rule: PointsRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// Stateless scorer applying the fixed rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsEngine;

impl PointsEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &Receipt) -> PointsBreakdown {
        let mut breakdown = PointsBreakdown::default();

        let characters = retailer_characters(&receipt.retailer);
        breakdown.push(
            PointsRule::RetailerCharacters,
            characters,
            format!("{characters} alphanumeric character(s) in '{}'", receipt.retailer),
        );

        if let Some(total) = Amount::parse(&receipt.total) {
            if total.is_round_dollar() {
                breakdown.push(
                    PointsRule::RoundDollarTotal,
                    ROUND_DOLLAR_POINTS,
                    format!("total {total} has no cents"),
                );
            }
            if total.is_quarter_multiple() {
                breakdown.push(
                    PointsRule::QuarterMultipleTotal,
                    QUARTER_MULTIPLE_POINTS,
                    format!("total {total} is a multiple of 0.25"),
                );
            }
        }

        let pairs = (receipt.items.len() / 2) as u64;
        breakdown.push(
            PointsRule::ItemPairs,
            pairs.saturating_mul(POINTS_PER_ITEM_PAIR),
            format!("{pairs} pair(s) across {} item(s)", receipt.items.len()),
        );

        for (index, item) in receipt.items.iter().enumerate() {
            let bonus = description_bonus(item);
            breakdown.push(
                PointsRule::DescriptionLength,
                bonus,
                format!(
                    "item {} '{}' priced {}",
                    index + 1,
                    item.short_description.trim(),
                    item.price
                ),
            );
        }

        if let Some(day) = purchase_day(&receipt.purchase_date) {
            if day % 2 == 1 {
                breakdown.push(
                    PointsRule::OddPurchaseDay,
                    ODD_DAY_POINTS,
                    format!("purchased on odd day {day}"),
                );
            }
        }

        if let Some(time) = purchase_time(&receipt.purchase_time) {
            if is_afternoon_window(time) {
                breakdown.push(
                    PointsRule::AfternoonPurchase,
                    AFTERNOON_POINTS,
                    format!("purchased at {time} between 14:00 and 16:00"),
                );
            }
        }

        breakdown
    }
}

/// Total points for a receipt; equivalent to `PointsEngine::new().score(receipt).total`.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsEngine::new().score(receipt).total
}

fn retailer_characters(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn description_bonus(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length == 0 || length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    Amount::parse(&item.price)
        .map(|price| price.ceil_percent_dollars(DESCRIPTION_PRICE_PERCENT))
        .unwrap_or(0)
}

fn purchase_day(raw: &str) -> Option<u32> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.day())
}

fn purchase_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

// Both ends are exclusive.
fn is_afternoon_window(time: NaiveTime) -> bool {
    let seconds = time.num_seconds_from_midnight();
    seconds > AFTERNOON_OPENS_SECS && seconds < AFTERNOON_CLOSES_SECS
}
