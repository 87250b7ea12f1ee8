//! Period-over-period spending comparison and budget consumption.
//!
//! Pure functions over two aggregate snapshots; no I/O, no state.

use shared::CategorySummary;

/// Three-way classification of a spending change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    More,
    Less,
    Same,
}

/// Rounded absolute percentage delta plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendingComparison {
    /// `round(|((current - previous) / previous) * 100|)`
    pub percent: u32,
    pub direction: ChangeDirection,
}

/// Compare two period totals.
///
/// Returns `None` when the previous total is zero (which covers both totals
/// being zero): there is no comparable data, and reporting ±100% or an
/// infinite change would mislead.
pub fn compare_totals(current: f64, previous: f64) -> Option<SpendingComparison> {
    if previous == 0.0 {
        return None;
    }
    let delta = (current - previous) / previous * 100.0;
    let direction = if current > previous {
        ChangeDirection::More
    } else if current < previous {
        ChangeDirection::Less
    } else {
        ChangeDirection::Same
    };
    Some(SpendingComparison {
        percent: delta.abs().round() as u32,
        direction,
    })
}

/// One category's totals in both periods plus the derived comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryComparison {
    pub category_name: String,
    pub current: f64,
    pub previous: f64,
    /// `None` when the category had no spending in the previous period
    pub comparison: Option<SpendingComparison>,
}

/// Apply the same three-way logic per category. A category missing from
/// either period counts as zero for that period. Order follows the current
/// period's breakdown, with previous-only categories appended.
pub fn compare_by_category(
    current: &[CategorySummary],
    previous: &[CategorySummary],
) -> Vec<CategoryComparison> {
    let previous_amount = |name: &str| {
        previous
            .iter()
            .find(|summary| summary.category_name == name)
            .map_or(0.0, |summary| summary.amount)
    };

    let mut comparisons: Vec<CategoryComparison> = current
        .iter()
        .map(|summary| {
            let prev = previous_amount(&summary.category_name);
            CategoryComparison {
                category_name: summary.category_name.clone(),
                current: summary.amount,
                previous: prev,
                comparison: compare_totals(summary.amount, prev),
            }
        })
        .collect();

    for summary in previous {
        if !current
            .iter()
            .any(|c| c.category_name == summary.category_name)
        {
            comparisons.push(CategoryComparison {
                category_name: summary.category_name.clone(),
                current: 0.0,
                previous: summary.amount,
                comparison: compare_totals(0.0, summary.amount),
            });
        }
    }

    comparisons
}

/// Budget consumption for the active month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// `round(current / ceiling * 100)`, may exceed 100
    pub raw_percent: u32,
    /// Raw percent clamped at 100 for the progress bar
    pub display_percent: u32,
    /// `current > ceiling`
    pub exceeded: bool,
}

/// Derive budget consumption. `None` when the ceiling is absent in spirit:
/// a ceiling of zero or less means "no budget", never a division by zero.
pub fn budget_status(current: f64, ceiling: f64) -> Option<BudgetStatus> {
    if ceiling <= 0.0 {
        return None;
    }
    let raw_percent = (current / ceiling * 100.0).round() as u32;
    Some(BudgetStatus {
        raw_percent,
        display_percent: raw_percent.min(100),
        exceeded: current > ceiling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, amount: f64) -> CategorySummary {
        CategorySummary {
            category_name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn zero_previous_means_no_comparable_data() {
        assert_eq!(compare_totals(0.0, 0.0), None);
        assert_eq!(compare_totals(250.0, 0.0), None);
    }

    #[test]
    fn increase_reports_more() {
        let comparison = compare_totals(150.0, 100.0).unwrap();
        assert_eq!(comparison.percent, 50);
        assert_eq!(comparison.direction, ChangeDirection::More);
    }

    #[test]
    fn decrease_reports_less_with_rounding() {
        let comparison = compare_totals(100.0, 150.0).unwrap();
        assert_eq!(comparison.percent, 33);
        assert_eq!(comparison.direction, ChangeDirection::Less);
    }

    #[test]
    fn equal_totals_report_same() {
        let comparison = compare_totals(100.0, 100.0).unwrap();
        assert_eq!(comparison.percent, 0);
        assert_eq!(comparison.direction, ChangeDirection::Same);
    }

    #[test]
    fn category_missing_in_previous_period_counts_as_zero() {
        let current = vec![summary("Groceries", 80.0), summary("Transport", 40.0)];
        let previous = vec![summary("Groceries", 40.0)];

        let comparisons = compare_by_category(&current, &previous);
        assert_eq!(comparisons.len(), 2);

        let groceries = &comparisons[0];
        assert_eq!(groceries.comparison.unwrap().direction, ChangeDirection::More);
        assert_eq!(groceries.comparison.unwrap().percent, 100);

        // New category: previous is zero, so no comparable data.
        let transport = &comparisons[1];
        assert_eq!(transport.previous, 0.0);
        assert_eq!(transport.comparison, None);
    }

    #[test]
    fn category_missing_in_current_period_counts_as_zero() {
        let current = vec![summary("Groceries", 80.0)];
        let previous = vec![summary("Groceries", 40.0), summary("Rent", 500.0)];

        let comparisons = compare_by_category(&current, &previous);
        let rent = comparisons
            .iter()
            .find(|c| c.category_name == "Rent")
            .unwrap();
        assert_eq!(rent.current, 0.0);
        let comparison = rent.comparison.unwrap();
        assert_eq!(comparison.percent, 100);
        assert_eq!(comparison.direction, ChangeDirection::Less);
    }

    #[test]
    fn budget_under_ceiling() {
        let status = budget_status(400.0, 500.0).unwrap();
        assert_eq!(status.raw_percent, 80);
        assert_eq!(status.display_percent, 80);
        assert!(!status.exceeded);
    }

    #[test]
    fn budget_over_ceiling_clamps_display_only() {
        let status = budget_status(600.0, 500.0).unwrap();
        assert_eq!(status.raw_percent, 120);
        assert_eq!(status.display_percent, 100);
        assert!(status.exceeded);
    }

    #[test]
    fn non_positive_ceiling_means_no_budget() {
        assert_eq!(budget_status(100.0, 0.0), None);
        assert_eq!(budget_status(100.0, -5.0), None);
    }

    #[test]
    fn spending_exactly_at_ceiling_is_not_exceeded() {
        let status = budget_status(500.0, 500.0).unwrap();
        assert_eq!(status.raw_percent, 100);
        assert!(!status.exceeded);
    }
}
