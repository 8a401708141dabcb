use serde::{Deserialize, Serialize};

use rfgrid_core::catalog;
use rfgrid_core::enums::ComponentKind;

/// Total cost of a set of placed kinds.
pub fn spent(kinds: impl IntoIterator<Item = ComponentKind>) -> u32 {
    kinds.into_iter().map(catalog::cost).sum()
}

/// Budget against current spend.
/// Spend may exceed the budget; nothing here caps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLedger {
    pub budget: u32,
    pub spent: u32,
}

impl BudgetLedger {
    pub fn new(budget: u32, spent: u32) -> Self {
        Self { budget, spent }
    }

    /// Ledger for a board holding `kinds`.
    pub fn for_board(budget: u32, kinds: impl IntoIterator<Item = ComponentKind>) -> Self {
        Self::new(budget, spent(kinds))
    }

    /// Points left, floored at zero.
    pub fn remaining(&self) -> u32 {
        self.budget.saturating_sub(self.spent)
    }

    /// Signed balance; negative when over budget.
    pub fn balance(&self) -> i64 {
        self.budget as i64 - self.spent as i64
    }

    pub fn over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Whether one more `kind` fits in what remains.
    pub fn can_afford(&self, kind: ComponentKind) -> bool {
        self.balance() >= catalog::cost(kind) as i64
    }

    /// Spent share of the budget for the budget bar, clamped to 1.0.
    pub fn fill_ratio(&self) -> f64 {
        if self.budget == 0 {
            return if self.spent > 0 { 1.0 } else { 0.0 };
        }
        (self.spent as f64 / self.budget as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_sums_catalog_costs() {
        // 2 base stations + 1 RIS = 30 + 30 + 15
        let kinds = [
            ComponentKind::BaseStation28Ghz,
            ComponentKind::BaseStation28Ghz,
            ComponentKind::RisPanel,
        ];
        assert_eq!(spent(kinds), 75);
    }

    #[test]
    fn obstacles_are_free() {
        assert_eq!(spent([ComponentKind::Obstacle, ComponentKind::Obstacle]), 0);
    }

    #[test]
    fn remaining_and_affordability() {
        let ledger = BudgetLedger::for_board(
            100,
            [ComponentKind::BaseStation28Ghz, ComponentKind::BaseStation28Ghz],
        );
        assert_eq!(ledger.remaining(), 40);
        assert!(ledger.can_afford(ComponentKind::BaseStation28Ghz));
        assert!(ledger.can_afford(ComponentKind::RisPanel));
        // Phased array costs 45 > 40
        assert!(!ledger.can_afford(ComponentKind::PhasedArray));
        assert!(!ledger.over_budget());
    }

    #[test]
    fn exact_budget_is_affordable() {
        let ledger = BudgetLedger::new(100, 70);
        assert!(ledger.can_afford(ComponentKind::BaseStation28Ghz));
        let ledger = BudgetLedger::new(100, 71);
        assert!(!ledger.can_afford(ComponentKind::BaseStation28Ghz));
    }

    #[test]
    fn over_budget_is_reported_not_capped() {
        let ledger = BudgetLedger::for_board(100, [ComponentKind::PhasedArray; 3]);
        assert_eq!(ledger.spent, 135);
        assert!(ledger.over_budget());
        assert_eq!(ledger.remaining(), 0);
        assert_eq!(ledger.balance(), -35);
        assert_eq!(ledger.fill_ratio(), 1.0);
        // Even free pieces are unaffordable once over budget
        assert!(!ledger.can_afford(ComponentKind::Obstacle));
    }

    #[test]
    fn empty_board_fill_ratio() {
        let ledger = BudgetLedger::for_board(100, Vec::<ComponentKind>::new());
        assert_eq!(ledger.fill_ratio(), 0.0);
        assert_eq!(BudgetLedger::new(0, 0).fill_ratio(), 0.0);
        assert_eq!(BudgetLedger::new(0, 15).fill_ratio(), 1.0);
    }

    #[test]
    fn ledger_serde() {
        let ledger = BudgetLedger::new(100, 45);
        let json = serde_json::to_string(&ledger).unwrap();
        let back: BudgetLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
