use super::transaction::TransactionKind;

/// Fallback bucket offered for both kinds.
pub const OTHER_CATEGORY: &str = "Other";

const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Bonus", "Investment", OTHER_CATEGORY];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    OTHER_CATEGORY,
];

/// Categories proposed by the entry form for a given kind.
///
/// The category set is open; these are suggestions, not a whitelist.
pub fn suggested_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// True when `name` is one of the suggestions for `kind`, ignoring case.
pub fn is_suggested(kind: TransactionKind, name: &str) -> bool {
    let name = name.trim();
    suggested_categories(kind)
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_differ_by_kind() {
        assert!(is_suggested(TransactionKind::Income, "salary"));
        assert!(!is_suggested(TransactionKind::Expense, "Salary"));
        assert!(is_suggested(TransactionKind::Expense, " Food "));
        assert_eq!(
            suggested_categories(TransactionKind::Expense).last(),
            Some(&OTHER_CATEGORY)
        );
    }
}
