//! Order summary arithmetic

use contracts::domain::a001_article::PriceField;

use super::selection::{SelectedArticle, SelectionSet};

pub fn line_subtotal(entry: &SelectedArticle, field: PriceField) -> f64 {
    f64::from(entry.quantity) * entry.unit_price(field)
}

pub fn total(selection: &SelectionSet, field: PriceField) -> f64 {
    selection.iter().map(|e| line_subtotal(e, field)).sum()
}

#[cfg(test)]
mod tests {
    use super::super::selection::tests::article;
    use super::super::selection::StockCapPolicy;
    use super::*;

    #[test]
    fn test_total_of_empty_selection_is_zero() {
        assert_eq!(total(&SelectionSet::new(), PriceField::Purchase), 0.0);
        assert_eq!(total(&SelectionSet::new(), PriceField::Sale), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut set = SelectionSet::new();
        set.toggle(&article(1, 9, Some(2.5), Some(4.0)), true);
        set.toggle(&article(2, 9, Some(10.0), Some(12.0)), true);
        set.set_quantity(1, "4", StockCapPolicy::Advisory);
        set.set_quantity(2, "3", StockCapPolicy::Advisory);

        assert_eq!(total(&set, PriceField::Purchase), 4.0 * 2.5 + 3.0 * 10.0);
        assert_eq!(total(&set, PriceField::Sale), 4.0 * 4.0 + 3.0 * 12.0);

        let first = set.get(1).unwrap();
        assert_eq!(line_subtotal(first, PriceField::Purchase), 10.0);
    }

    #[test]
    fn test_missing_price_contributes_zero() {
        let mut set = SelectionSet::new();
        set.toggle(&article(1, 9, None, None), true);
        set.toggle(&article(2, 9, Some(3.0), Some(5.0)), true);
        set.set_quantity(1, "6", StockCapPolicy::Advisory);

        let sale_total = total(&set, PriceField::Sale);
        assert!(!sale_total.is_nan());
        assert_eq!(sale_total, 5.0);
        assert_eq!(line_subtotal(set.get(1).unwrap(), PriceField::Sale), 0.0);
    }
}
