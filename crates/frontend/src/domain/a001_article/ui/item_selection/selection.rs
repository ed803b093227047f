use std::num::IntErrorKind;

use contracts::domain::a001_article::{Article, ArticleId, PriceField};

/// Article chosen for the current order with its quantity
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedArticle {
    pub article: Article,
    pub quantity: u32,
}

impl SelectedArticle {
    pub fn id(&self) -> ArticleId {
        self.article.article_id
    }

    /// Unit price for the given field; absent or non-finite prices count as 0
    pub fn unit_price(&self, field: PriceField) -> f64 {
        self.article
            .price(field)
            .filter(|p| p.is_finite())
            .unwrap_or(0.0)
    }
}

/// How the quantity input treats values above the article's stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockCapPolicy {
    /// Stock is only advertised as the input maximum; larger values are kept
    #[default]
    Advisory,
    /// Larger values are clamped to the stock level
    Clamp,
}

/// Parse a raw quantity input the way a browser `parseInt` would read its
/// leading digits. Empty, non-numeric or non-positive input yields 1;
/// values past `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 1,
    }
}

/// Articles selected for an order, keyed by article id.
///
/// Insertion order is kept for rendering; an id appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: Vec<SelectedArticle>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ArticleId) -> Option<&SelectedArticle> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedArticle> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SelectedArticle] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<ArticleId> {
        self.entries.iter().map(SelectedArticle::id).collect()
    }

    fn position(&self, id: ArticleId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Include or exclude an article. Including an already selected article
    /// keeps its entry (and quantity) untouched. Returns whether the set
    /// changed.
    pub fn toggle(&mut self, article: &Article, included: bool) -> bool {
        if included {
            if self.contains(article.article_id) {
                return false;
            }
            self.entries.push(SelectedArticle {
                article: article.clone(),
                quantity: 1,
            });
            true
        } else {
            self.remove(article.article_id)
        }
    }

    pub fn remove(&mut self, id: ArticleId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Apply a raw quantity edit. The edit is never rejected: bad input
    /// becomes 1, and `Clamp` caps the value at the article's stock.
    pub fn set_quantity(&mut self, id: ArticleId, raw: &str, policy: StockCapPolicy) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let entry = &mut self.entries[idx];

        let mut quantity = parse_quantity(raw);
        if policy == StockCapPolicy::Clamp {
            quantity = quantity.min(entry.article.stock.max(1));
        }

        entry.quantity = quantity;
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn article(id: ArticleId, stock: u32, purchase: Option<f64>, sale: Option<f64>) -> Article {
        Article {
            article_id: id,
            name: format!("Article {}", id),
            brand: Some("Brand".to_string()),
            category: None,
            provider: None,
            stock,
            purchase_price: purchase,
            sale_price: sale,
        }
    }

    #[test]
    fn test_toggle_sequence_keeps_last_true_once() {
        let a = article(1, 5, Some(1.0), Some(2.0));
        let b = article(2, 5, Some(1.0), Some(2.0));
        let c = article(3, 5, Some(1.0), Some(2.0));
        let mut set = SelectionSet::new();

        set.toggle(&a, true);
        set.toggle(&a, true);
        set.toggle(&b, true);
        set.toggle(&c, true);
        set.toggle(&b, false);
        set.toggle(&b, false);
        set.toggle(&c, false);
        set.toggle(&c, true);
        set.toggle(&a, true);

        assert_eq!(set.ids(), vec![1, 3]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_reinclude_is_noop() {
        let a = article(1, 5, Some(1.0), None);
        let mut set = SelectionSet::new();

        assert!(set.toggle(&a, true));
        set.set_quantity(1, "4", StockCapPolicy::Advisory);
        assert!(!set.toggle(&a, true));
        assert_eq!(set.get(1).map(|e| e.quantity), Some(4));
    }

    #[test]
    fn test_untoggle_removes_only_that_entry() {
        let a = article(1, 5, None, None);
        let b = article(2, 5, None, None);
        let c = article(3, 5, None, None);
        let mut set = SelectionSet::new();
        set.toggle(&a, true);
        set.toggle(&b, true);
        set.toggle(&c, true);
        set.set_quantity(3, "7", StockCapPolicy::Advisory);

        assert!(set.toggle(&b, false));

        assert_eq!(set.ids(), vec![1, 3]);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(1));
        assert_eq!(set.get(3).map(|e| e.quantity), Some(7));
    }

    #[test]
    fn test_bad_quantity_input_becomes_one() {
        let a = article(1, 5, None, None);
        let mut set = SelectionSet::new();
        set.toggle(&a, true);

        set.set_quantity(1, "3", StockCapPolicy::Advisory);
        set.set_quantity(1, "", StockCapPolicy::Advisory);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(1));

        set.set_quantity(1, "3", StockCapPolicy::Advisory);
        set.set_quantity(1, "abc", StockCapPolicy::Advisory);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(1));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("12abc"), 12);
        assert_eq!(parse_quantity("+3"), 3);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("1.9"), 1);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }

    #[test]
    fn test_huge_quantity_saturates() {
        assert_eq!(parse_quantity("999999999999999999999"), u32::MAX);
        assert_eq!(parse_quantity("4294967295"), u32::MAX);
        assert_eq!(parse_quantity("4294967296"), u32::MAX);
        assert_eq!(parse_quantity("000000000000000000000007"), 7);

        let a = article(1, 5, None, None);
        let mut set = SelectionSet::new();
        set.toggle(&a, true);
        set.set_quantity(1, "999999999999999999999", StockCapPolicy::Advisory);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(u32::MAX));
    }

    #[test]
    fn test_stock_cap_policies() {
        let a = article(1, 3, None, Some(2.0));
        let mut set = SelectionSet::new();
        set.toggle(&a, true);

        set.set_quantity(1, "10", StockCapPolicy::Advisory);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(10));

        set.set_quantity(1, "10", StockCapPolicy::Clamp);
        assert_eq!(set.get(1).map(|e| e.quantity), Some(3));
    }

    #[test]
    fn test_set_quantity_unknown_id() {
        let mut set = SelectionSet::new();
        assert!(!set.set_quantity(42, "2", StockCapPolicy::Advisory));
        assert!(set.is_empty());
    }
}
