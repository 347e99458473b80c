//! Shaping of the product sample shown on the storefront home page.

use contracts::domain::a003_product::aggregate::Product;
use rand::seq::SliceRandom;
use rand::Rng;

/// Products per carousel slide
pub const DEAL_PAGE_SIZE: usize = 2;
pub const TRENDING_COUNT: usize = 5;
pub const LATEST_COUNT: usize = 15;

/// Uniformly shuffled copy of `items`
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Consecutive slides of `DEAL_PAGE_SIZE`; the last one may be shorter
pub fn deal_pages<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items.chunks(DEAL_PAGE_SIZE).map(<[T]>::to_vec).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Showcase {
    pub deals: Vec<Vec<Product>>,
    pub trending: Vec<Product>,
    pub latest: Vec<Product>,
}

impl Showcase {
    /// Shuffle once, then cut deals (discounted products when there are
    /// any), trending and latest out of the same order.
    pub fn build<R: Rng + ?Sized>(products: Vec<Product>, rng: &mut R) -> Self {
        let products = shuffled(products, rng);
        let discounted: Vec<Product> = products
            .iter()
            .filter(|p| p.discount_percent() > 0)
            .cloned()
            .collect();
        let deals = if discounted.is_empty() {
            deal_pages(&products)
        } else {
            deal_pages(&discounted)
        };
        Self {
            deals,
            trending: products.iter().take(TRENDING_COUNT).cloned().collect(),
            latest: products.into_iter().take(LATEST_COUNT).collect(),
        }
    }
}

/// Position of a carousel over `len` slides, wrapping at both ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Timer tick
    pub fn advance(&mut self) {
        self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn product(id: &str, price: f64, sale: Option<f64>) -> Product {
        let mut json = serde_json::json!({ "_id": id, "name": format!("Product {}", id), "price": price });
        if let Some(sale) = sale {
            json["salePrice"] = serde_json::json!(sale);
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let input: Vec<u32> = (0..50).collect();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut output = shuffled(input.clone(), &mut rng);
            assert_eq!(output.len(), input.len());
            output.sort_unstable();
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_deal_pages_chunking() {
        let pages = deal_pages(&[1, 2, 3, 4, 5]);
        assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(deal_pages::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_showcase_prefers_discounted_deals() {
        let products: Vec<Product> = (0..20)
            .map(|i| {
                let sale = (i % 4 == 0).then_some(50.0);
                product(&i.to_string(), 100.0, sale)
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let showcase = Showcase::build(products, &mut rng);
        assert_eq!(showcase.trending.len(), TRENDING_COUNT);
        assert_eq!(showcase.latest.len(), LATEST_COUNT);
        let deal_count: usize = showcase.deals.iter().map(Vec::len).sum();
        assert_eq!(deal_count, 5);
        assert!(showcase.deals.iter().flatten().all(|p| p.discount_percent() == 50));
    }

    #[test]
    fn test_showcase_without_discounts_uses_everything() {
        let products: Vec<Product> = (0..3).map(|i| product(&i.to_string(), 10.0, None)).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let showcase = Showcase::build(products, &mut rng);
        assert_eq!(showcase.deals.len(), 2);
        assert_eq!(showcase.latest.len(), 3);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = CarouselState::new(3);
        carousel.prev();
        assert_eq!(carousel.index, 2);
        carousel.advance();
        assert_eq!(carousel.index, 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index, 0);

        let mut empty = CarouselState::new(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.index, 0);
    }
}
