//! Catalog read service composing the three browsing pages.

use std::sync::Arc;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::entities::{
    CarouselBanner, Category, ProductSku, PromotionBanner, Review, ShelfBanner, ShelfBannerKind,
};
use crate::domain::repositories::{
    BannerRepository, CategoryRepository, ProductRepository, ReviewRepository, SortKey,
};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Cache key for the composed homepage content.
///
/// The homepage is identical for every visitor (personalized fragments
/// are layered on at render time), so a single fixed key serves all
/// requests.
pub const HOME_CACHE_KEY: &str = "index";

/// How many newest-in-category SKUs the detail and listing pages show.
const NEW_ARRIVALS_LIMIT: i64 = 2;

/// One category's homepage shelf: curated text links plus image tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShelf {
    pub category: Category,
    pub title_banners: Vec<ShelfBanner>,
    pub image_banners: Vec<ShelfBanner>,
}

/// Everything the homepage renders, minus per-user fragments.
///
/// This is the unit stored in the page cache as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub shelves: Vec<CategoryShelf>,
    pub carousel_banners: Vec<CarouselBanner>,
    pub promotion_banners: Vec<PromotionBanner>,
}

/// Everything the product detail page renders, minus per-user fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub sku: ProductSku,
    pub categories: Vec<Category>,
    pub reviews: Vec<Review>,
    pub new_arrivals: Vec<ProductSku>,
    pub same_group: Vec<ProductSku>,
}

/// Everything the category listing page renders, before pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub category: Category,
    pub categories: Vec<Category>,
    pub skus: Vec<ProductSku>,
    pub new_arrivals: Vec<ProductSku>,
}

/// Read-side service for the three catalog pages.
///
/// Composes repository reads into page content and owns the homepage
/// cache discipline: reads are fail-open (a cache error is a miss) and
/// writes never fail a request.
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    banners: Arc<dyn BannerRepository>,
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        banners: Arc<dyn BannerRepository>,
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            categories,
            banners,
            products,
            reviews,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Returns the composed homepage content, from cache when possible.
    ///
    /// A cache hit serves the stored unit without touching the catalog
    /// repositories. On a miss the content is rebuilt from the database
    /// and stored with the configured TTL; there is no explicit
    /// invalidation, merchandising edits become visible when the entry
    /// expires.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only for database failures during
    /// a rebuild. Cache failures degrade to a rebuild.
    pub async fn home_content(&self) -> Result<HomeContent, AppError> {
        match self.cache.get(HOME_CACHE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<HomeContent>(&raw) {
                Ok(content) => {
                    counter!("catalog_home_cache_hits_total").increment(1);
                    return Ok(content);
                }
                Err(e) => {
                    // A stale schema after a deploy lands here; rebuild
                    // and overwrite rather than serving garbage.
                    warn!("Discarding undecodable cached homepage: {e}");
                }
            },
            Ok(None) => {}
            Err(e) => {
                error!("Page cache read failed: {e}");
            }
        }

        counter!("catalog_home_cache_misses_total").increment(1);
        let content = self.build_home_content().await?;

        match serde_json::to_string(&content) {
            Ok(raw) => {
                if let Err(e) = self
                    .cache
                    .set(HOME_CACHE_KEY, &raw, self.cache_ttl_seconds)
                    .await
                {
                    warn!("Page cache write failed: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize homepage for caching: {e}"),
        }

        Ok(content)
    }

    async fn build_home_content(&self) -> Result<HomeContent, AppError> {
        let categories = self.categories.list_all().await?;
        let carousel_banners = self.banners.carousel_banners().await?;
        let promotion_banners = self.banners.promotion_banners().await?;

        let mut shelves = Vec::with_capacity(categories.len());
        for category in categories {
            let title_banners = self
                .banners
                .shelf_banners(category.id, ShelfBannerKind::Title)
                .await?;
            let image_banners = self
                .banners
                .shelf_banners(category.id, ShelfBannerKind::Image)
                .await?;
            shelves.push(CategoryShelf {
                category,
                title_banners,
                image_banners,
            });
        }

        Ok(HomeContent {
            shelves,
            carousel_banners,
            promotion_banners,
        })
    }

    /// Returns the composed product detail page for one SKU.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the SKU does not exist; no
    /// further queries are issued in that case. Returns
    /// [`AppError::Internal`] on database failures.
    pub async fn product_detail(&self, sku_id: i64) -> Result<ProductDetail, AppError> {
        let sku = self
            .products
            .find_by_id(sku_id)
            .await?
            .ok_or_else(|| AppError::not_found("product"))?;

        let categories = self.categories.list_all().await?;
        let reviews = self.reviews.list_for_sku(sku.id).await?;
        let new_arrivals = self
            .products
            .list_newest_by_category(sku.category_id, NEW_ARRIVALS_LIMIT)
            .await?;
        let same_group = self.products.list_same_group(sku.group_id, sku.id).await?;

        Ok(ProductDetail {
            sku,
            categories,
            reviews,
            new_arrivals,
            same_group,
        })
    }

    /// Returns one category's full sorted listing plus sidebar data.
    ///
    /// Pagination happens at the edge; this returns every SKU in the
    /// category in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database failures.
    pub async fn category_listing(
        &self,
        category_id: i64,
        sort: SortKey,
    ) -> Result<CategoryListing, AppError> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("category"))?;

        let categories = self.categories.list_all().await?;
        let skus = self.products.list_by_category(category_id, sort).await?;
        let new_arrivals = self
            .products
            .list_newest_by_category(category_id, NEW_ARRIVALS_LIMIT)
            .await?;

        Ok(CategoryListing {
            category,
            categories,
            skus,
            new_arrivals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockBannerRepository, MockCategoryRepository, MockProductRepository, MockReviewRepository,
    };
    use crate::infrastructure::cache::MemoryCache;
    use chrono::Utc;

    fn test_category(id: i64, name: &str) -> Category {
        Category::new(id, name.to_string(), String::new(), String::new())
    }

    fn test_sku(id: i64, category_id: i64) -> ProductSku {
        ProductSku {
            id,
            category_id,
            group_id: 1,
            name: format!("SKU {id}"),
            brief: String::new(),
            unit: "500g".to_string(),
            price_cents: 100 * id,
            image: String::new(),
            stock: 10,
            sales: 0,
            on_sale: true,
            created_at: Utc::now(),
        }
    }

    fn service_with(
        categories: MockCategoryRepository,
        banners: MockBannerRepository,
        products: MockProductRepository,
        reviews: MockReviewRepository,
        cache: Arc<MemoryCache>,
    ) -> CatalogService {
        CatalogService::new(
            Arc::new(categories),
            Arc::new(banners),
            Arc::new(products),
            Arc::new(reviews),
            cache,
            3600,
        )
    }

    #[tokio::test]
    async fn test_home_content_second_call_served_from_cache() {
        let mut categories = MockCategoryRepository::new();
        let mut banners = MockBannerRepository::new();

        categories
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![test_category(1, "Fresh Fruit")]));
        banners
            .expect_carousel_banners()
            .times(1)
            .returning(|| Ok(vec![]));
        banners
            .expect_promotion_banners()
            .times(1)
            .returning(|| Ok(vec![]));
        // One category, queried once per banner kind.
        banners
            .expect_shelf_banners()
            .times(2)
            .returning(|_, _| Ok(vec![]));

        let service = service_with(
            categories,
            banners,
            MockProductRepository::new(),
            MockReviewRepository::new(),
            Arc::new(MemoryCache::new()),
        );

        let first = service.home_content().await.unwrap();
        let second = service.home_content().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.shelves.len(), 1);
        assert_eq!(first.shelves[0].category.name, "Fresh Fruit");
    }

    #[tokio::test]
    async fn test_home_content_rebuilds_on_undecodable_cache_entry() {
        let cache = Arc::new(MemoryCache::new());
        cache.set(HOME_CACHE_KEY, "not json", 3600).await.unwrap();

        let mut categories = MockCategoryRepository::new();
        let mut banners = MockBannerRepository::new();

        categories.expect_list_all().times(1).returning(|| Ok(vec![]));
        banners
            .expect_carousel_banners()
            .times(1)
            .returning(|| Ok(vec![]));
        banners
            .expect_promotion_banners()
            .times(1)
            .returning(|| Ok(vec![]));

        let service = service_with(
            categories,
            banners,
            MockProductRepository::new(),
            MockReviewRepository::new(),
            cache.clone(),
        );

        let content = service.home_content().await.unwrap();
        assert!(content.shelves.is_empty());

        // The rebuilt unit replaced the garbage entry.
        let cached = cache.get(HOME_CACHE_KEY).await.unwrap().unwrap();
        assert!(serde_json::from_str::<HomeContent>(&cached).is_ok());
    }

    #[tokio::test]
    async fn test_product_detail_composes_page() {
        let mut categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();
        let mut reviews = MockReviewRepository::new();

        let sku = test_sku(101, 3);
        products
            .expect_find_by_id()
            .withf(|&id| id == 101)
            .times(1)
            .returning(move |_| Ok(Some(test_sku(101, 3))));
        categories
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![test_category(3, "Fresh Fruit")]));
        reviews
            .expect_list_for_sku()
            .withf(|&id| id == 101)
            .times(1)
            .returning(|_| Ok(vec![]));
        products
            .expect_list_newest_by_category()
            .withf(|&category_id, &limit| category_id == 3 && limit == 2)
            .times(1)
            .returning(|_, _| Ok(vec![test_sku(102, 3)]));
        products
            .expect_list_same_group()
            .withf(|&group_id, &exclude| group_id == 1 && exclude == 101)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = service_with(
            categories,
            MockBannerRepository::new(),
            products,
            reviews,
            Arc::new(MemoryCache::new()),
        );

        let detail = service.product_detail(101).await.unwrap();
        assert_eq!(detail.sku.id, sku.id);
        assert_eq!(detail.new_arrivals.len(), 1);
        assert_eq!(detail.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_product_detail_missing_sku_stops_after_lookup() {
        let mut products = MockProductRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut reviews = MockReviewRepository::new();

        products
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        // No fallthrough queries once the SKU is known to be missing.
        categories.expect_list_all().times(0);
        reviews.expect_list_for_sku().times(0);
        products.expect_list_newest_by_category().times(0);
        products.expect_list_same_group().times(0);

        let service = service_with(
            categories,
            MockBannerRepository::new(),
            products,
            reviews,
            Arc::new(MemoryCache::new()),
        );

        let err = service.product_detail(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_category_listing_passes_sort_key_through() {
        let mut categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();

        categories
            .expect_find_by_id()
            .withf(|&id| id == 3)
            .times(1)
            .returning(|_| Ok(Some(test_category(3, "Fresh Fruit"))));
        categories
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![test_category(3, "Fresh Fruit")]));
        products
            .expect_list_by_category()
            .withf(|&category_id, &sort| category_id == 3 && sort == SortKey::Price)
            .times(1)
            .returning(|_, _| Ok(vec![test_sku(1, 3), test_sku(2, 3)]));
        products
            .expect_list_newest_by_category()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = service_with(
            categories,
            MockBannerRepository::new(),
            products,
            MockReviewRepository::new(),
            Arc::new(MemoryCache::new()),
        );

        let listing = service.category_listing(3, SortKey::Price).await.unwrap();
        assert_eq!(listing.skus.len(), 2);
        assert_eq!(listing.category.id, 3);
    }

    #[tokio::test]
    async fn test_category_listing_unknown_category_stops_after_lookup() {
        let mut categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();

        categories
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        categories.expect_list_all().times(0);
        products.expect_list_by_category().times(0);
        products.expect_list_newest_by_category().times(0);

        let service = service_with(
            categories,
            MockBannerRepository::new(),
            products,
            MockReviewRepository::new(),
            Arc::new(MemoryCache::new()),
        );

        let err = service
            .category_listing(999, SortKey::Default)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
