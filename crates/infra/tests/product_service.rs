use std::sync::Arc;

use anyhow::anyhow;
use rust_decimal_macros::dec;

use catalog_core::{AggregateRoot, DomainError, Entity};
use catalog_infra::{InMemoryProductStore, ProductService, ServiceError};
use catalog_products::{
    BusinessId, CareInstruction, Description, Gallery, ImageUrl, Money, Product,
    ProductCommandRepository, ProductId, ProductQueryRepository, Variant, Weight,
};

type StoreService = ProductService<Arc<InMemoryProductStore>, Arc<InMemoryProductStore>>;

fn service() -> (StoreService, Arc<InMemoryProductStore>) {
    catalog_observability::init();
    let store = Arc::new(InMemoryProductStore::new());
    (ProductService::new(store.clone(), store.clone()), store)
}

fn business() -> BusinessId {
    BusinessId::new("biz-001").unwrap()
}

fn product() -> Product {
    Product::create_empty(
        business(),
        "Category",
        Description::new("A sample product"),
        Gallery::new([ImageUrl::new("https://example.com/image_placeholder.jpg").unwrap()]),
    )
    .unwrap()
}

fn variant() -> Variant {
    Variant::create_draft(
        Money::usd(dec!(999.99)).unwrap(),
        Weight::kilograms(dec!(1)).unwrap(),
        CareInstruction::new("Handle with care"),
        vec![],
    )
    .unwrap()
}

/// Repository whose every call fails, standing in for an unreachable database.
struct BrokenStore;

impl ProductQueryRepository for BrokenStore {
    fn find_by_id(
        &self,
        _business_id: &BusinessId,
        _id: &ProductId,
    ) -> anyhow::Result<Option<Product>> {
        Err(anyhow!("Database error"))
    }

    fn find_all(&self, _business_id: &BusinessId) -> anyhow::Result<Vec<Product>> {
        Err(anyhow!("Database error"))
    }
}

impl ProductCommandRepository for BrokenStore {
    fn save(&self, _product: &Product) -> anyhow::Result<Product> {
        Err(anyhow!("Database error"))
    }

    fn delete_by_id(&self, _business_id: &BusinessId, _id: &ProductId) -> anyhow::Result<()> {
        Err(anyhow!("Database error"))
    }
}

/// Saves normally but cannot delete.
struct DeleteFailingStore(Arc<InMemoryProductStore>);

impl ProductCommandRepository for DeleteFailingStore {
    fn save(&self, product: &Product) -> anyhow::Result<Product> {
        self.0.save(product)
    }

    fn delete_by_id(&self, _business_id: &BusinessId, _id: &ProductId) -> anyhow::Result<()> {
        Err(anyhow!("Database error"))
    }
}

#[test]
fn find_product_returns_saved_product() {
    let (service, _) = service();
    let product = product();
    service.save_product(&product).unwrap();

    let found = service.find_product(&business(), product.id()).unwrap();
    assert_eq!(found.id(), product.id());
    assert_eq!(found.business_id(), &business());
}

#[test]
fn find_product_reports_not_found() {
    let (service, _) = service();
    let id = ProductId::new("123").unwrap();
    match service.find_product(&business(), &id) {
        Err(ServiceError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn save_failure_is_translated() {
    catalog_observability::init();
    let service = ProductService::new(BrokenStore, BrokenStore);
    let err = service.save_product(&product()).unwrap_err();
    match &err {
        ServiceError::OperationFailed { operation, .. } => assert_eq!(*operation, "save product"),
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to save product"));
    assert!(err.to_string().contains("Database error"));
}

#[test]
fn lookup_failure_is_translated() {
    let service = ProductService::new(BrokenStore, BrokenStore);
    match service.list_products(&business()) {
        Err(ServiceError::OperationFailed { operation, .. }) => {
            assert_eq!(operation, "list products")
        }
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
}

#[test]
fn load_failure_is_translated() {
    let service = ProductService::new(BrokenStore, BrokenStore);
    let id = ProductId::new("123").unwrap();
    match service.find_product(&business(), &id) {
        Err(ServiceError::OperationFailed { operation, .. }) => {
            assert_eq!(operation, "load product")
        }
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
}

#[test]
fn delete_failure_is_translated_and_keeps_product() {
    catalog_observability::init();
    let store = Arc::new(InMemoryProductStore::new());
    let service = ProductService::new(store.clone(), DeleteFailingStore(store.clone()));
    let product = product();
    service.save_product(&product).unwrap();

    let err = service.delete_product(&business(), product.id()).unwrap_err();
    match &err {
        ServiceError::OperationFailed { operation, .. } => {
            assert_eq!(*operation, "delete product")
        }
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("Database error"));
    assert!(store.find_by_id(&business(), product.id()).unwrap().is_some());
}

#[test]
fn delete_product_removes_it() {
    let (service, store) = service();
    let product = product();
    service.save_product(&product).unwrap();

    service.delete_product(&business(), product.id()).unwrap();
    assert!(store.find_by_id(&business(), product.id()).unwrap().is_none());
}

#[test]
fn delete_unknown_product_is_not_found() {
    let (service, _) = service();
    let id = ProductId::new("123").unwrap();
    assert!(matches!(
        service.delete_product(&business(), &id),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn add_variant_persists_new_snapshot() {
    let (service, _) = service();
    let product = product();
    service.save_product(&product).unwrap();

    let variant = variant();
    let updated = service
        .add_variant(&business(), product.id(), variant.clone())
        .unwrap();
    assert_eq!(updated.variant_count(), 1);

    let reloaded = service.find_product(&business(), product.id()).unwrap();
    assert_eq!(reloaded.find_variant_by_id(variant.id()), Some(&variant));
}

#[test]
fn add_duplicate_variant_surfaces_domain_error_and_keeps_store() {
    let (service, _) = service();
    let product = product();
    service.save_product(&product).unwrap();

    let variant = variant();
    service
        .add_variant(&business(), product.id(), variant.clone())
        .unwrap();

    match service.add_variant(&business(), product.id(), variant) {
        Err(ServiceError::Domain(DomainError::Duplicate(_))) => {}
        other => panic!("Expected Duplicate domain error, got {other:?}"),
    }
    let reloaded = service.find_product(&business(), product.id()).unwrap();
    assert_eq!(reloaded.variant_count(), 1);
}

#[test]
fn summary_flattens_product() {
    let (service, _) = service();
    let product = product().add_variant(variant()).unwrap();
    service.save_product(&product).unwrap();

    let summary = service.find_summary(&business(), product.id()).unwrap();
    assert_eq!(&summary.id, product.id());
    assert_eq!(summary.category, "Category");
    assert_eq!(summary.variant_count, 1);
    assert!(
        summary
            .image_urls
            .contains("https://example.com/image_placeholder.jpg")
    );
}

#[test]
fn list_products_is_scoped_to_business() {
    let (service, _) = service();
    service.save_product(&product()).unwrap();
    service.save_product(&product()).unwrap();

    let other = BusinessId::new("biz-002").unwrap();
    assert_eq!(service.list_products(&business()).unwrap().len(), 2);
    assert!(service.list_products(&other).unwrap().is_empty());
}
