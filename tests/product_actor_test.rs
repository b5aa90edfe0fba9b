use padaria::controllers::CategoryController;
use padaria::framework::mock::MockClient;
use padaria::framework::FrameworkError;
use padaria::model::{Category, CategoryName, ProductCreate, ProductId};
use padaria::product_actor::ProductError;

fn doces() -> Category {
    Category {
        name: "Doces".into(),
        description: "Doces e sobremesas deliciosas".to_string(),
    }
}

/// Real product store with a mocked category store.
///
/// The product store's validation (`on_create`, `on_update`) runs for real while every
/// category lookup is answered by the mock.
#[tokio::test]
async fn test_product_store_with_mocked_categories() {
    let mut category_mock = MockClient::<Category>::new();

    // on_create looks the category up once
    category_mock
        .expect_get(CategoryName::from("Doces"))
        .return_ok(Some(doces()));

    let categories = CategoryController::new(category_mock.client());
    let (product_store, products) = padaria::product_actor::new(16);
    let handle = tokio::spawn(product_store.run(categories));

    let brigadeiro = products
        .create_product(ProductCreate::new(
            "Brigadeiro",
            2.0,
            "Doces",
            "Brigadeiro tradicional",
        ))
        .await
        .expect("Product creation failed");
    assert_eq!(brigadeiro.id, ProductId(1));

    // Same category: no lookup
    let mut cheaper = brigadeiro.clone();
    cheaper.price = 1.5;
    let updated = products.update_product(cheaper).await.unwrap();
    assert_eq!(updated.price, 1.5);

    let stored = products.get_product(brigadeiro.id).await.unwrap();
    assert_eq!(stored, Some(updated));

    category_mock.verify();

    drop(products);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_category_is_an_invalid_reference() {
    let mut category_mock = MockClient::<Category>::new();
    category_mock
        .expect_get(CategoryName::from("Móveis"))
        .return_ok(None);

    let categories = CategoryController::new(category_mock.client());
    let (product_store, products) = padaria::product_actor::new(16);
    let handle = tokio::spawn(product_store.run(categories));

    let result = products
        .create_product(ProductCreate::new("Mesa", 300.0, "Móveis", ""))
        .await;
    assert_eq!(result, Err(ProductError::InvalidReference("Móveis".into())));
    assert!(products.get_all_products().await.unwrap().is_empty());

    category_mock.verify();

    drop(products);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_changing_category_looks_up_the_new_one() {
    let mut category_mock = MockClient::<Category>::new();
    category_mock
        .expect_get(CategoryName::from("Doces"))
        .return_ok(Some(doces()));
    category_mock
        .expect_get(CategoryName::from("Bebidas"))
        .return_ok(None);

    let categories = CategoryController::new(category_mock.client());
    let (product_store, products) = padaria::product_actor::new(16);
    let handle = tokio::spawn(product_store.run(categories));

    let product = products
        .create_product(ProductCreate::new("Brigadeiro", 2.0, "Doces", ""))
        .await
        .unwrap();

    let mut moved = product.clone();
    moved.category = "Bebidas".into();
    let result = products.update_product(moved).await;
    assert_eq!(
        result,
        Err(ProductError::InvalidReference("Bebidas".into()))
    );

    // The stored product kept its category
    let stored = products.get_product(product.id).await.unwrap().unwrap();
    assert_eq!(stored.category.as_str(), "Doces");

    category_mock.verify();

    drop(products);
    handle.await.unwrap();
}

/// Field validation rejects the request before any category lookup.
#[tokio::test]
async fn test_invalid_fields_skip_category_lookup() {
    let category_mock = MockClient::<Category>::new();

    let categories = CategoryController::new(category_mock.client());
    let (product_store, products) = padaria::product_actor::new(16);
    let handle = tokio::spawn(product_store.run(categories));

    let result = products
        .create_product(ProductCreate::new("", 2.0, "Doces", ""))
        .await;
    assert_eq!(result, Err(ProductError::InvalidName));

    let result = products
        .create_product(ProductCreate::new("Sonho", f64::NAN, "Doces", ""))
        .await;
    assert!(matches!(result, Err(ProductError::InvalidPrice(p)) if p.is_nan()));

    category_mock.verify();

    drop(products);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_category_store_failure_surfaces_as_communication_error() {
    let mut category_mock = MockClient::<Category>::new();
    category_mock
        .expect_get(CategoryName::from("Doces"))
        .return_err(FrameworkError::ActorClosed);

    let categories = CategoryController::new(category_mock.client());
    let (product_store, products) = padaria::product_actor::new(16);
    let handle = tokio::spawn(product_store.run(categories));

    let result = products
        .create_product(ProductCreate::new("Brigadeiro", 2.0, "Doces", ""))
        .await;
    assert!(matches!(
        result,
        Err(ProductError::ActorCommunicationError(_))
    ));

    category_mock.verify();

    drop(products);
    handle.await.unwrap();
}
