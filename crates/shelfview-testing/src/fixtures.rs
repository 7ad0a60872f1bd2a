//! Deterministic product catalogs.

use shelfview_types::Product;

/// `count` products titled "Product 01", "Product 02", ... with id = row
/// number and price = 10 * id, in insertion order.
pub fn numbered_products(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            Product::new(i, format!("Product {i:02}"), (i * 10) as f64)
                .with_description(format!("Description of product {i}"))
                .with_category(if i % 2 == 0 { "Even" } else { "Odd" })
                .with_image(format!("https://img.example.test/{i}.jpeg"))
        })
        .collect()
}

/// A small catalog that looks like the public API's data
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Classic Red Pullover Hoodie", 10.0)
            .with_description("Soft red hoodie with a kangaroo pocket.")
            .with_category("Clothes")
            .with_image("https://i.imgur.com/1twoaDy.jpeg"),
        Product::new(2, "Sleek Wireless Headphone & Inked Earbud Set", 44.0)
            .with_description("Wireless headphones paired with matching earbuds.")
            .with_category("Electronics")
            .with_image("https://i.imgur.com/yVeIeDa.jpeg"),
        Product::new(3, "Classic Black Hooded Sweatshirt", 79.0)
            .with_description("Heavyweight cotton hooded sweatshirt.")
            .with_category("Clothes"),
        Product::new(4, "Rustic Wooden Chair", 44.0)
            .with_category("Furniture")
            .with_image("https://i.imgur.com/6wkyyIN.jpeg"),
        Product::new(5, "sleek modern laptop", 1299.0)
            .with_description("Thin and light laptop with an all-day battery.")
            .with_category("Electronics"),
        Product::new(6, "Majestic Mountain Graphic T-Shirt", 44.0)
            .with_description("Cotton tee printed with a mountain range."),
    ]
}
