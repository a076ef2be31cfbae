//! Test fixtures built through the wire shape, since record construction is
//! the store's privilege.

use stockroom_inventory::Product;

pub(crate) fn product_json(
    id: u32,
    name: &str,
    category_id: Option<u32>,
    stock: u32,
    min_stock: u32,
    description: Option<&str>,
    created_at: &str,
) -> Product {
    let value = serde_json::json!({
        "id": id,
        "name": name,
        "categoryId": category_id,
        "price": 1.0,
        "stock": stock,
        "minStock": min_stock,
        "description": description,
        "image": null,
        "createdAt": created_at,
    });
    serde_json::from_value(value).expect("valid product fixture")
}
