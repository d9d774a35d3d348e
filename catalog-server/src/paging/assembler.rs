//! Response assembler
//!
//! Pure entity → response transforms.

use shared::models::{Product, ProductResponse};
use shared::{Page, PaginatedResponse};

/// Flatten the category reference to its name
pub fn to_product_response(product: Product) -> ProductResponse {
    ProductResponse {
        id: product.id,
        category: product.category_name,
        name: product.name,
        price: product.price,
    }
}

pub fn to_response_list(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(to_product_response).collect()
}

/// Map every row and copy the page metadata verbatim
pub fn assemble(page: Page<Product>) -> PaginatedResponse<ProductResponse> {
    page.map(to_product_response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 9.99,
            category_id: 3,
            category_name: category.to_string(),
        }
    }

    #[test]
    fn test_to_product_response() {
        let resp = to_product_response(product(4, "Lamp", "Home"));
        assert_eq!(
            resp,
            ProductResponse {
                id: 4,
                category: "Home".to_string(),
                name: "Lamp".to_string(),
                price: 9.99,
            }
        );
    }

    #[test]
    fn test_to_response_list_keeps_order() {
        let list = to_response_list(vec![product(2, "B", "X"), product(1, "A", "Y")]);
        let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_assemble_copies_metadata() {
        let page = Page::new(vec![product(11, "K", "X"), product(12, "L", "X")], 2, 5, 12);
        let resp = assemble(page);

        assert_eq!(resp.content.len(), 2);
        assert_eq!(resp.content[0].category, "X");
        assert_eq!(resp.current_page, 2);
        assert_eq!(resp.page_size, 5);
        assert_eq!(resp.total_elements, 12);
        assert_eq!(resp.total_pages, 3);
        assert!(!resp.first);
        assert!(resp.last);
    }

    #[test]
    fn test_assemble_empty() {
        let resp = assemble(Page::new(vec![], 0, 10, 0));
        assert!(resp.content.is_empty());
        assert_eq!(resp.total_pages, 0);
        assert!(resp.first);
        assert!(resp.last);
    }
}
