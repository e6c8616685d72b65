//! Product category entity.

use serde::{Deserialize, Serialize};

/// A top-level catalog category ("Fresh Fruit", "Seafood", ...).
///
/// `logo` is a small glyph shown in the sidebar navigation, `image` the
/// larger artwork used on the category's homepage shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub image: String,
}

impl Category {
    pub fn new(id: i64, name: String, logo: String, image: String) -> Self {
        Self {
            id,
            name,
            logo,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new(
            3,
            "Fresh Fruit".to_string(),
            "fruit".to_string(),
            "/static/img/fruit.jpg".to_string(),
        );

        assert_eq!(category.id, 3);
        assert_eq!(category.name, "Fresh Fruit");
        assert_eq!(category.logo, "fruit");
        assert_eq!(category.image, "/static/img/fruit.jpg");
    }
}
