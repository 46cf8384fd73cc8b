//! Notification categories — the closed mapping from a payload's `data.type`
//! to the notification tag and icon.
//!
//! The tag is the notification's identity: the host replaces a visible
//! notification sharing the same tag instead of stacking a new one, so
//! concurrent pushes of one category coalesce into a single notification.

/// Closed set of notification categories.
///
/// Anything the payload sends outside the recognized values lands in
/// `General`, so every payload has a tag and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LowStock,
    Order,
    Supplier,
    General,
}

impl Category {
    /// Total mapping from the payload's `data.type` value.
    pub fn from_type(value: Option<&str>) -> Self {
        match value {
            Some("low_stock") => Self::LowStock,
            Some("order") => Self::Order,
            Some("supplier") => Self::Supplier,
            _ => Self::General,
        }
    }

    /// Fixed notification tag for this category.
    pub fn tag(self) -> &'static str {
        match self {
            Self::LowStock => "beacon-low-stock",
            Self::Order => "beacon-order",
            Self::Supplier => "beacon-supplier",
            Self::General => "beacon-general",
        }
    }

    /// Fixed icon path for this category.
    pub fn icon(self) -> &'static str {
        match self {
            Self::LowStock => "/icons/icon-low-stock-192.png",
            Self::Order => "/icons/icon-order-192.png",
            Self::Supplier => "/icons/icon-supplier-192.png",
            Self::General => "/icons/Icon-192.png",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowStock => write!(f, "low_stock"),
            Self::Order => write!(f, "order"),
            Self::Supplier => write!(f, "supplier"),
            Self::General => write!(f, "general"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_types_map_to_their_category() {
        assert_eq!(Category::from_type(Some("low_stock")), Category::LowStock);
        assert_eq!(Category::from_type(Some("order")), Category::Order);
        assert_eq!(Category::from_type(Some("supplier")), Category::Supplier);
    }

    #[test]
    fn unknown_and_missing_types_fall_back_to_general() {
        assert_eq!(Category::from_type(Some("payment")), Category::General);
        assert_eq!(Category::from_type(Some("")), Category::General);
        assert_eq!(Category::from_type(None), Category::General);
    }

    #[test]
    fn tags_are_distinct() {
        let tags = [
            Category::LowStock.tag(),
            Category::Order.tag(),
            Category::Supplier.tag(),
            Category::General.tag(),
        ];
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
