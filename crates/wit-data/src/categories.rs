//! System category taxonomy seeded on first run.
//!
//! Top-level categories carry the icon and color shown in pickers; subcategories
//! inherit both from their parent and are stored in the listed order.

/// A seeded top-level category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySeed {
    /// Display name.
    pub name: &'static str,
    /// Stable identifier used in URLs and imports.
    pub slug: &'static str,
    /// Emoji shown next to the name.
    pub icon: &'static str,
    /// Hex color used for chips and badges.
    pub color: &'static str,
    /// Ordered subcategories.
    pub subcategories: &'static [SubcategorySeed],
}

/// A seeded subcategory nested under a [`CategorySeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcategorySeed {
    /// Display name.
    pub name: &'static str,
    /// Stable identifier, unique across the whole taxonomy.
    pub slug: &'static str,
}

const fn sub(name: &'static str, slug: &'static str) -> SubcategorySeed {
    SubcategorySeed { name, slug }
}

/// Ordered category taxonomy.
pub const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Electronics",
        slug: "electronics",
        icon: "🔌",
        color: "#3B82F6",
        subcategories: &[
            sub("Computers", "electronics-computers"),
            sub("Phones & Tablets", "electronics-phones-tablets"),
            sub("Audio", "electronics-audio"),
            sub("Cables & Chargers", "electronics-cables-chargers"),
            sub("Cameras", "electronics-cameras"),
            sub("Gaming", "electronics-gaming"),
        ],
    },
    CategorySeed {
        name: "Tools",
        slug: "tools",
        icon: "🔧",
        color: "#F97316",
        subcategories: &[
            sub("Hand Tools", "tools-hand"),
            sub("Power Tools", "tools-power"),
            sub("Measuring", "tools-measuring"),
            sub("Fasteners & Hardware", "tools-fasteners-hardware"),
            sub("Garden Tools", "tools-garden"),
        ],
    },
    CategorySeed {
        name: "Kitchen",
        slug: "kitchen",
        icon: "🍳",
        color: "#EF4444",
        subcategories: &[
            sub("Cookware", "kitchen-cookware"),
            sub("Utensils", "kitchen-utensils"),
            sub("Appliances", "kitchen-appliances"),
            sub("Tableware", "kitchen-tableware"),
            sub("Food Storage", "kitchen-food-storage"),
        ],
    },
    CategorySeed {
        name: "Food & Pantry",
        slug: "food-pantry",
        icon: "🥫",
        color: "#84CC16",
        subcategories: &[
            sub("Canned Goods", "food-canned"),
            sub("Dry Goods", "food-dry"),
            sub("Spices", "food-spices"),
            sub("Beverages", "food-beverages"),
            sub("Frozen", "food-frozen"),
        ],
    },
    CategorySeed {
        name: "Clothing",
        slug: "clothing",
        icon: "👕",
        color: "#A855F7",
        subcategories: &[
            sub("Tops", "clothing-tops"),
            sub("Bottoms", "clothing-bottoms"),
            sub("Outerwear", "clothing-outerwear"),
            sub("Shoes", "clothing-shoes"),
            sub("Accessories", "clothing-accessories"),
            sub("Seasonal", "clothing-seasonal"),
        ],
    },
    CategorySeed {
        name: "Documents",
        slug: "documents",
        icon: "📄",
        color: "#64748B",
        subcategories: &[
            sub("Personal Records", "documents-personal"),
            sub("Financial", "documents-financial"),
            sub("Manuals & Warranties", "documents-manuals-warranties"),
            sub("Photos & Keepsakes", "documents-photos-keepsakes"),
        ],
    },
    CategorySeed {
        name: "Health & Personal Care",
        slug: "health",
        icon: "💊",
        color: "#14B8A6",
        subcategories: &[
            sub("Medicine", "health-medicine"),
            sub("First Aid", "health-first-aid"),
            sub("Toiletries", "health-toiletries"),
            sub("Cosmetics", "health-cosmetics"),
        ],
    },
    CategorySeed {
        name: "Cleaning",
        slug: "cleaning",
        icon: "🧽",
        color: "#06B6D4",
        subcategories: &[
            sub("Cleaning Supplies", "cleaning-supplies"),
            sub("Laundry", "cleaning-laundry"),
            sub("Paper Goods", "cleaning-paper-goods"),
        ],
    },
    CategorySeed {
        name: "Home & Decor",
        slug: "home-decor",
        icon: "🛋️",
        color: "#EAB308",
        subcategories: &[
            sub("Linens & Bedding", "home-linens-bedding"),
            sub("Decorations", "home-decorations"),
            sub("Lighting", "home-lighting"),
            sub("Holiday", "home-holiday"),
        ],
    },
    CategorySeed {
        name: "Sports & Outdoors",
        slug: "sports-outdoors",
        icon: "⚽",
        color: "#22C55E",
        subcategories: &[
            sub("Camping", "sports-camping"),
            sub("Fitness", "sports-fitness"),
            sub("Bikes", "sports-bikes"),
            sub("Water Sports", "sports-water"),
            sub("Winter Sports", "sports-winter"),
        ],
    },
    CategorySeed {
        name: "Toys & Games",
        slug: "toys-games",
        icon: "🧸",
        color: "#EC4899",
        subcategories: &[
            sub("Board Games", "toys-board-games"),
            sub("Puzzles", "toys-puzzles"),
            sub("Kids Toys", "toys-kids"),
        ],
    },
    CategorySeed {
        name: "Books & Media",
        slug: "books-media",
        icon: "📚",
        color: "#8B5CF6",
        subcategories: &[
            sub("Books", "media-books"),
            sub("Music", "media-music"),
            sub("Movies", "media-movies"),
        ],
    },
    CategorySeed {
        name: "Crafts & Hobbies",
        slug: "crafts-hobbies",
        icon: "🎨",
        color: "#F43F5E",
        subcategories: &[
            sub("Art Supplies", "crafts-art-supplies"),
            sub("Sewing", "crafts-sewing"),
            sub("Collectibles", "crafts-collectibles"),
        ],
    },
    CategorySeed {
        name: "Automotive",
        slug: "automotive",
        icon: "🚗",
        color: "#0EA5E9",
        subcategories: &[
            sub("Parts", "automotive-parts"),
            sub("Fluids", "automotive-fluids"),
            sub("Car Care", "automotive-car-care"),
        ],
    },
    CategorySeed {
        name: "Miscellaneous",
        slug: "misc",
        icon: "📦",
        color: "#78716C",
        subcategories: &[],
    },
];

/// Number of rows the category taxonomy occupies once seeded (parents plus children).
#[must_use]
pub fn seeded_row_count() -> usize {
    CATEGORIES
        .iter()
        .map(|category| 1 + category.subcategories.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_across_parents_and_children() {
        let mut seen = HashSet::new();
        for category in CATEGORIES {
            assert!(seen.insert(category.slug), "duplicate {}", category.slug);
            for child in category.subcategories {
                assert!(seen.insert(child.slug), "duplicate {}", child.slug);
            }
        }
        assert_eq!(seen.len(), seeded_row_count());
    }

    #[test]
    fn colors_are_six_digit_hex() {
        for category in CATEGORIES {
            let hex = category.color.strip_prefix('#').unwrap_or_default();
            assert_eq!(hex.len(), 6, "{}", category.slug);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()), "{}", category.slug);
        }
    }
}
