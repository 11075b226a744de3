//! Demo product catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The real catalog lives behind the marketplace backend; this module stands
//! in for it so pages have concrete product and variation ids to render and
//! to hand the chat widget. Shapes follow the backend's catalog rows.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A sellable variation of a product (size, finish, pack count).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variation {
    pub id: i64,
    pub label: &'static str,
    /// Unit price in cents at the wholesale tier.
    pub price_cents: u32,
    pub stock: u32,
}

/// A catalog listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    /// Minimum order quantity for wholesale buyers.
    pub moq: u32,
    pub variations: Vec<Variation>,
}

impl Product {
    /// The variation shown (and chatted about) by default.
    #[must_use]
    pub fn default_variation(&self) -> Option<&Variation> {
        self.variations.first()
    }

    /// Lowest variation price, for "from $x" price lines.
    #[must_use]
    pub fn price_from_cents(&self) -> Option<u32> {
        self.variations.iter().map(|v| v.price_cents).min()
    }
}

/// Every product in the demo catalog.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 101,
            name: "Walnut Desk Organizer",
            description: "Solid walnut organizer with a felt-lined pen tray \
                          and two device slots. Oil finished, ships flat.",
            moq: 25,
            variations: vec![
                Variation { id: 1011, label: "Natural / single", price_cents: 3400, stock: 180 },
                Variation { id: 1012, label: "Natural / 3-pack", price_cents: 9200, stock: 64 },
                Variation { id: 1013, label: "Ebonized / single", price_cents: 3900, stock: 0 },
            ],
        },
        Product {
            id: 102,
            name: "Ceramic Pour-Over Set",
            description: "Stoneware dripper and 400ml carafe, glazed in small \
                          batches. Dishwasher safe.",
            moq: 12,
            variations: vec![
                Variation { id: 1021, label: "Glacier White", price_cents: 2800, stock: 240 },
                Variation { id: 1022, label: "Basalt", price_cents: 2800, stock: 75 },
            ],
        },
        Product {
            id: 103,
            name: "Linen Throw Blanket",
            description: "Pre-washed European flax, 130x170cm. Hemmed edges, \
                          no fringe.",
            moq: 40,
            variations: vec![
                Variation { id: 1031, label: "Oat", price_cents: 5600, stock: 120 },
                Variation { id: 1032, label: "Rust", price_cents: 5600, stock: 31 },
                Variation { id: 1033, label: "Indigo", price_cents: 6100, stock: 12 },
            ],
        },
    ]
}

/// Look a product up by id.
#[must_use]
pub fn find_product(id: i64) -> Option<Product> {
    demo_products().into_iter().find(|p| p.id == id)
}

/// Render a cent amount as a dollar string, e.g. `1250` → `"$12.50"`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
