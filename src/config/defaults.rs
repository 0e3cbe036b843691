//! Built-in service regions, menu and wording, used when the config file
//! leaves a section out.

use crate::domain::model::{Branch, Catalog, Category, ServiceRegion};

pub const DEFAULT_BUSINESS_NAME: &str = "Kimchi Restaurant (Testing Mode)";
pub const DEFAULT_ASSISTANT_NAME: &str = "Lolo";
pub const DEFAULT_WEBSITE_URL: &str = "https://kimchirestaurant.com";
pub const DEFAULT_CUSTOMER_NAME: &str = "there";

fn branch(id: &str, title: &str) -> Branch {
    Branch {
        id: id.to_string(),
        title: title.to_string(),
    }
}

fn region(name: &str, lat: f64, lon: f64, radius_km: f64, branches: Vec<Branch>) -> ServiceRegion {
    ServiceRegion {
        name: name.to_string(),
        center_latitude: lat,
        center_longitude: lon,
        radius_km,
        branches,
    }
}

fn category(icon: &str, header: &str, body_text: &str, items: &[&str]) -> Category {
    Category {
        header: header.to_string(),
        icon: Some(icon.to_string()),
        body_text: body_text.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn default_regions() -> Vec<ServiceRegion> {
    vec![
        region(
            "Lagos",
            6.5244,
            3.3792,
            50.0,
            vec![
                branch("rest_lekki", "🏙️ Lekki Branch"),
                branch("rest_ajah", "🌆 Ajah Branch"),
                branch("rest_vi", "🏖️ Victoria Island"),
                branch("rest_yaba", "🏢 Yaba Branch"),
            ],
        ),
        region(
            "Abuja",
            9.0578,
            7.4951,
            40.0,
            vec![
                branch("rest_wuse", "🏙️ Wuse Branch"),
                branch("rest_gwarinpa", "🌆 Gwarinpa Branch"),
            ],
        ),
        region(
            "Port Harcourt",
            4.8156,
            7.0498,
            40.0,
            vec![
                branch("rest_gra", "🏖️ GRA Branch"),
                branch("rest_rumuola", "🏢 Rumuola Branch"),
            ],
        ),
        region(
            "Umuahia",
            5.5243,
            7.4933,
            40.0,
            vec![
                branch("rest_ahia", "🏖️ Ahiaeke Branch"),
                branch("rest_okpa", "🏢 Okpara Square Branch"),
            ],
        ),
    ]
}

pub fn default_catalog() -> Catalog {
    Catalog {
        categories: vec![
            category(
                "🍛",
                "MEALS",
                "Explore our freshly made meal options below 👇",
                &[
                    "Fried Rice",
                    "Jollof Rice",
                    "White Rice & Stew",
                    "Porridge Yam",
                    "Asun Rice",
                    "Spaghetti",
                    "Stir Fry Noodles",
                    "Ramen",
                ],
            ),
            category(
                "🍰",
                "DESSERT",
                "Satisfy your sweet tooth 👇",
                &[
                    "Cake",
                    "Parfait",
                    "Cup Cakes",
                    "Sliced Cake",
                    "DS Leeches Cake",
                    "Ice Cream Cake",
                ],
            ),
            category(
                "🍗",
                "PROTEIN",
                "Enjoy delicious proteins 👇",
                &["Beef", "Chicken", "Goat Meat", "Fish", "Turkey"],
            ),
            category(
                "🥐",
                "PASTRIES",
                "Fresh from our oven 👇",
                &["Meat Pie", "Doughnut", "Sausage Roll", "Chicken Pie", "Egg Roll"],
            ),
            category(
                "🥤",
                "BEVERAGES",
                "Refreshing drinks 👇",
                &[
                    "Fanta",
                    "Sprite",
                    "Coke",
                    "Lemon Juice",
                    "Chi Exotic",
                    "Pineapple Juice",
                    "Watermelon Juice",
                ],
            ),
            category(
                "🍲",
                "SWALLOW & SOUPS",
                "Classic favorites 👇",
                &[
                    "Afang Soup",
                    "Poundo",
                    "Pounded Yam",
                    "Semo",
                    "Fufu",
                    "Garri",
                    "Egusi Soup",
                    "Okazi Soup",
                    "Native Soup",
                ],
            ),
        ],
    }
}
