//! Static Java Gen menu table
//!
//! The menu is reference data only: it feeds the greeting-time announcement
//! and the optional menu validation, and is never consulted when persisting.

use serde::Serialize;

/// Number of examples shown per category in the menu announcement
const PREVIEW_LEN: usize = 6;

/// Marker appended to truncated category previews
const ELLIPSIS: &str = "...";

/// Ways customers ask for the "No milk / Black" option
const NO_MILK_ALIASES: [&str; 3] = ["none", "no milk", "black"];

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sizes,
    Servings,
    Drinks,
    MilkOptions,
    ExtrasExamples,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Self; 5] = [
        Self::Sizes,
        Self::Servings,
        Self::Drinks,
        Self::MilkOptions,
        Self::ExtrasExamples,
    ];

    /// Key used for this category in serialized menus
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sizes => "sizes",
            Self::Servings => "servings",
            Self::Drinks => "drinks",
            Self::MilkOptions => "milk_options",
            Self::ExtrasExamples => "extras_examples",
        }
    }
}

/// Categorized menu of options
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Menu {
    pub sizes: &'static [&'static str],
    pub servings: &'static [&'static str],
    pub drinks: &'static [&'static str],
    pub milk_options: &'static [&'static str],
    pub extras_examples: &'static [&'static str],
}

/// The Java Gen menu
pub static MENU: Menu = Menu {
    sizes: &[
        "Short (8 oz) — hot only",
        "Tall (12 oz)",
        "Grande (16 oz)",
        "Venti Hot (20 oz)",
        "Venti Cold (24 oz)",
        "Trenta (30 oz) — cold only",
    ],
    servings: &["Hot", "Iced", "Blended / Frappé"],
    drinks: &[
        // Espresso-based
        "Espresso",
        "Americano",
        "Latte",
        "Cappuccino",
        "Flat White",
        "Macchiato",
        "Cortado",
        "Mocha",
        "Caramel Macchiato",
        "Café Au Lait",
        // Cold / brew
        "Cold Brew",
        "Iced Coffee",
        "Nitro Cold Brew",
        "Iced Latte",
        "Iced Mocha",
        // Specialty
        "Pumpkin Spice Latte",
        "Chai Tea Latte",
        "Matcha Latte",
        "London Fog",
        "Iced Tea (Black/Green/Herbal)",
        // Blended
        "Coffee Frappé",
        "Cream Frappé",
        // Others
        "Hot Chocolate",
        "Steamer (milk + syrup)",
        "Affogato",
    ],
    milk_options: &[
        "Whole",
        "2% (Reduced Fat)",
        "Nonfat (Skim)",
        "Oat",
        "Almond",
        "Soy",
        "Coconut",
        "Cashew",
        "Macadamia",
        "Pea Protein",
        "Half-and-half / Breve",
        "Heavy Cream",
        "Vanilla Sweet Cream",
        "No milk / Black",
    ],
    extras_examples: &[
        "Extra espresso shot",
        "Ristretto shot",
        "Decaf or half-caf",
        "Classic syrup / simple syrup",
        "Vanilla syrup",
        "Caramel syrup",
        "Hazelnut syrup",
        "Peppermint syrup",
        "Sugar-free vanilla",
        "Brown sugar syrup",
        "Cinnamon dolce syrup",
        "Whipped cream",
        "Cold foam",
        "Sweet cream foam",
        "Salted caramel drizzle",
        "Mocha drizzle",
        "Caramel drizzle",
        "Espresso drizzle",
        "Extra hot",
        "Light ice / No ice",
        "Room for cream",
        "Substitute milk (charge may apply)",
        "No extras",
    ],
};

impl Menu {
    /// Options listed under a category
    #[must_use]
    pub const fn options(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Sizes => self.sizes,
            Category::Servings => self.servings,
            Category::Drinks => self.drinks,
            Category::MilkOptions => self.milk_options,
            Category::ExtrasExamples => self.extras_examples,
        }
    }

    /// Check whether `value` names an entry in `category`
    ///
    /// Case-insensitive. A value matches an entry when it equals the whole
    /// entry, the entry's leading label, or the first words of that label, so
    /// `"tall"` matches `"Tall (12 oz)"` and `"Venti"` matches
    /// `"Venti Hot (20 oz)"`. Milk also accepts "none", "no milk" and "black".
    #[must_use]
    pub fn contains(&self, category: Category, value: &str) -> bool {
        let wanted = value.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        if category == Category::MilkOptions && NO_MILK_ALIASES.contains(&wanted.as_str()) {
            return true;
        }

        self.options(category).iter().any(|entry| {
            let entry = entry.to_lowercase();
            let label = leading_label(&entry);
            entry == wanted
                || label == wanted
                || label
                    .strip_prefix(wanted.as_str())
                    .is_some_and(|rest| rest.starts_with(' '))
        })
    }

    /// Render the greeting-time menu announcement
    ///
    /// Pure function of the table; repeated calls return identical text.
    #[must_use]
    pub fn format_menu_text(&self) -> String {
        [
            "Welcome to Java Gen! Here's a quick look at what we're brewing today.".to_string(),
            format!("We serve drinks: {}.", self.servings.join(", ")),
            format!("Popular drinks: {}", preview(self.drinks)),
            format!("Popular extras: {}", preview(self.extras_examples)),
            "I'll only go over the menu once, so just tell me what you'd like!".to_string(),
        ]
        .join("\n")
    }
}

/// Render the announcement for the static Java Gen menu
#[must_use]
pub fn format_menu_text() -> String {
    MENU.format_menu_text()
}

fn preview(options: &[&str]) -> String {
    let shown: Vec<&str> = options.iter().take(PREVIEW_LEN).copied().collect();
    format!("{}, {ELLIPSIS}", shown.join(", "))
}

/// Label before any parenthesised note or dash annotation
fn leading_label(entry: &str) -> &str {
    let cut = entry
        .find(" (")
        .into_iter()
        .chain(entry.find(" —"))
        .min()
        .unwrap_or(entry.len());
    entry[..cut].trim()
}
