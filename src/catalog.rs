// ABOUTME: Static ingredient catalog used for suggestions and lookup
// ABOUTME: Ordered category to ingredient-name mapping plus a quick-pick list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;

/// Category name paired with its ingredient names
type Category = (&'static str, &'static [&'static str]);

const CATEGORIES: &[Category] = &[
    (
        "Proteins",
        &[
            "chicken", "beef", "fish", "shrimp", "egg", "tofu", "lentils", "beans", "pork",
            "lamb", "turkey", "salmon", "tuna", "cod", "tilapia", "shrimp", "prawns", "crab",
            "lobster", "mussels", "clams", "scallops", "tempeh", "seitan", "edamame",
            "chickpeas", "black beans", "kidney beans", "pinto beans", "navy beans",
            "white beans", "ground beef", "chicken breast", "chicken thighs", "chicken wings",
            "duck", "goose", "venison", "bison", "rabbit", "quail", "quinoa", "soybeans",
            "peanuts", "almonds", "walnuts", "cashews", "pecans", "hazelnuts", "pistachios",
            "sunflower seeds", "pumpkin seeds", "chia seeds", "flax seeds", "hemp seeds",
        ],
    ),
    (
        "Vegetables",
        &[
            "broccoli", "spinach", "carrot", "potato", "tomato", "onion", "garlic",
            "bell pepper", "mushroom", "cabbage", "cauliflower", "zucchini", "eggplant",
            "cucumber", "lettuce", "kale", "celery", "asparagus", "green beans", "peas", "corn",
            "sweet potato", "pumpkin", "butternut squash", "acorn squash", "beets", "radish",
            "turnip", "parsnip", "rutabaga", "artichoke", "brussels sprouts", "bok choy",
            "swiss chard", "collard greens", "mustard greens", "arugula", "watercress",
            "endive", "escarole", "fennel", "leek", "shallot", "scallion", "chives", "ginger",
            "turmeric", "jalapeno", "habanero", "serrano", "poblano", "anaheim",
        ],
    ),
    (
        "Fruits",
        &[
            "apple", "banana", "orange", "lemon", "lime", "strawberry", "blueberry",
            "raspberry", "blackberry", "grape", "watermelon", "melon", "pineapple", "mango",
            "papaya", "kiwi", "peach", "plum", "pear", "cherry", "apricot", "fig", "date",
            "prune", "raisin", "cranberry", "pomegranate", "guava", "passion fruit",
            "dragon fruit", "star fruit", "persimmon", "lychee", "rambutan", "durian",
            "jackfruit", "breadfruit", "soursop", "acai", "goji berry",
        ],
    ),
    (
        "Grains & Carbs",
        &[
            "rice", "pasta", "bread", "flour", "quinoa", "oats", "corn", "barley", "couscous",
            "bulgur", "farro", "spelt", "rye", "millet", "sorghum", "buckwheat", "wheat",
            "semolina", "polenta", "grits", "tapioca", "arrowroot", "potato starch",
            "cornstarch", "breadcrumbs", "panko", "crackers", "cereal", "granola", "muesli",
            "popcorn", "tortilla", "wrap", "pita", "naan", "bagel", "croissant", "muffin",
            "pancake", "waffle",
        ],
    ),
    (
        "Dairy & Alternatives",
        &[
            "cheese", "milk", "butter", "yogurt", "cream", "sour cream", "cream cheese",
            "mozzarella", "cheddar", "parmesan", "ricotta", "feta", "gouda", "brie",
            "camembert", "blue cheese", "swiss cheese", "provolone", "monterey jack",
            "pepper jack", "colby", "havarti", "mascarpone", "cottage cheese", "heavy cream",
            "whipping cream", "half and half", "evaporated milk", "condensed milk",
            "buttermilk", "kefir", "greek yogurt", "skyr", "coconut milk", "almond milk",
            "soy milk", "oat milk", "rice milk", "cashew milk", "hemp milk", "vegan cheese",
            "nutritional yeast", "vegan butter",
        ],
    ),
    (
        "Seasonings & Oils",
        &[
            "salt", "pepper", "sugar", "honey", "soy sauce", "vinegar", "olive oil",
            "vegetable oil", "canola oil", "coconut oil", "avocado oil", "sesame oil",
            "peanut oil", "sunflower oil", "grapeseed oil", "walnut oil", "almond oil",
            "flaxseed oil", "mustard oil", "spices", "herbs", "ginger", "garlic powder",
            "onion powder", "paprika", "cumin", "coriander", "turmeric", "cinnamon", "nutmeg",
            "cloves", "cardamom", "star anise", "fennel seeds", "mustard seeds",
            "sesame seeds", "poppy seeds", "caraway seeds", "celery seeds", "dill seeds",
            "basil", "oregano", "thyme", "rosemary", "sage", "parsley", "cilantro", "mint",
            "chives", "dill", "tarragon", "marjoram", "bay leaf", "lemongrass", "kaffir lime",
            "curry leaves", "vanilla", "cocoa", "chocolate", "coffee", "tea", "matcha",
        ],
    ),
];

const COMMON_INGREDIENTS: &[&str] = &[
    "chicken", "beef", "fish", "shrimp", "egg", "rice", "pasta", "potato", "bread", "flour",
    "tomato", "onion", "garlic", "spinach", "broccoli", "carrot", "bell pepper", "mushroom",
    "cheese", "milk", "butter", "oil", "salt", "pepper", "sugar", "lemon", "lime", "honey",
    "soy sauce", "vinegar",
];

/// Read-only ingredient catalog.
///
/// Used for suggestions only; it has no influence on what the service recommends.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientCatalog;

impl IngredientCatalog {
    /// Category names in display order
    #[must_use]
    pub fn category_names(&self) -> Vec<&'static str> {
        CATEGORIES.iter().map(|(name, _)| *name).collect()
    }

    /// Ingredients of one category, or every ingredient flattened in category order.
    ///
    /// An unknown category yields an empty list.
    #[must_use]
    pub fn suggestions(&self, category: Option<&str>) -> Vec<String> {
        match category {
            Some(wanted) => CATEGORIES
                .iter()
                .find(|(name, _)| *name == wanted)
                .map_or_else(
                    || {
                        warn!(category = wanted, "Ingredient category not found");
                        Vec::new()
                    },
                    |(_, items)| to_owned_list(items),
                ),
            None => CATEGORIES
                .iter()
                .flat_map(|(_, items)| items.iter().map(|item| (*item).to_owned()))
                .collect(),
        }
    }

    /// Owned copy of every category, in display order
    #[must_use]
    pub fn categorized(&self) -> Vec<(String, Vec<String>)> {
        CATEGORIES
            .iter()
            .map(|(name, items)| ((*name).to_owned(), to_owned_list(items)))
            .collect()
    }

    /// Short list of everyday ingredients for quick selection
    #[must_use]
    pub fn common_ingredients(&self) -> Vec<String> {
        to_owned_list(COMMON_INGREDIENTS)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
