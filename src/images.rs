// ABOUTME: Display image lookup collaborator for recommended recipes
// ABOUTME: Async finder trait with a disabled default and a static name-to-URL table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use recipe_core::models::Recipe;
use std::collections::HashMap;
use tracing::debug;

/// Maps a recipe name to a display image URL
#[async_trait]
pub trait ImageFinder: Send + Sync {
    /// Image URL for `recipe_name`, if one is known
    async fn find_image(&self, recipe_name: &str) -> Option<String>;
}

/// Finder that never returns an image
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageFinder;

#[async_trait]
impl ImageFinder for NoImageFinder {
    async fn find_image(&self, _recipe_name: &str) -> Option<String> {
        None
    }
}

/// Fixed lookup table, matched case-insensitively on the trimmed name
#[derive(Debug, Clone, Default)]
pub struct StaticImageFinder {
    images: HashMap<String, String>,
}

impl StaticImageFinder {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one entry
    #[must_use]
    pub fn with_image(mut self, recipe_name: &str, url: impl Into<String>) -> Self {
        self.images.insert(Self::key(recipe_name), url.into());
        self
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

impl<N: AsRef<str>, U: Into<String>> FromIterator<(N, U)> for StaticImageFinder {
    fn from_iter<T: IntoIterator<Item = (N, U)>>(iter: T) -> Self {
        Self {
            images: iter
                .into_iter()
                .map(|(name, url)| (Self::key(name.as_ref()), url.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl ImageFinder for StaticImageFinder {
    async fn find_image(&self, recipe_name: &str) -> Option<String> {
        self.images.get(&Self::key(recipe_name)).cloned()
    }
}

/// Look up and attach an image to each recipe; misses leave `image_link` unset
pub async fn attach_images(finder: &dyn ImageFinder, recipes: &mut [Recipe]) {
    for recipe in recipes.iter_mut() {
        recipe.image_link = finder.find_image(&recipe.name).await;
        if recipe.image_link.is_none() {
            debug!(recipe = %recipe.name, "No image found");
        }
    }
}
