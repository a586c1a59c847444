// ABOUTME: YAML recommendation catalog with per-goal nutrition, training and supplement advice
// ABOUTME: Also supplies goal description text to the metrics engine through GoalPresentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation catalog
//!
//! The catalog is plain data: one entry per [`GoalCategory`] keyed by its
//! snake-case name. It is loaded once at startup, from `RECOMMENDATIONS_PATH`
//! when set or from the copy bundled into the binary otherwise.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pierre_anthro_core::errors::{AppError, AppResult, ErrorCode};
use pierre_anthro_intelligence::{GoalCategory, GoalPresentation, GoalText};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Catalog shipped with the service
const BUNDLED_CATALOG: &str = include_str!("../resources/recommendations.yaml");

/// Message returned when a goal has no catalog entry
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No specific recommendations for this goal";

/// Advice lists for one goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Nutrition guidance
    #[serde(default)]
    pub nutrition: Vec<String>,
    /// Training guidance
    #[serde(default)]
    pub training: Vec<String>,
    /// Supplement guidance
    #[serde(default)]
    pub supplements: Vec<String>,
}

/// Catalog entry for one goal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoalEntry {
    /// Extra `primary_goal` names accepted on lookup
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Goal text shown in calculation results
    #[serde(flatten)]
    pub text: GoalText,
    /// Advice lists
    #[serde(flatten)]
    pub recommendations: Recommendations,
}

/// Result of looking up a goal by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecommendationLookup {
    /// Goal found in the catalog
    Found(Recommendations),
    /// Goal unknown or without an entry
    NotFound {
        /// Explanation for the client
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    goals: HashMap<GoalCategory, GoalEntry>,
}

/// Per-goal recommendation catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCatalog {
    goals: HashMap<GoalCategory, GoalEntry>,
}

impl RecommendationCatalog {
    /// Parse a catalog from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or names an unknown goal
    pub fn from_yaml_str(yaml_content: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml_content).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("Invalid recommendation catalog: {e}"),
            )
        })?;

        for category in GoalCategory::ALL {
            if !file.goals.contains_key(&category) {
                warn!(
                    goal = category.key(),
                    "Recommendation catalog has no entry for goal, built-in text will be used"
                );
            }
        }

        Ok(Self { goals: file.goals })
    }

    /// Catalog bundled with the service
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML fails to parse
    pub fn bundled() -> AppResult<Self> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Failed to read recommendation catalog {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;

        let catalog = Self::from_yaml_str(&content)?;
        info!(
            path = %path.display(),
            goals = catalog.goals.len(),
            "Loaded recommendation catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, the bundled catalog otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the selected catalog cannot be read or parsed
    pub fn from_path_or_bundled(path: Option<&Path>) -> AppResult<Self> {
        path.map_or_else(Self::bundled, Self::load)
    }

    /// Number of goals with an entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// True when the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Entry for `category`
    #[must_use]
    pub fn entry(&self, category: GoalCategory) -> Option<&GoalEntry> {
        self.goals.get(&category)
    }

    /// Resolve a `primary_goal` name to a category
    ///
    /// Accepts the goal label, its snake-case key, or any catalog alias,
    /// ignoring case.
    #[must_use]
    pub fn resolve(&self, primary_goal: &str) -> Option<GoalCategory> {
        GoalCategory::from_label(primary_goal).or_else(|| {
            let wanted = primary_goal.trim().to_lowercase();
            self.goals
                .iter()
                .find(|(_, entry)| entry.aliases.iter().any(|a| a.to_lowercase() == wanted))
                .map(|(category, _)| *category)
        })
    }

    /// Advice for a `primary_goal` name
    #[must_use]
    pub fn lookup(&self, primary_goal: &str) -> RecommendationLookup {
        self.resolve(primary_goal)
            .and_then(|category| self.entry(category))
            .map_or_else(
                || RecommendationLookup::NotFound {
                    message: NO_RECOMMENDATIONS_MESSAGE.to_owned(),
                },
                |entry| RecommendationLookup::Found(entry.recommendations.clone()),
            )
    }
}

impl GoalPresentation for RecommendationCatalog {
    fn goal_text(&self, category: GoalCategory) -> Option<GoalText> {
        self.entry(category).map(|entry| entry.text.clone())
    }
}
