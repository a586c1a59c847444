// ABOUTME: Goal classification from waist-hip ratio, FFMI and body fat using a fixed decision table
// ABOUTME: Produces the goal category, caloric plan and presentation text for the result record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Engine
//!
//! The decision table is evaluated in a fixed order and the first matching
//! row wins:
//!
//! | Order | Condition | Goal | Caloric plan |
//! |---|---|---|---|
//! | 1 | WHR > 0.90 (M) / 0.85 (F) | Visceral reduction | deficit `clamp(round((WHR - t) * 100), 10, 20)` % |
//! | 2 | FFMI < 19 (M) / 15 (F) | Hypertrophy | surplus `300 + round((t - FFMI) * 50)` kcal |
//! | 3 | 15 ≤ body fat ≤ 25 | Advanced recomposition | ±5% cycling on training/rest days |
//! | 4 | otherwise | Standard plan | balanced |
//!
//! Descriptive text is not part of the decision. It is supplied through
//! [`GoalPresentation`] so a service can localize it or load it from data.

use crate::physiological_constants::goal_thresholds;
use pierre_anthro_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Closed set of goal outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Abdominal fat reduction comes first
    VisceralReduction,
    /// Lean mass gain comes first
    Hypertrophy,
    /// Simultaneous muscle gain and fat loss
    AdvancedRecomposition,
    /// Balanced general plan
    StandardPlan,
}

impl GoalCategory {
    /// Every category in decision-table order
    pub const ALL: [Self; 4] = [
        Self::VisceralReduction,
        Self::Hypertrophy,
        Self::AdvancedRecomposition,
        Self::StandardPlan,
    ];

    /// Human-readable goal name reported as `primary_goal`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VisceralReduction => "Visceral reduction",
            Self::Hypertrophy => "Hypertrophy",
            Self::AdvancedRecomposition => "Advanced recomposition",
            Self::StandardPlan => "Standard plan",
        }
    }

    /// Stable identifier, matches the serde form
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::VisceralReduction => "visceral_reduction",
            Self::Hypertrophy => "hypertrophy",
            Self::AdvancedRecomposition => "advanced_recomposition",
            Self::StandardPlan => "standard_plan",
        }
    }

    /// Resolve a category from its label or key, ignoring case
    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|category| {
            category.label().eq_ignore_ascii_case(value) || category.key().eq_ignore_ascii_case(value)
        })
    }
}

/// Energy intake adjustment attached to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaloricPlan {
    /// Daily deficit as a percentage of maintenance
    Deficit {
        /// Percent below maintenance, within [10, 20]
        percent: i64,
    },
    /// Daily surplus in kcal
    Surplus {
        /// kcal above maintenance
        kcal: i64,
    },
    /// Intake raised on training days and lowered on rest days
    Cyclical {
        /// Percent swing either side of maintenance
        adjustment_percent: u8,
    },
    /// Maintenance or a moderate deficit
    Balanced,
}

/// Outcome of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalDecision {
    /// Goal selected
    pub category: GoalCategory,
    /// Caloric plan for that goal
    pub plan: CaloricPlan,
}

/// Sex-specific thresholds used by the decision table
#[derive(Debug, Clone, Copy, PartialEq)]
struct GoalThresholds {
    waist_hip_ratio: f64,
    fat_free_mass_index: f64,
}

impl GoalThresholds {
    const fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self {
                waist_hip_ratio: goal_thresholds::WHR_MALE,
                fat_free_mass_index: goal_thresholds::FFMI_MALE,
            },
            Gender::Female => Self {
                waist_hip_ratio: goal_thresholds::WHR_FEMALE,
                fat_free_mass_index: goal_thresholds::FFMI_FEMALE,
            },
        }
    }
}

/// Run the goal decision table
///
/// Inputs are the already rounded metrics as reported to the caller, so the
/// decision is reproducible from the response alone.
#[must_use]
pub fn determine_goal(
    gender: Gender,
    waist_hip_ratio: f64,
    fat_free_mass_index: f64,
    body_fat_percentage: f64,
) -> GoalDecision {
    let thresholds = GoalThresholds::for_gender(gender);
    let (recomp_min, recomp_max) = goal_thresholds::RECOMPOSITION_BODY_FAT;

    let excess_visceral = waist_hip_ratio > thresholds.waist_hip_ratio;
    let low_lean_mass = fat_free_mass_index < thresholds.fat_free_mass_index;
    let recomposition_band = (recomp_min..=recomp_max).contains(&body_fat_percentage);

    let decision = match (excess_visceral, low_lean_mass, recomposition_band) {
        (true, _, _) => GoalDecision {
            category: GoalCategory::VisceralReduction,
            plan: CaloricPlan::Deficit {
                percent: deficit_percent(waist_hip_ratio - thresholds.waist_hip_ratio),
            },
        },
        (false, true, _) => GoalDecision {
            category: GoalCategory::Hypertrophy,
            plan: CaloricPlan::Surplus {
                kcal: surplus_kcal(thresholds.fat_free_mass_index - fat_free_mass_index),
            },
        },
        (false, false, true) => GoalDecision {
            category: GoalCategory::AdvancedRecomposition,
            plan: CaloricPlan::Cyclical {
                adjustment_percent: goal_thresholds::RECOMPOSITION_CYCLE_PERCENT,
            },
        },
        (false, false, false) => GoalDecision {
            category: GoalCategory::StandardPlan,
            plan: CaloricPlan::Balanced,
        },
    };

    tracing::debug!(
        ?gender,
        waist_hip_ratio,
        fat_free_mass_index,
        body_fat_percentage,
        goal = decision.category.key(),
        "Determined goal"
    );

    decision
}

/// Whole hundredths in a difference of two 2-decimal metrics
fn hundredths(difference: f64) -> i64 {
    (difference * 100.0).round() as i64
}

fn deficit_percent(excess_ratio: f64) -> i64 {
    let (min, max) = goal_thresholds::DEFICIT_PERCENT_BOUNDS;
    hundredths(excess_ratio).clamp(min, max)
}

/// Surplus for a positive FFMI shortfall, halves rounded up in integer arithmetic
fn surplus_kcal(ffmi_shortfall: f64) -> i64 {
    let scaled = hundredths(ffmi_shortfall) * goal_thresholds::SURPLUS_KCAL_PER_FFMI_POINT;
    goal_thresholds::SURPLUS_BASE_KCAL + (scaled + 50) / 100
}

/// Text shown with a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalText {
    /// One-line summary of the goal
    pub description: String,
    /// Training emphasis
    pub training_focus: String,
    /// Caloric strategy wording, used by goals without a numeric target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caloric_strategy: Option<String>,
}

/// Source of descriptive goal text
pub trait GoalPresentation: Send + Sync {
    /// Text for `category`, `None` to fall back to the built-in wording
    fn goal_text(&self, category: GoalCategory) -> Option<GoalText>;
}

/// English wording shipped with the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGoalText;

impl BuiltinGoalText {
    /// Built-in text for `category`
    #[must_use]
    pub fn text(category: GoalCategory) -> GoalText {
        let (description, training_focus, caloric_strategy) = match category {
            GoalCategory::VisceralReduction => (
                "Prioritize abdominal fat reduction",
                "High-intensity interval training and aerobic exercise",
                None,
            ),
            GoalCategory::Hypertrophy => (
                "Prioritize muscle mass gain",
                "Strength and hypertrophy training",
                None,
            ),
            GoalCategory::AdvancedRecomposition => (
                "Optimal balance between muscle gain and fat loss",
                "Mixed strength and metabolic conditioning",
                Some(format!(
                    "Nutrient cycling: ±{}% calories on training/rest days",
                    goal_thresholds::RECOMPOSITION_CYCLE_PERCENT
                )),
            ),
            GoalCategory::StandardPlan => (
                "Balanced body composition plan",
                "Combined strength and endurance training",
                Some("Caloric balance or moderate deficit".to_owned()),
            ),
        };

        GoalText {
            description: description.to_owned(),
            training_focus: training_focus.to_owned(),
            caloric_strategy,
        }
    }
}

impl GoalPresentation for BuiltinGoalText {
    fn goal_text(&self, category: GoalCategory) -> Option<GoalText> {
        Some(Self::text(category))
    }
}

/// Numeric target or strategy wording; exactly one appears in a goal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaloricTarget {
    /// Percent below maintenance
    CaloricDeficitPercent(i64),
    /// kcal above maintenance
    CaloricSurplusKcal(i64),
    /// Free-text strategy
    CaloricStrategy(String),
}

/// Goal as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Stable goal identifier
    pub category: GoalCategory,
    /// Goal name
    pub primary_goal: String,
    /// Goal summary
    pub description: String,
    /// Training emphasis
    pub training_focus: String,
    /// Caloric target, flattened to one of three keys
    #[serde(flatten)]
    pub caloric: CaloricTarget,
}

impl GoalRecord {
    /// Attach presentation text to a decision
    #[must_use]
    pub fn from_decision(decision: GoalDecision, presentation: &dyn GoalPresentation) -> Self {
        let builtin = BuiltinGoalText::text(decision.category);
        let text = presentation
            .goal_text(decision.category)
            .unwrap_or_else(|| builtin.clone());

        let caloric = match decision.plan {
            CaloricPlan::Deficit { percent } => CaloricTarget::CaloricDeficitPercent(percent),
            CaloricPlan::Surplus { kcal } => CaloricTarget::CaloricSurplusKcal(kcal),
            CaloricPlan::Cyclical { .. } | CaloricPlan::Balanced => CaloricTarget::CaloricStrategy(
                text.caloric_strategy
                    .or(builtin.caloric_strategy)
                    .unwrap_or_default(),
            ),
        };

        Self {
            category: decision.category,
            primary_goal: decision.category.label().to_owned(),
            description: text.description,
            training_focus: text.training_focus,
            caloric,
        }
    }
}
