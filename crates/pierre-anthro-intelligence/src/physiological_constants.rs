// ABOUTME: Physiological ranges, regression coefficients and classification thresholds
// ABOUTME: Published constants behind validation, body-composition and goal decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on sports science research
//!
//! Every number the engine compares against or multiplies by lives here so
//! that the formulas in the other modules read as the published equations.

/// Accepted input domains, inclusive on both ends
///
/// References:
/// - ISAK (2011). International Standards for Anthropometric Assessment
pub mod ranges {
    /// Age in years
    pub const AGE_YEARS: (f64, f64) = (10.0, 120.0);
    /// Body mass in kilograms
    pub const WEIGHT_KG: (f64, f64) = (30.0, 300.0);
    /// Stature in centimetres
    pub const HEIGHT_CM: (f64, f64) = (100.0, 250.0);
    /// Waist and hip circumference in centimetres
    pub const CIRCUMFERENCE_CM: (f64, f64) = (20.0, 200.0);
    /// Skinfold thickness in millimetres (Harpenden caliper range)
    pub const SKINFOLD_MM: (f64, f64) = (3.0, 70.0);
    /// Plausible BMI for the supplied weight and height
    pub const BMI_COHERENCE: (f64, f64) = (12.0, 60.0);
}

/// Body Roundness Index coefficients
///
/// Reference: Thomas, D.M. et al. (2013). Relationships between body roundness
/// with body fat and visceral adipose tissue emerging from a new geometrical model.
/// *Obesity*, 21(11), 2264-2271. <https://doi.org/10.1002/oby.20408>
pub mod body_roundness {
    /// Intercept
    pub const INTERCEPT: f64 = 364.2;
    /// Eccentricity coefficient
    pub const ECCENTRICITY_COEF: f64 = 365.5;
}

/// Generalized Jackson-Pollock three-site body density equations
///
/// References:
/// - Jackson, A.S. & Pollock, M.L. (1978). Generalized equations for predicting
///   body density of men. *British Journal of Nutrition*, 40(3), 497-504.
/// - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). Generalized equations for
///   predicting body density of women. *Medicine and Science in Sports and
///   Exercise*, 12(3), 175-181.
pub mod jackson_pollock {
    /// Coefficients of `density = intercept - a*S + b*S^2 - c*age`
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DensityCoefficients {
        /// Constant term
        pub intercept: f64,
        /// Linear skinfold-sum coefficient
        pub sum_linear: f64,
        /// Quadratic skinfold-sum coefficient
        pub sum_quadratic: f64,
        /// Age coefficient
        pub age: f64,
    }

    /// Men
    pub const MALE: DensityCoefficients = DensityCoefficients {
        intercept: 1.109_38,
        sum_linear: 0.000_826_7,
        sum_quadratic: 0.000_001_6,
        age: 0.000_257_4,
    };

    /// Women
    pub const FEMALE: DensityCoefficients = DensityCoefficients {
        intercept: 1.099_492_1,
        sum_linear: 0.000_992_9,
        sum_quadratic: 0.000_002_3,
        age: 0.000_139_2,
    };
}

/// Siri two-compartment model: `%BF = 495 / density - 450`
///
/// Reference: Siri, W.E. (1961). Body composition from fluid spaces and density.
pub mod siri {
    /// Numerator applied to body density
    pub const DENSITY_NUMERATOR: f64 = 495.0;
    /// Offset subtracted from the quotient
    pub const OFFSET: f64 = 450.0;
}

/// Goal decision thresholds
pub mod goal_thresholds {
    /// Waist-hip ratio above which visceral fat reduction takes priority (men)
    /// Reference: WHO (2008). Waist circumference and waist-hip ratio: report of a WHO expert consultation
    pub const WHR_MALE: f64 = 0.90;
    /// Waist-hip ratio above which visceral fat reduction takes priority (women)
    pub const WHR_FEMALE: f64 = 0.85;
    /// FFMI below which hypertrophy takes priority (men, kg/m²)
    /// Reference: Kouri, E.M. et al. (1995). Fat-free mass index in users and nonusers
    /// of anabolic-androgenic steroids. *Clinical Journal of Sport Medicine*, 5(4), 223-228.
    pub const FFMI_MALE: f64 = 19.0;
    /// FFMI below which hypertrophy takes priority (women, kg/m²)
    pub const FFMI_FEMALE: f64 = 15.0;
    /// Body-fat band suited to recomposition (percent, inclusive)
    pub const RECOMPOSITION_BODY_FAT: (f64, f64) = (15.0, 25.0);
    /// Caloric deficit bounds for visceral reduction (percent)
    pub const DEFICIT_PERCENT_BOUNDS: (i64, i64) = (10, 20);
    /// Base caloric surplus for hypertrophy (kcal/day)
    pub const SURPLUS_BASE_KCAL: i64 = 300;
    /// Extra surplus per FFMI point below threshold (kcal/day)
    pub const SURPLUS_KCAL_PER_FFMI_POINT: i64 = 50;
    /// Training/rest day caloric swing for recomposition (percent)
    pub const RECOMPOSITION_CYCLE_PERCENT: u8 = 5;
}

/// Repeated-measurement quality
pub mod measurement_quality {
    /// Maximum acceptable coefficient of variation between repeats (percent)
    /// Reference: ISAK (2011). Technical error of measurement guidelines
    pub const MAX_COEFFICIENT_OF_VARIATION: f64 = 5.0;
    /// Minimum number of repeats needed to estimate variation
    pub const MIN_REPEATS: usize = 2;
}

/// Interpretation bands used to label computed metrics
///
/// References:
/// - WHO (2000). Obesity: preventing and managing the global epidemic (BMI classes)
/// - Ashwell, M. & Hsieh, S.D. (2005). Six reasons why the waist-to-height ratio is a
///   rapid and effective global indicator for health risks of obesity
/// - American Council on Exercise body-fat categories
pub mod interpretation {
    /// BMI upper bounds (exclusive): severe, moderate, mild thinness, normal,
    /// overweight, obesity I, obesity II
    pub const BMI_BOUNDS: [f64; 7] = [16.0, 17.0, 18.5, 25.0, 30.0, 35.0, 40.0];

    /// Waist-hip ratio upper bounds (inclusive): optimal, moderate risk (men)
    pub const WHR_MALE: (f64, f64) = (0.90, 1.0);
    /// Waist-hip ratio upper bounds (inclusive): optimal, moderate risk (women)
    pub const WHR_FEMALE: (f64, f64) = (0.85, 0.95);

    /// Waist-height ratio upper bounds (inclusive): healthy, moderate risk
    pub const WAIST_HEIGHT: (f64, f64) = (0.5, 0.6);

    /// Body-fat bounds (men): essential below first, then athletic, fitness,
    /// acceptable upper bounds (inclusive)
    pub const BODY_FAT_MALE: [f64; 4] = [6.0, 13.0, 19.0, 24.0];
    /// Body-fat bounds (women)
    pub const BODY_FAT_FEMALE: [f64; 4] = [13.0, 20.0, 25.0, 31.0];

    /// FFMI bounds (men): low below first, moderate below second, optimal up
    /// to third (inclusive)
    pub const FFMI_MALE: [f64; 3] = [17.0, 19.0, 25.0];
    /// FFMI bounds (women)
    pub const FFMI_FEMALE: [f64; 3] = [13.0, 15.0, 22.0];
}
