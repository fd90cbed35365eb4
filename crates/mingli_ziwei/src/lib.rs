//! Purple Star (Ziwei Doushu, 紫微斗数) natal chart engine.
//!
//! This crate provides:
//! - Life and body palace placement from lunar month, day and hour
//! - Main and auxiliary star arrangement on the twelve-branch ring
//! - Four transformations by year stem
//! - Brightness grades, palace records with summaries, and major periods
//!
//! The placement is a simplified relative model: the main stars sit at
//! fixed offsets from Ziwei rather than following the full bureau rules.

pub mod brightness;
pub mod chart;
pub mod palace;
pub mod periods;
pub mod placement;
pub mod star;
pub mod transforms;

pub use brightness::{is_tabulated, palace_brightness, star_brightness};
pub use chart::{PurpleStarChart, compute_purple_star};
pub use palace::{ALL_PALACE_NAMES, Palace, PalaceName, TransformedStar, build_palaces};
pub use periods::{
    FIRST_PERIOD_AGE, MajorPeriod, PERIOD_YEARS, PeriodFortune, calculate_major_periods,
    cross_reference,
};
pub use placement::{
    PALACE_COUNT, StarRing, ZIWEI_DAY_OFFSET, arrange_auxiliary_stars, arrange_main_stars,
    calculate_body_palace, calculate_life_palace, find_star, lucun_position, tianfu_position,
    ziwei_position,
};
pub use star::{
    ALL_AUX_STARS, ALL_MAIN_STARS, ALL_TRANSFORMS, AuxStar, Brightness, MainStar, Star, Transform,
};
pub use transforms::{FourTransforms, calculate_four_transforms};
