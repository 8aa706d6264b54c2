//! Pure, render-agnostic dialog logic split into submodules.

pub mod eligibility;

pub use eligibility::{MACHINE_LOCALE_MARKER, eligible_addons, normalize_locale};
