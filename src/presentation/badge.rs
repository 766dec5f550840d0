//! Stage badge styling.

use crate::tracker::domain::Stage;

/// Returns the utility classes used to colour a stage badge.
#[must_use]
pub const fn badge_class(stage: Stage) -> &'static str {
    match stage {
        Stage::Saved => "bg-slate-50 text-slate-700 ring-slate-200",
        Stage::Applied => "bg-blue-50 text-blue-700 ring-blue-200",
        Stage::Oa => "bg-purple-50 text-purple-700 ring-purple-200",
        Stage::Interview => "bg-amber-50 text-amber-800 ring-amber-200",
        Stage::Offer => "bg-emerald-50 text-emerald-700 ring-emerald-200",
        Stage::Rejected => "bg-rose-50 text-rose-700 ring-rose-200",
    }
}
