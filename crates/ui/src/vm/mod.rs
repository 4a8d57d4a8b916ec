mod profile_vm;
mod time_fmt;

pub use profile_vm::{
    ActivityVm, BadgeCardVm, ProgressRowVm, map_activity, map_badge_cards, map_progress_rows,
    status_class, status_label,
};
pub use time_fmt::{format_date, format_datetime};
