pub mod amount_utils;
pub mod input_utils;
pub mod time_utils;

pub use amount_utils::{positive_amount, round_amount, NumberInput};
pub use input_utils::non_blank;
pub use time_utils::{
    day_label, month_label, parse_date_input, parse_datetime_input, today_local, trailing_days,
    trailing_months, DateWindow,
};
