pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_restriction, prompt_yes_no,
};
pub use render::{display_catalog, display_diet, display_meal_plan, display_restrictions};
