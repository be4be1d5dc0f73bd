mod bullet_points;
mod prompt;
mod style;

pub use bullet_points::{BulletPointPrinter, LineWriter};
pub use prompt::prompt_yes_no;
pub use style::{ConsoleStyle, InteractiveStyle};
