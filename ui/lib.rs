mod button;
mod callout;
mod form;
pub mod util;

pub use self::button::*;
pub use self::callout::*;
pub use self::form::*;
