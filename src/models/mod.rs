pub mod scene;
pub mod screenplay;
pub mod location;
pub mod conf;

pub use scene::{Scene, DialogueLine};
pub use screenplay::ScreenplayDocument;
pub use location::Location;
pub use conf::Conf;
