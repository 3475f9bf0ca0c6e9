//! Configuration section definitions.
//!
//! Each module corresponds to a section in `importmap.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `paths`  | `[paths]`    | Route table and artifact locations   |
//! | `render` | `[render]`   | Shape of the generated artifact      |

mod paths;
mod render;

pub use paths::PathsConfig;
pub use render::{LoaderStyle, RenderConfig};
