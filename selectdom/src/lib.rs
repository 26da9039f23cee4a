pub mod buffer;
pub mod config;
pub mod encode;
pub mod error;
pub mod event;
pub mod field;
pub mod filter;
pub mod form;
pub mod hit;
pub mod layout;
pub mod registry;
mod render;
pub mod state;
pub mod style;
pub mod terminal;
pub mod text;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use config::SelectConfig;
pub use encode::{decode_values, encode_values, SEPARATOR};
pub use error::ConfigError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use field::{FieldKind, FormField};
pub use form::Form;
pub use hit::hit_test;
pub use layout::{Layout, Rect};
pub use registry::{Registry, SelectOption};
pub use state::{SelectState, SelectValue, SetOutcome};
pub use style::{Rgb, SelectPalette, Style, TextStyle};
pub use terminal::Terminal;
pub use widget::{create_select, SelectWidget};
