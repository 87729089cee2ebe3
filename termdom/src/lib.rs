pub mod buffer;
pub mod collapse;
pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod selector;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use document::{Document, EventResult};
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use selector::{Selector, SelectorError};
pub use stylesheet::{Display, Rule, Stylesheet};
pub use terminal::Terminal;
pub use types::*;
