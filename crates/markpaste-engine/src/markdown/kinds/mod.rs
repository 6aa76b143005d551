pub mod block_quote;
pub mod code_fence;
pub mod code_span;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod span;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use span::{Emphasis, Image, Link, Strong};
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
