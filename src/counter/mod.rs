pub mod counter;
pub mod top_list;

pub use counter::WordCounter;
pub use top_list::{select_top, TopListMode};
